use std::sync::{Arc, OnceLock};

use actix_web::{http::header, web, HttpResponse};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::amount;
use crate::domain::order::{DraftOrder, Order, OrderItem, PaymentMethod};
use crate::domain::ports::Navigator;
use crate::errors::AppError;
use crate::state::AppState;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub id: String,
    pub product_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Unit price, must be greater than 0.
    #[serde(with = "amount")]
    #[schema(value_type = f64, example = 100)]
    pub price: BigDecimal,
    /// Must be greater than 0.
    pub quantity: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[serde(default)]
    pub items: Vec<OrderItemDto>,
    /// Coupon to apply; empty or missing means no discount.
    #[serde(default)]
    pub coupon_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: String,
    pub items: Vec<OrderItemDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_id: Option<String>,
    #[serde(with = "amount::option", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub total_price: Option<BigDecimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "AUPAY")]
    pub payment_method: Option<PaymentMethod>,
}

impl From<OrderItemDto> for OrderItem {
    fn from(dto: OrderItemDto) -> Self {
        OrderItem {
            id: dto.id,
            product_id: dto.product_id,
            name: dto.name,
            price: dto.price,
            quantity: dto.quantity,
        }
    }
}

impl From<OrderItem> for OrderItemDto {
    fn from(item: OrderItem) -> Self {
        OrderItemDto {
            id: item.id,
            product_id: item.product_id,
            name: item.name,
            price: item.price,
            quantity: item.quantity,
        }
    }
}

impl From<CheckoutRequest> for DraftOrder {
    fn from(req: CheckoutRequest) -> Self {
        DraftOrder {
            items: req.items.into_iter().map(OrderItem::from).collect(),
            coupon_id: req.coupon_id,
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            id: order.id,
            items: order.items.into_iter().map(OrderItemDto::from).collect(),
            coupon_id: order.coupon_id,
            total_price: order.total_price,
            payment_method: order.payment_method,
        }
    }
}

// ── Navigation ───────────────────────────────────────────────────────────────

/// Per-request navigator: keeps the payment URL so the handler can answer
/// with a redirect to it. Only the first URL is kept.
#[derive(Clone, Default)]
pub struct RedirectSlot {
    url: Arc<OnceLock<String>>,
}

impl RedirectSlot {
    pub fn location(&self) -> Option<&str> {
        self.url.get().map(String::as_str)
    }
}

impl Navigator for RedirectSlot {
    fn open(&self, url: &str) {
        if self.url.set(url.to_string()).is_err() {
            log::warn!("Ignoring second redirect to {}", url);
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /checkout
///
/// Prices the draft order, applies its coupon, creates the order through the
/// order API and redirects to the payment page for the created order.
#[utoipa::path(
    post,
    path = "/checkout",
    request_body = CheckoutRequest,
    responses(
        (status = 303, description = "Order created; Location points at the payment page", body = OrderResponse),
        (status = 400, description = "Order items missing or invalid"),
        (status = 422, description = "Invalid coupon"),
        (status = 502, description = "Order or coupon service failed"),
    ),
    tag = "checkout"
)]
pub async fn checkout(
    state: web::Data<AppState>,
    body: web::Json<CheckoutRequest>,
) -> Result<HttpResponse, AppError> {
    let redirect = RedirectSlot::default();
    let service = state.order_service(redirect.clone());

    let order = service.process(body.into_inner().into()).await?;

    let Some(location) = redirect.location() else {
        return Err(AppError::Internal(format!(
            "no payment redirect for order {}",
            order.id
        )));
    };

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .json(OrderResponse::from(order)))
}

/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up")),
    tag = "checkout"
)]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
