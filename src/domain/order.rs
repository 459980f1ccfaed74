use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::amount;
use super::errors::CheckoutError;

const AUPAY_CEILING: i64 = 300_000;
const PAYPAY_CEILING: i64 = 500_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Aupay,
    Paypay,
    Credit,
}

impl PaymentMethod {
    /// Tier for a total price. Each tier's upper bound is inclusive.
    pub fn for_total(total_price: &BigDecimal) -> Self {
        if *total_price <= BigDecimal::from(AUPAY_CEILING) {
            PaymentMethod::Aupay
        } else if *total_price <= BigDecimal::from(PAYPAY_CEILING) {
            PaymentMethod::Paypay
        } else {
            PaymentMethod::Credit
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub product_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(with = "amount")]
    pub price: BigDecimal,
    pub quantity: i32,
}

impl OrderItem {
    pub fn is_valid(&self) -> bool {
        self.price > BigDecimal::from(0) && self.quantity > 0
    }

    pub fn line_total(&self) -> BigDecimal {
        &self.price * BigDecimal::from(self.quantity)
    }
}

/// Caller-supplied order data before pricing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftOrder {
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_id: Option<String>,
}

impl DraftOrder {
    /// Coupon to look up, if any. An empty identifier counts as no coupon.
    pub fn coupon(&self) -> Option<&str> {
        self.coupon_id.as_deref().filter(|c| !c.is_empty())
    }
}

/// Body sent to the order endpoint: the draft plus the computed fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub items: Vec<OrderItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_id: Option<String>,
    #[serde(with = "amount")]
    pub total_price: BigDecimal,
    pub payment_method: PaymentMethod,
}

impl OrderPayload {
    pub fn from_draft(draft: DraftOrder, total_price: BigDecimal, payment_method: PaymentMethod) -> Self {
        Self {
            items: draft.items,
            coupon_id: draft.coupon_id,
            total_price,
            payment_method,
        }
    }
}

/// An order as persisted by the order service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_id: Option<String>,
    #[serde(default, with = "amount::option", skip_serializing_if = "Option::is_none")]
    pub total_price: Option<BigDecimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
}

/// Checks the items of a draft: present, and each with positive price and quantity.
pub fn validate_items(items: &[OrderItem]) -> Result<(), CheckoutError> {
    if items.is_empty() {
        return Err(CheckoutError::ItemsRequired);
    }
    if !items.iter().all(OrderItem::is_valid) {
        return Err(CheckoutError::ItemsInvalid);
    }
    Ok(())
}

pub fn subtotal(items: &[OrderItem]) -> BigDecimal {
    items.iter().map(OrderItem::line_total).sum()
}

/// Rejects a non-positive total. Unreachable for items that passed
/// [`validate_items`].
pub fn ensure_positive_total(total: BigDecimal) -> Result<BigDecimal, CheckoutError> {
    if total <= BigDecimal::from(0) {
        return Err(CheckoutError::TotalInvalid);
    }
    Ok(total)
}

/// Subtracts a coupon discount, never going below zero.
pub fn apply_coupon(total_price: &BigDecimal, discount: &BigDecimal) -> BigDecimal {
    let discounted = total_price - discount;
    if discounted > BigDecimal::from(0) {
        discounted
    } else {
        BigDecimal::from(0)
    }
}
