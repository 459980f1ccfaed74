use async_trait::async_trait;
use bigdecimal::BigDecimal;

use super::errors::CheckoutError;
use super::order::{Order, OrderPayload, PaymentMethod};

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create_order(&self, payload: &OrderPayload) -> Result<Order, CheckoutError>;
}

#[async_trait]
pub trait DiscountService: Send + Sync {
    async fn apply_discount(
        &self,
        coupon_id: &str,
        total_price: BigDecimal,
    ) -> Result<BigDecimal, CheckoutError>;
}

pub trait PaymentService: Send + Sync {
    fn build_payment_method(&self, total_price: &BigDecimal) -> PaymentMethod;
    /// Sends the user to the payment page for `order`. Failures are not reported.
    fn pay_via_link(&self, order: &Order);
}

/// Opens a URL for the user. Fire-and-forget.
pub trait Navigator: Send + Sync {
    fn open(&self, url: &str);
}
