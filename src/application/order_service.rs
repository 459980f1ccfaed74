use crate::domain::errors::CheckoutError;
use crate::domain::order::{self, DraftOrder, Order, OrderPayload};
use crate::domain::ports::{DiscountService, OrderRepository, PaymentService};

/// Runs a checkout: validate, price, discount, tier, persist, redirect.
pub struct OrderService<P, D, R> {
    payment: P,
    discount: D,
    repo: R,
}

impl<P, D, R> OrderService<P, D, R>
where
    P: PaymentService,
    D: DiscountService,
    R: OrderRepository,
{
    pub fn new(payment: P, discount: D, repo: R) -> Self {
        Self { payment, discount, repo }
    }

    /// Processes a draft order and returns the order as persisted.
    ///
    /// Stops at the first failure; errors from the discount lookup and the
    /// repository are returned as they were raised. The payment redirect runs
    /// only after the order has been created and cannot fail the checkout.
    pub async fn process(&self, draft: DraftOrder) -> Result<Order, CheckoutError> {
        if let Err(e) = order::validate_items(&draft.items) {
            log::warn!("Rejecting draft order: {}", e);
            return Err(e);
        }

        let subtotal = order::subtotal(&draft.items);
        log::debug!("Subtotal for {} item(s): {}", draft.items.len(), subtotal);

        let mut total_price = order::ensure_positive_total(subtotal).inspect_err(|e| {
            log::warn!("Rejecting draft order: {}", e);
        })?;

        if let Some(coupon_id) = draft.coupon() {
            total_price = self.discount.apply_discount(coupon_id, total_price).await?;
            log::debug!("Coupon {} applied, total is now {}", coupon_id, total_price);
        }

        let payment_method = self.payment.build_payment_method(&total_price);
        let payload = OrderPayload::from_draft(draft, total_price, payment_method);

        let created = self.repo.create_order(&payload).await?;
        log::info!(
            "Order {} created: total {} via {:?}",
            created.id,
            payload.total_price,
            payment_method
        );

        self.payment.pay_via_link(&created);
        Ok(created)
    }
}
