use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Order items are required")]
    ItemsRequired,
    #[error("Order items are invalid")]
    ItemsInvalid,
    #[error("Total price must be greater than 0")]
    TotalInvalid,
    #[error("Invalid coupon")]
    InvalidCoupon,
    #[error("Failed to create order")]
    OrderCreationFailed,
    #[error("Transport error: {0}")]
    Transport(String),
}
