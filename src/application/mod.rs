pub mod order_service;
pub mod payment_service;

pub use order_service::OrderService;
pub use payment_service::LinkPaymentService;
