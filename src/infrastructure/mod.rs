pub mod discount_client;
pub mod http;
pub mod order_repo;

pub use discount_client::HttpDiscountService;
pub use http::create_client;
pub use order_repo::HttpOrderRepository;
