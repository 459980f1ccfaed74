pub mod amount;
pub mod errors;
pub mod order;
pub mod ports;
