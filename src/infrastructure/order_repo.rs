use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::domain::errors::CheckoutError;
use crate::domain::order::{Order, OrderPayload};
use crate::domain::ports::OrderRepository;

/// Creates orders through the remote order API.
#[derive(Clone)]
pub struct HttpOrderRepository {
    client: Client,
    endpoint: Url,
}

impl HttpOrderRepository {
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl OrderRepository for HttpOrderRepository {
    async fn create_order(&self, payload: &OrderPayload) -> Result<Order, CheckoutError> {
        // `.json()` sets `Content-Type: application/json`.
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            log::warn!(
                "Order API at {} answered {}",
                self.endpoint,
                response.status()
            );
            return Err(CheckoutError::OrderCreationFailed);
        }

        Ok(response.json::<Order>().await?)
    }
}
