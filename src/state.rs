use reqwest::Client;

use crate::application::{LinkPaymentService, OrderService};
use crate::config::Settings;
use crate::domain::ports::Navigator;
use crate::infrastructure::{create_client, HttpDiscountService, HttpOrderRepository};

pub type CheckoutService<N> =
    OrderService<LinkPaymentService<N>, HttpDiscountService, HttpOrderRepository>;

/// Shared by all requests: the settings and one HTTP client.
#[derive(Clone)]
pub struct AppState {
    client: Client,
    settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(create_client()?, settings))
    }

    pub fn with_client(client: Client, settings: Settings) -> Self {
        Self { client, settings }
    }

    /// Wires a checkout whose payment redirect goes to `navigator`.
    pub fn order_service<N: Navigator>(&self, navigator: N) -> CheckoutService<N> {
        OrderService::new(
            LinkPaymentService::new(self.settings.payment_link_url.clone(), navigator),
            HttpDiscountService::new(self.client.clone(), self.settings.coupon_api_url.clone()),
            HttpOrderRepository::new(self.client.clone(), self.settings.order_api_url.clone()),
        )
    }
}
