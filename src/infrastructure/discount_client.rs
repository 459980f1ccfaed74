use async_trait::async_trait;
use bigdecimal::BigDecimal;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::domain::amount;
use crate::domain::errors::CheckoutError;
use crate::domain::order::apply_coupon;
use crate::domain::ports::DiscountService;

#[derive(Debug, Deserialize)]
struct CouponRecord {
    #[serde(with = "amount")]
    discount: BigDecimal,
}

/// Looks coupons up in the remote coupon API and applies their discount.
#[derive(Clone)]
pub struct HttpDiscountService {
    client: Client,
    endpoint: Url,
}

impl HttpDiscountService {
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// `{endpoint}/{coupon_id}`, with the id as a single encoded path segment.
    pub fn coupon_url(&self, coupon_id: &str) -> Result<Url, CheckoutError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| {
                CheckoutError::Transport(format!(
                    "coupon endpoint {} cannot take a path segment",
                    self.endpoint
                ))
            })?
            .pop_if_empty()
            .push(coupon_id);
        Ok(url)
    }
}

#[async_trait]
impl DiscountService for HttpDiscountService {
    async fn apply_discount(
        &self,
        coupon_id: &str,
        total_price: BigDecimal,
    ) -> Result<BigDecimal, CheckoutError> {
        let url = self.coupon_url(coupon_id)?;
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            log::warn!("Coupon {} lookup answered {}", coupon_id, response.status());
            return Err(CheckoutError::InvalidCoupon);
        }

        let coupon: CouponRecord = response.json().await?;
        Ok(apply_coupon(&total_price, &coupon.discount))
    }
}
