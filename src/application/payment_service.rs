use bigdecimal::BigDecimal;
use reqwest::Url;

use crate::domain::order::{Order, PaymentMethod};
use crate::domain::ports::{Navigator, PaymentService};

/// Picks the payment tier and redirects to the external payment page.
pub struct LinkPaymentService<N> {
    payment_link: Url,
    navigator: N,
}

impl<N: Navigator> LinkPaymentService<N> {
    pub fn new(payment_link: Url, navigator: N) -> Self {
        Self { payment_link, navigator }
    }

    /// `{payment_link}?orderId={id}`
    pub fn payment_url(&self, order: &Order) -> Url {
        let mut url = self.payment_link.clone();
        url.query_pairs_mut().append_pair("orderId", &order.id);
        url
    }
}

impl<N: Navigator> PaymentService for LinkPaymentService<N> {
    fn build_payment_method(&self, total_price: &BigDecimal) -> PaymentMethod {
        PaymentMethod::for_total(total_price)
    }

    fn pay_via_link(&self, order: &Order) {
        let url = self.payment_url(order);
        log::debug!("Redirecting order {} to {}", order.id, url);
        self.navigator.open(url.as_str());
    }
}
