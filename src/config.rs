use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_ORDER_API_URL: &str = "https://67eb7353aa794fb3222a4c0e.mockapi.io/order";
pub const DEFAULT_COUPON_API_URL: &str = "https://67eb7353aa794fb3222a4c0e.mockapi.io/coupons";
pub const DEFAULT_PAYMENT_LINK_URL: &str = "https://payment.example.com/pay";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a valid URL, got '{value}': {source}")]
    InvalidUrl {
        var: &'static str,
        value: String,
        source: url::ParseError,
    },
    #[error("PORT must be a valid number, got '{0}'")]
    InvalidPort(String),
}

/// Remote endpoints and listen address.
#[derive(Debug, Clone)]
pub struct Settings {
    pub order_api_url: Url,
    pub coupon_api_url: Url,
    pub payment_link_url: Url,
    pub host: String,
    pub port: u16,
}

impl Settings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = |var: &'static str, default: &str| -> Result<Url, ConfigError> {
            let value = lookup(var).unwrap_or_else(|| default.to_string());
            Url::parse(&value).map_err(|source| ConfigError::InvalidUrl { var, value, source })
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8080,
        };

        Ok(Self {
            order_api_url: url("ORDER_API_URL", DEFAULT_ORDER_API_URL)?,
            coupon_api_url: url("COUPON_API_URL", DEFAULT_COUPON_API_URL)?,
            payment_link_url: url("PAYMENT_LINK_URL", DEFAULT_PAYMENT_LINK_URL)?,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
        })
    }
}
