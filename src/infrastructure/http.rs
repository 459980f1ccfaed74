use reqwest::Client;

use crate::domain::errors::CheckoutError;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<reqwest::Error> for CheckoutError {
    fn from(e: reqwest::Error) -> Self {
        CheckoutError::Transport(e.to_string())
    }
}

/// Client shared by the remote adapters. No timeout is set; callers that need
/// one wrap the checkout themselves.
pub fn create_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}
