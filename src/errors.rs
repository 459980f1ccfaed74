use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::CheckoutError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unprocessable(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CheckoutError> for AppError {
    fn from(e: CheckoutError) -> Self {
        match e {
            CheckoutError::ItemsRequired
            | CheckoutError::ItemsInvalid
            | CheckoutError::TotalInvalid => AppError::BadRequest(e.to_string()),
            CheckoutError::InvalidCoupon => AppError::Unprocessable(e.to_string()),
            CheckoutError::OrderCreationFailed | CheckoutError::Transport(_) => {
                AppError::Upstream(e.to_string())
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::BadRequest(msg) | AppError::Unprocessable(msg) => msg.as_str(),
            AppError::Upstream(detail) => {
                log::error!("Checkout failed upstream: {}", detail);
                "Upstream service error"
            }
            AppError::Internal(detail) => {
                log::error!("Checkout failed: {}", detail);
                "Internal server error"
            }
        };
        HttpResponse::build(self.status_code()).json(serde_json::json!({ "error": message }))
    }
}
