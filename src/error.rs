//! Error types for Tripcraft server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0} is not configured")]
    Configuration(String),

    #[error("Rate limit exceeded. Please try again in a moment.")]
    UpstreamRateLimited,

    #[error("AI credits exhausted. Please add credits to continue.")]
    UpstreamQuotaExhausted,

    #[error("AI gateway error: {0}")]
    Upstream(u16),

    #[error("Failed to parse trip plan")]
    GenerationParse,

    #[error("Gateway request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Configuration(_) => {
                tracing::error!("Configuration error: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::UpstreamRateLimited => (StatusCode::TOO_MANY_REQUESTS, self.to_string()),
            AppError::UpstreamQuotaExhausted => (StatusCode::PAYMENT_REQUIRED, self.to_string()),
            AppError::Upstream(status) => {
                tracing::error!("AI gateway returned status {}", status);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::GenerationParse => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            AppError::Http(e) => {
                tracing::error!("Gateway request failed: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate trip plan".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse { error: message });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
