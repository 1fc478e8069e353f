//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use domain_claimant::ClaimantError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// The verification service answered for us; its status and body are
    /// relayed verbatim.
    #[error("Upstream error ({status})")]
    Upstream { status: u16, body: Value },

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "unauthorized", msg),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg),
            ApiError::Upstream { status, body } => {
                let status = StatusCode::from_u16(status)
                    .unwrap_or(StatusCode::SERVICE_UNAVAILABLE);
                return (status, Json(body)).into_response();
            }
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ClaimantError> for ApiError {
    fn from(err: ClaimantError) -> Self {
        match err {
            ClaimantError::Validation(v) => ApiError::Validation(v.to_string()),
            ClaimantError::NotFound(msg) => ApiError::NotFound(msg),
            ClaimantError::LicenceRejected { status, body }
            | ClaimantError::VerificationUnavailable { status, body } => {
                ApiError::Upstream { status, body }
            }
            ClaimantError::Store(msg) => ApiError::Internal(msg),
        }
    }
}
