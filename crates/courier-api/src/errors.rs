//! HTTP error translation
//!
//! Maps the core taxonomy onto status codes: validation errors are the
//! caller's fault (422), duplicate keys conflict with stored state (409),
//! storage failures are ours (500). Every error body carries the stable
//! code so clients can key on it instead of parsing messages.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use courier_core::CourierError;
use serde_json::json;
use tracing::error;

/// Error type returned by every handler
#[derive(Debug)]
pub enum ApiError {
    /// A core operation failed
    Domain(CourierError),
    /// The requested resource does not exist (lookup routes only)
    NotFound(String),
}

impl From<CourierError> for ApiError {
    fn from(err: CourierError) -> Self {
        ApiError::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, "ERR_NOT_FOUND", message),
            ApiError::Domain(err) => {
                let status = match &err {
                    CourierError::DuplicateLicense { .. } => StatusCode::CONFLICT,
                    e if e.is_caller_error() => StatusCode::UNPROCESSABLE_ENTITY,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                if status == StatusCode::INTERNAL_SERVER_ERROR {
                    error!("storage failure: {}", err);
                }
                (status, err.code(), err.to_string())
            }
        };

        (
            status,
            Json(json!({
                "status": "error",
                "error": message,
                "code": code,
            })),
        )
            .into_response()
    }
}
