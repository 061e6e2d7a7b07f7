//! API error types and JSON error response formatting.
//!
//! JSON endpoints report failures as `{error, message}` with a matching
//! status code. The chat endpoint answers in plain text instead, see
//! [`apology_response`].

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use shopbot_catalog::CatalogError;

/// Fixed reply for any chat request that could not be processed.
pub const APOLOGY: &str = "Sorry, I'm having technical difficulties. Please try again.";

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code (e.g., "bad_request", "service_unavailable").
    pub error: String,
    /// Human-readable error message.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// API error type that maps to HTTP status codes and JSON responses.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request - missing or invalid parameters.
    BadRequest(String),
    /// 500 Internal Server Error - unexpected server error.
    Internal(String),
    /// 503 Service Unavailable - a backing service could not be reached.
    ServiceUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
            ApiError::ServiceUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable", msg)
            }
        };

        let body = ErrorBody {
            error: error_code.to_string(),
            message,
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidQuery(msg) => ApiError::BadRequest(msg),
            CatalogError::Transport(_) | CatalogError::Status { .. } => {
                ApiError::ServiceUnavailable(err.to_string())
            }
            CatalogError::Decode(_) => ApiError::Internal(err.to_string()),
        }
    }
}

/// Plain-text 500 sent when a chat request fails or a handler panics.
pub fn apology_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        APOLOGY,
    )
        .into_response()
}
