//! Error types for the HTTP layer.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CoreError::Validation / bad JSON / bad query ─► 422 {"detail": msg}   │
//! │  CoreError::UnknownCoffee(id)                  ─► 400 {"detail": msg}   │
//! │  CoreError::Storage / MissingCoffee            ─► 500 (logged, hidden)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use barista_core::CoreError;
use serde_json::json;
use tracing::error;

/// API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or out-of-range input.
    #[error("{0}")]
    Validation(String),

    /// The request names something that doesn't exist.
    #[error("{0}")]
    BadReference(String),

    /// Anything the caller can't fix. The message is logged, never returned.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadReference(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        if !err.is_client_error() {
            return ApiError::Internal(err.to_string());
        }
        match err {
            CoreError::Validation(e) => ApiError::Validation(e.to_string()),
            other => ApiError::BadReference(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            ApiError::Internal(msg) => {
                error!(error = %msg, "Request failed");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
