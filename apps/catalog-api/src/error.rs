//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error → Response Mapping                             │
//! │                                                                         │
//! │  StoreError::NotFound              → 404 NOT_FOUND                      │
//! │  CoreError::PageOutOfRange         → 404 INVALID_PAGE                   │
//! │  ValidationError                   → 400 VALIDATION_ERROR               │
//! │  unparsable path id                → 400 INVALID_ID                     │
//! │  malformed JSON body               → 400 BAD_REQUEST                    │
//! │  StoreError::LockPoisoned          → 500 INTERNAL (logged, generic)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use catalog_core::{CoreError, ValidationError};
use catalog_store::StoreError;

/// Error returned from HTTP handlers.
///
/// ## Serialization
/// This is what clients receive when a request fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product with ID=42 not found"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,

    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Path id is not a base-10 integer (400)
    InvalidId,

    /// Requested page starts past the end (404)
    InvalidPage,

    /// Request body could not be parsed (400)
    BadRequest,

    /// Internal server error (500)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn invalid_id() -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, ErrorCode::InvalidId, "Invalid Product ID")
    }

    pub fn invalid_page() -> Self {
        ApiError::new(StatusCode::NOT_FOUND, ErrorCode::InvalidPage, "Invalid page")
    }

    pub fn bad_json() -> Self {
        ApiError::new(
            StatusCode::BAD_REQUEST,
            ErrorCode::BadRequest,
            "Bad request, failed to parse JSON",
        )
    }

    /// Creates an internal error. The detail is logged, never sent.
    pub fn internal(detail: impl std::fmt::Display) -> Self {
        tracing::error!("Internal error: {}", detail);
        ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::Internal,
            "Internal server error",
        )
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::new(
            StatusCode::BAD_REQUEST,
            ErrorCode::ValidationError,
            format!("Bad request, {}", err),
        )
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => {
                ApiError::new(StatusCode::NOT_FOUND, ErrorCode::NotFound, err.to_string())
            }
            StoreError::Core(CoreError::PageOutOfRange { page, limit, total }) => {
                tracing::debug!(page, limit, total, "Page out of range");
                ApiError::invalid_page()
            }
            StoreError::LockPoisoned => ApiError::internal(err),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected JSON body");
        ApiError::bad_json()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
