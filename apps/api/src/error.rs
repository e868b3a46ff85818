//! # API Error Type
//!
//! Unified error type for REST handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in PrintZplus                             │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  POST /api/print-jobs/:id/pay                                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler                                                         │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Unknown id? ──── CoreError::JobNotFound ──────────┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Bad transition? ─ CoreError::InvalidStatus… ──── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄── 404 { "code": "JOB_NOT_FOUND", "message": "Print job not…" } ───  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error response carries a machine-readable `code` and a
//! human-readable `message`; the HTTP status is derived from the code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use printz_core::{CoreError, ValidationError};

/// API error returned from REST handlers.
///
/// ## Serialization
/// This is what the frontend receives when a request fails:
/// ```json
/// {
///   "code": "JOB_NOT_FOUND",
///   "message": "Print job not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Print job not found (404)
    JobNotFound,

    /// Ledger transaction not found (404)
    TransactionNotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Requested lifecycle step is not the legal forward move (422)
    InvalidStatusTransition,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status this code maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            ErrorCode::JobNotFound | ErrorCode::TransactionNotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::InvalidStatusTransition => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Shorthand for a validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Shorthand for a missing ledger transaction.
    pub fn transaction_not_found(id: &str) -> Self {
        ApiError::new(
            ErrorCode::TransactionNotFound,
            format!("Transaction not found: {}", id),
        )
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::JobNotFound(_) => ErrorCode::JobNotFound,
            CoreError::TransactionNotFound(_) => ErrorCode::TransactionNotFound,
            CoreError::InvalidStatusTransition { .. } => ErrorCode::InvalidStatusTransition,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        ApiError::new(code, err.to_string())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::new(ErrorCode::ValidationError, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

/// Convenience alias for handler return types.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use printz_core::JobStatus;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorCode::JobNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::TransactionNotFound.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ErrorCode::ValidationError.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::InvalidStatusTransition.status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ErrorCode::Internal.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_core_error() {
        let err: ApiError = CoreError::JobNotFound("42".to_string()).into();
        assert_eq!(err.code, ErrorCode::JobNotFound);
        assert_eq!(err.message, "Print job not found: 42");

        let err: ApiError = CoreError::InvalidStatusTransition {
            job_id: "42".to_string(),
            from: JobStatus::Pending,
            to: JobStatus::Completed,
        }
        .into();
        assert_eq!(err.code, ErrorCode::InvalidStatusTransition);
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::validation("copies must be positive");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "copies must be positive");
    }
}
