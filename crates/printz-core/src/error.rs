//! # Error Types
//!
//! Domain-specific error types for printz-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  printz-core errors (this file)                                        │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  printz-store reuses CoreError                                         │
//! │  (in-memory stores have no foreign failure source to wrap)             │
//! │                                                                         │
//! │  API errors (in apps/api)                                              │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (job id, status names, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::types::JobStatus;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Print job cannot be found.
    ///
    /// ## When This Occurs
    /// - Job ID doesn't exist in the store
    /// - A deferred status update raced a restart (jobs are in-memory only)
    ///
    /// The legacy frontend silently ignored status updates for unknown ids;
    /// here the caller gets a typed error and the store stays untouched.
    #[error("Print job not found: {0}")]
    JobNotFound(String),

    /// Ledger transaction cannot be found.
    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),

    /// The requested status change is not the single forward step the
    /// job lifecycle allows.
    ///
    /// ## Lifecycle
    /// ```text
    /// pending ──► paid ──► printing ──► completed
    /// ```
    /// Jumps (pending → printing), repeats (paid → paid), and reversals
    /// (completed → pending) are all rejected with this error.
    #[error("Print job {job_id} is {from}, cannot move to {to}")]
    InvalidStatusTransition {
        job_id: String,
        from: JobStatus,
        to: JobStatus,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., unknown status name, unknown paper size).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Two fields that must agree do not.
    #[error("{field} must match {expected}")]
    Mismatch { field: String, expected: String },

    /// Collection has too many elements.
    #[error("{field} cannot have more than {max} entries")]
    TooMany { field: String, max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
