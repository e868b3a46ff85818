//! # Validation Module
//!
//! Input validation utilities for PrintZplus.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: API Handler (Rust)                                           │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: Business rule validation                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store                                                        │
//! │  └── Re-runs draft validation before any state changes                 │
//! │                                                                         │
//! │  The legacy system validated by TYPE only; values like copies = 0      │
//! │  sailed straight into the store. Here the store rejects them eagerly.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use printz_core::validation::{validate_copies, validate_files};
//!
//! // Validate before creating a job
//! validate_copies(5).unwrap();
//! validate_files(&["report.pdf".to_string()]).unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::JobDraft;
use crate::{MAX_COPIES, MAX_FILES_PER_JOB};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a copy count.
///
/// ## Rules
/// - Must be positive (>= 1)
/// - Must not exceed MAX_COPIES (999)
///
/// ## Example
/// ```rust
/// use printz_core::validation::validate_copies;
///
/// assert!(validate_copies(1).is_ok());
/// assert!(validate_copies(0).is_err());
/// assert!(validate_copies(1000).is_err());
/// ```
pub fn validate_copies(copies: u32) -> ValidationResult<()> {
    if copies == 0 {
        return Err(ValidationError::MustBePositive {
            field: "copies".to_string(),
        });
    }

    if copies > MAX_COPIES {
        return Err(ValidationError::OutOfRange {
            field: "copies".to_string(),
            min: 1,
            max: MAX_COPIES as i64,
        });
    }

    Ok(())
}

/// Validates a quoted cost in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (a job with promotional pricing still gets recorded)
pub fn validate_cost_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "totalCostCents".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer identity string.
///
/// ## Rules
/// - Must not be empty (the frontend sends `customer_<millis>` strings,
///   but any non-empty opaque token is fine)
/// - Maximum 100 characters
pub fn validate_customer_id(customer_id: &str) -> ValidationResult<()> {
    let customer_id = customer_id.trim();

    if customer_id.is_empty() {
        return Err(ValidationError::Required {
            field: "customerId".to_string(),
        });
    }

    if customer_id.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "customerId".to_string(),
            max: 100,
        });
    }

    Ok(())
}

/// Validates a shop display name (used when issuing QR sessions).
///
/// ## Rules
/// - Must not be empty
/// - Maximum 200 characters
pub fn validate_shop_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "shopName".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "shopName".to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates an uploaded file name list.
///
/// ## Rules
/// - Must not be empty (a job with nothing to print is meaningless)
/// - Must not exceed MAX_FILES_PER_JOB (100)
/// - Every name must be non-empty
pub fn validate_files(files: &[String]) -> ValidationResult<()> {
    if files.is_empty() {
        return Err(ValidationError::Required {
            field: "files".to_string(),
        });
    }

    if files.len() > MAX_FILES_PER_JOB {
        return Err(ValidationError::TooMany {
            field: "files".to_string(),
            max: MAX_FILES_PER_JOB,
        });
    }

    if files.iter().any(|name| name.trim().is_empty()) {
        return Err(ValidationError::Required {
            field: "files[].name".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Draft Validator
// =============================================================================

/// Validates a complete job draft before the store accepts it.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Customer: Create Job                                                   │
/// │                                                                         │
/// │  Draft { files, copies, customerId, fileName, totalCostCents }         │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_job_draft() ← THIS FUNCTION                                  │
/// │       │                                                                 │
/// │       ├── copies out of range? → Error                                 │
/// │       ├── files empty / too many? → Error                              │
/// │       ├── fileName ≠ files[0]? → Error (display name must match)       │
/// │       ├── customerId empty? → Error                                    │
/// │       ├── negative cost? → Error                                       │
/// │       │                                                                 │
/// │       └── OK → store assigns id/status/created_at and appends          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_job_draft(draft: &JobDraft) -> ValidationResult<()> {
    validate_copies(draft.settings.copies)?;
    validate_files(&draft.files)?;
    validate_customer_id(&draft.customer_id)?;
    validate_cost_cents(draft.total_cost_cents)?;

    // files is non-empty past this point
    if draft.file_name != draft.files[0] {
        return Err(ValidationError::Mismatch {
            field: "fileName".to_string(),
            expected: "files[0]".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
