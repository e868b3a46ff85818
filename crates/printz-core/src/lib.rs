//! # printz-core: Pure Business Logic for PrintZplus
//!
//! This crate is the **heart** of PrintZplus. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       PrintZplus Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (React)                             │   │
//! │  │   Upload UI ──► Settings UI ──► Payment UI ──► Shop Dashboard  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ REST (JSON)                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/api (axum)                              │   │
//! │  │   create job, pay job, dispatch print, browse ledger            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ printz-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │   hash    │  │   │
//! │  │   │ PrintJob  │  │   Money   │  │ rate table│  │ block_hash│  │   │
//! │  │   │Transaction│  │  (cents)  │  │  quote()  │  │ (mock 0x) │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                printz-store (State Layer)                       │   │
//! │  │          In-memory job collection + append-only ledger           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (PrintJob, Transaction, PrintSettings, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Per-page rate table and cost quoting
//! - [`hash`] - Mock block hash derivation for ledger display
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use printz_core::pricing::quote;
//! use printz_core::types::{Orientation, PaperSize, PrintSettings};
//!
//! let settings = PrintSettings {
//!     copies: 2,
//!     color: false,
//!     paper_size: PaperSize::A4,
//!     orientation: Orientation::Portrait,
//!     duplex: false,
//! };
//!
//! // 3 files x 2 copies x 10 cents per A4 b&w page = $0.60
//! let cost = quote(&settings, 3);
//! assert_eq!(cost.cents(), 60);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod hash;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use printz_core::Money` instead of
// `use printz_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use hash::block_hash;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of files in a single print job
///
/// ## Business Reason
/// Prevents runaway upload batches and keeps job payloads reviewable
/// on the shop dashboard. Can be made configurable per-shop later.
pub const MAX_FILES_PER_JOB: usize = 100;

/// Maximum copies of a single print job
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// Can be made configurable per-shop later.
pub const MAX_COPIES: u32 = 999;

/// Discount applied to duplex (double-sided) jobs, in basis points.
///
/// 2000 bps = 20% off the gross cost. Duplex halves paper usage, and the
/// demo shop passes part of that saving on.
pub const DUPLEX_DISCOUNT_BPS: u32 = 2000;
