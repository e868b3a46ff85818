//! # Domain Types
//!
//! Core domain types used throughout PrintZplus.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌──────────────────┐      │
//! │  │    PrintJob     │   │  Transaction    │   │  PrintSettings   │      │
//! │  │  ─────────────  │   │  ─────────────  │   │  ──────────────  │      │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  copies          │      │
//! │  │  qr_id          │   │  details (enum) │   │  color           │      │
//! │  │  customer_id    │   │  amount_cents   │   │  paper_size      │      │
//! │  │  files          │   │  created_at     │   │  orientation     │      │
//! │  │  total_cost     │   │  block hash is  │   │  duplex          │      │
//! │  │  status         │   │  DERIVED, never │   └──────────────────┘      │
//! │  │  created_at     │   │  stored         │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌──────────────────┐      │
//! │  │   JobStatus     │   │   PaperSize     │   │ TransactionType  │      │
//! │  │  ─────────────  │   │  ─────────────  │   │  ──────────────  │      │
//! │  │  Pending        │   │  A4  A3         │   │  QrGenerated     │      │
//! │  │  Paid           │   │  Letter Legal   │   │  JobCreated      │      │
//! │  │  Printing       │   └─────────────────┘   │  PaymentCompleted│      │
//! │  │  Completed      │                         │  DocumentEncrypted│     │
//! │  └─────────────────┘                         └──────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle Invariant
//! A job's status only ever moves forward, one step at a time:
//! `pending → paid → printing → completed`. [`JobStatus::next`] encodes the
//! legal step; the store rejects everything else.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::hash;
use crate::money::Money;

// =============================================================================
// Job Status
// =============================================================================

/// The lifecycle status of a print job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Job created, awaiting payment.
    Pending,
    /// Payment recorded, ready for the shop queue.
    Paid,
    /// Shop has dispatched the job to a printer.
    Printing,
    /// Printing finished, job can be collected.
    Completed,
}

impl JobStatus {
    /// Returns the single legal next status, or `None` from `Completed`.
    ///
    /// ## Example
    /// ```rust
    /// use printz_core::types::JobStatus;
    ///
    /// assert_eq!(JobStatus::Pending.next(), Some(JobStatus::Paid));
    /// assert_eq!(JobStatus::Completed.next(), None);
    /// ```
    pub const fn next(&self) -> Option<JobStatus> {
        match self {
            JobStatus::Pending => Some(JobStatus::Paid),
            JobStatus::Paid => Some(JobStatus::Printing),
            JobStatus::Printing => Some(JobStatus::Completed),
            JobStatus::Completed => None,
        }
    }

    /// Checks whether moving to `target` is the legal forward step.
    pub fn can_transition_to(&self, target: JobStatus) -> bool {
        self.next() == Some(target)
    }

    /// True once the job has left the lifecycle (nothing follows).
    pub const fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed)
    }
}

impl Default for JobStatus {
    fn default() -> Self {
        JobStatus::Pending
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Pending => write!(f, "pending"),
            JobStatus::Paid => write!(f, "paid"),
            JobStatus::Printing => write!(f, "printing"),
            JobStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for JobStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(JobStatus::Pending),
            "paid" => Ok(JobStatus::Paid),
            "printing" => Ok(JobStatus::Printing),
            "completed" => Ok(JobStatus::Completed),
            other => Err(ValidationError::InvalidFormat {
                field: "status".to_string(),
                reason: format!(
                    "unknown status '{}'. Valid options: pending, paid, printing, completed",
                    other
                ),
            }),
        }
    }
}

// =============================================================================
// Paper Size
// =============================================================================

/// Supported paper sizes.
///
/// Serialized exactly as the display names the frontend shows ("A4", "A3",
/// "Letter", "Legal"). The per-page rate table lives in [`crate::pricing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaperSize {
    A4,
    A3,
    Letter,
    Legal,
}

impl std::fmt::Display for PaperSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaperSize::A4 => write!(f, "A4"),
            PaperSize::A3 => write!(f, "A3"),
            PaperSize::Letter => write!(f, "Letter"),
            PaperSize::Legal => write!(f, "Legal"),
        }
    }
}

impl std::str::FromStr for PaperSize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "a4" => Ok(PaperSize::A4),
            "a3" => Ok(PaperSize::A3),
            "letter" => Ok(PaperSize::Letter),
            "legal" => Ok(PaperSize::Legal),
            other => Err(ValidationError::InvalidFormat {
                field: "paperSize".to_string(),
                reason: format!(
                    "unknown paper size '{}'. Valid options: A4, A3, Letter, Legal",
                    other
                ),
            }),
        }
    }
}

// =============================================================================
// Orientation
// =============================================================================

/// Page orientation. Recorded with the job, no pricing effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Portrait
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer paid. The demo offers card and UPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Upi,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Card => write!(f, "card"),
            PaymentMethod::Upi => write!(f, "upi"),
        }
    }
}

// =============================================================================
// Print Settings
// =============================================================================

/// Customer-selected print options.
///
/// These five fields travel together: they are chosen on the settings
/// screen, priced by [`crate::pricing::quote`], frozen into the job, and
/// echoed into ledger events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PrintSettings {
    /// Number of copies (1 to MAX_COPIES).
    pub copies: u32,

    /// Color printing (false = black and white).
    pub color: bool,

    /// Paper size, drives the per-page rate.
    pub paper_size: PaperSize,

    /// Page orientation (display only, no pricing effect).
    pub orientation: Orientation,

    /// Double-sided printing (earns the duplex discount).
    pub duplex: bool,
}

// =============================================================================
// Print Job
// =============================================================================

/// A print job as stored and served to the frontend.
///
/// ## Field Provenance
/// - `id`, `status`, `created_at` are assigned by the store at creation
/// - everything else comes from the caller via [`JobDraft`]
///
/// File *contents* never enter the system. `files` holds display names
/// only; the upload step is a separate collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PrintJob {
    /// Unique identifier (UUID v4), assigned by the store.
    pub id: String,

    /// QR session this job attaches to. Empty string = walk-in, no session.
    pub qr_id: String,

    /// Opaque caller-supplied customer identity.
    pub customer_id: String,

    /// Uploaded file names (never contents).
    pub files: Vec<String>,

    /// Display name, always the first uploaded file.
    pub file_name: String,

    /// Customer-selected print options, flattened into the job on the wire.
    #[serde(flatten)]
    pub settings: PrintSettings,

    /// Quoted total in cents, frozen at creation.
    pub total_cost_cents: i64,

    /// Lifecycle status (pending → paid → printing → completed).
    pub status: JobStatus,

    /// When the job was created, assigned by the store.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl PrintJob {
    /// Returns the frozen total as Money.
    #[inline]
    pub fn total_cost(&self) -> Money {
        Money::from_cents(self.total_cost_cents)
    }
}

// =============================================================================
// Job Draft
// =============================================================================

/// Everything a caller supplies to create a print job.
///
/// The store adds `id`, `status = pending`, and `created_at`. The total is
/// quoted by the caller (via [`crate::pricing::quote`]) before the draft is
/// submitted, mirroring how the frontend prices before it creates.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub qr_id: String,
    pub customer_id: String,
    pub files: Vec<String>,
    pub file_name: String,
    #[serde(flatten)]
    pub settings: PrintSettings,
    pub total_cost_cents: i64,
}

// =============================================================================
// Transaction Type
// =============================================================================

/// The kinds of events the ledger records.
///
/// Derived from [`TransactionDetails`], never stored separately, so the
/// type tag and the payload can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    QrGenerated,
    JobCreated,
    PaymentCompleted,
    DocumentEncrypted,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::QrGenerated => write!(f, "qr_generated"),
            TransactionType::JobCreated => write!(f, "job_created"),
            TransactionType::PaymentCompleted => write!(f, "payment_completed"),
            TransactionType::DocumentEncrypted => write!(f, "document_encrypted"),
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "qr_generated" => Ok(TransactionType::QrGenerated),
            "job_created" => Ok(TransactionType::JobCreated),
            "payment_completed" => Ok(TransactionType::PaymentCompleted),
            "document_encrypted" => Ok(TransactionType::DocumentEncrypted),
            other => Err(ValidationError::InvalidFormat {
                field: "type".to_string(),
                reason: format!(
                    "unknown transaction type '{}'. Valid options: qr_generated, \
                     job_created, payment_completed, document_encrypted",
                    other
                ),
            }),
        }
    }
}

// =============================================================================
// Transaction Details
// =============================================================================

/// Structured payload of a ledger event, tagged by transaction type.
///
/// The legacy system stored a free-form `details` object next to a type
/// string; here the payload IS the type. Constructing an event with a
/// mismatched payload is unrepresentable, so the ledger can accept every
/// append without validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransactionDetails {
    /// A shop issued a QR session for customers to attach jobs to.
    #[serde(rename_all = "camelCase")]
    QrGenerated { shop_name: String, qr_id: String },

    /// A print job entered the system.
    #[serde(rename_all = "camelCase")]
    JobCreated {
        job_id: String,
        file_count: usize,
        settings: PrintSettings,
    },

    /// A customer paid for a job.
    #[serde(rename_all = "camelCase")]
    PaymentCompleted {
        job_id: String,
        method: PaymentMethod,
        files: Vec<String>,
        settings: PrintSettings,
    },

    /// Documents were received and sealed for printing.
    #[serde(rename_all = "camelCase")]
    DocumentEncrypted { files: Vec<String>, total_bytes: u64 },
}

impl TransactionDetails {
    /// Returns the type tag for this payload.
    pub fn kind(&self) -> TransactionType {
        match self {
            TransactionDetails::QrGenerated { .. } => TransactionType::QrGenerated,
            TransactionDetails::JobCreated { .. } => TransactionType::JobCreated,
            TransactionDetails::PaymentCompleted { .. } => TransactionType::PaymentCompleted,
            TransactionDetails::DocumentEncrypted { .. } => TransactionType::DocumentEncrypted,
        }
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// One append-only ledger record.
///
/// ## Block Hash Is Derived
/// The displayed `0x…` hash is recomputed from the id on demand via
/// [`Transaction::block_hash`]; it is never stored, so it can never drift
/// from the id. It is decorative, not cryptographic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier (UUID v4), assigned by the ledger.
    pub id: String,

    /// Typed event payload, tagged by transaction type.
    pub details: TransactionDetails,

    /// Monetary value of the event in cents (zero for non-monetary events).
    pub amount_cents: i64,

    /// When the event was recorded, assigned by the ledger.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Returns the event's type tag, derived from the payload.
    #[inline]
    pub fn kind(&self) -> TransactionType {
        self.details.kind()
    }

    /// Returns the amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }

    /// Derives the display block hash from the transaction id.
    #[inline]
    pub fn block_hash(&self) -> String {
        hash::block_hash(&self.id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
