//! # Ledger Store
//!
//! Owns the append-only transaction ledger, the demo's mock blockchain.
//!
//! ## Append-Only Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Transaction Ledger                               │
//! │                                                                         │
//! │  append(details, amount)                                                │
//! │     └── Transaction { id: UUID, created_at: now, details, amount }     │
//! │         pushed to the end; position = block number forever             │
//! │                                                                         │
//! │  There is NO update and NO delete. The only mutation this store        │
//! │  exposes is append. Records read back exactly as they were written,    │
//! │  and the displayed block hash is re-derived from the id on demand,     │
//! │  never stored (it cannot drift from the record).                        │
//! │                                                                         │
//! │  Infallible by construction: the tagged TransactionDetails union       │
//! │  replaces the legacy type-string + free-form-object pair, so a         │
//! │  mismatched payload is unrepresentable and append needs no             │
//! │  validation path.                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! Same `Arc<Mutex<T>>` shape as the job register: handlers on different
//! tasks append concurrently, and the deferred print-completion task never
//! touches the ledger, so a plain mutex is plenty.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use printz_core::{Money, Transaction, TransactionDetails, TransactionType};

// =============================================================================
// Ledger (the collection)
// =============================================================================

/// The ordered, append-only collection of transactions.
///
/// ## Invariants
/// - Ids are unique (UUID v4, assigned here)
/// - Append order is display order; nothing removes or reorders
/// - Records are immutable once appended
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    /// Transactions in append order.
    pub transactions: Vec<Transaction>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Ledger {
            transactions: Vec::new(),
        }
    }

    /// Assigns identity and appends a new transaction. Cannot fail.
    pub fn append(&mut self, details: TransactionDetails, amount: Money) -> Transaction {
        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            details,
            amount_cents: amount.cents(),
            created_at: Utc::now(),
        };

        self.transactions.push(transaction.clone());
        transaction
    }

    /// Looks up a transaction by id.
    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Number of records in the ledger.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Checks if the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of recorded amounts across all transactions.
    pub fn total_value(&self) -> Money {
        self.transactions.iter().map(|t| t.amount()).sum()
    }

    /// Number of distinct event types recorded so far.
    pub fn distinct_types(&self) -> usize {
        self.transactions
            .iter()
            .map(|t| t.kind())
            .collect::<HashSet<TransactionType>>()
            .len()
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Explorer summary computed from the live ledger.
///
/// Mirrors the headline numbers the blockchain-explorer screen shows:
/// record count, total recorded value, and how many event kinds appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerTotals {
    pub total_transactions: usize,
    pub total_value_cents: i64,
    pub distinct_types: usize,
}

impl From<&Ledger> for LedgerTotals {
    fn from(ledger: &Ledger) -> Self {
        LedgerTotals {
            total_transactions: ledger.len(),
            total_value_cents: ledger.total_value().cents(),
            distinct_types: ledger.distinct_types(),
        }
    }
}

// =============================================================================
// Shared Store Handle
// =============================================================================

/// Shared handle to the transaction ledger.
///
/// Same ownership story as [`crate::PrintJobStore`]: created once in
/// `main`, cloned into every handler that records events. The ledger
/// never calls into the job store; recording a job AND its event is the
/// caller's sequencing.
#[derive(Debug, Clone, Default)]
pub struct LedgerStore {
    ledger: Arc<Mutex<Ledger>>,
}

impl LedgerStore {
    /// Creates a store with an empty ledger.
    pub fn new() -> Self {
        LedgerStore {
            ledger: Arc::new(Mutex::new(Ledger::new())),
        }
    }

    /// Executes a function with read access to the ledger.
    pub fn with_ledger<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Ledger) -> R,
    {
        let ledger = self.ledger.lock().expect("Ledger mutex poisoned");
        f(&ledger)
    }

    /// Executes a function with write access to the ledger.
    pub fn with_ledger_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Ledger) -> R,
    {
        let mut ledger = self.ledger.lock().expect("Ledger mutex poisoned");
        f(&mut ledger)
    }

    /// Appends a new transaction. See [`Ledger::append`].
    pub fn append(&self, details: TransactionDetails, amount: Money) -> Transaction {
        let transaction = self.with_ledger_mut(|l| l.append(details, amount));
        debug!(
            id = %transaction.id,
            kind = %transaction.kind(),
            amount = %transaction.amount(),
            "Ledger transaction appended"
        );
        transaction
    }

    /// Returns a snapshot of one transaction.
    pub fn get(&self, id: &str) -> Option<Transaction> {
        self.with_ledger(|l| l.get(id).cloned())
    }

    /// Returns a snapshot of every transaction in append order.
    ///
    /// Filtering and searching stay with the caller, as in the job store.
    pub fn all(&self) -> Vec<Transaction> {
        self.with_ledger(|l| l.transactions.clone())
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.with_ledger(|l| l.len())
    }

    /// Checks if the ledger holds no records.
    pub fn is_empty(&self) -> bool {
        self.with_ledger(|l| l.is_empty())
    }

    /// Explorer summary of the current ledger.
    pub fn totals(&self) -> LedgerTotals {
        self.with_ledger(|l| LedgerTotals::from(l))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use printz_core::{Orientation, PaperSize, PaymentMethod, PrintSettings};

    fn qr_event(shop: &str) -> TransactionDetails {
        TransactionDetails::QrGenerated {
            shop_name: shop.to_string(),
            qr_id: "qr_1700000000000_abc123def".to_string(),
        }
    }

    fn payment_event(job_id: &str) -> TransactionDetails {
        TransactionDetails::PaymentCompleted {
            job_id: job_id.to_string(),
            method: PaymentMethod::Card,
            files: vec!["report.pdf".to_string()],
            settings: PrintSettings {
                copies: 1,
                color: false,
                paper_size: PaperSize::A4,
                orientation: Orientation::Portrait,
                duplex: false,
            },
        }
    }

    #[test]
    fn test_append_assigns_identity() {
        let store = LedgerStore::new();

        let before = Utc::now();
        let a = store.append(qr_event("Shop A"), Money::zero());
        let b = store.append(qr_event("Shop B"), Money::zero());
        let after = Utc::now();

        assert_ne!(a.id, b.id);
        assert!(a.created_at >= before && a.created_at <= after);
        assert!(b.created_at >= before && b.created_at <= after);
    }

    #[test]
    fn test_append_preserves_payload() {
        let store = LedgerStore::new();
        let tx = store.append(payment_event("job-1"), Money::from_cents(60));

        assert_eq!(tx.kind(), TransactionType::PaymentCompleted);
        assert_eq!(tx.amount_cents, 60);
        match &tx.details {
            TransactionDetails::PaymentCompleted { job_id, files, .. } => {
                assert_eq!(job_id, "job-1");
                assert_eq!(files, &vec!["report.pdf".to_string()]);
            }
            other => panic!("wrong variant: {:?}", other),
        }
    }

    #[test]
    fn test_append_order_preserved() {
        let store = LedgerStore::new();
        let ids: Vec<String> = (0..5)
            .map(|i| store.append(qr_event(&format!("Shop {}", i)), Money::zero()).id)
            .collect();

        let stored: Vec<String> = store.all().into_iter().map(|t| t.id).collect();
        assert_eq!(stored, ids);
    }

    #[test]
    fn test_get_by_id() {
        let store = LedgerStore::new();
        let tx = store.append(qr_event("Shop"), Money::zero());

        assert_eq!(store.get(&tx.id).unwrap().id, tx.id);
        assert!(store.get("no-such-id").is_none());
    }

    #[test]
    fn test_block_hash_is_stable_across_reads() {
        let store = LedgerStore::new();
        let tx = store.append(qr_event("Shop"), Money::zero());

        let first = store.get(&tx.id).unwrap().block_hash();
        let second = store.get(&tx.id).unwrap().block_hash();
        assert_eq!(first, second);
        assert_eq!(first.len(), 66);
        assert!(first.starts_with("0x"));
    }

    #[test]
    fn test_totals() {
        let store = LedgerStore::new();
        assert_eq!(
            store.totals(),
            LedgerTotals {
                total_transactions: 0,
                total_value_cents: 0,
                distinct_types: 0,
            }
        );

        store.append(qr_event("Shop"), Money::zero());
        store.append(payment_event("job-1"), Money::from_cents(60));
        store.append(payment_event("job-2"), Money::from_cents(160));

        let totals = store.totals();
        assert_eq!(totals.total_transactions, 3);
        assert_eq!(totals.total_value_cents, 220);
        assert_eq!(totals.distinct_types, 2); // qr_generated + payment_completed
    }

    #[test]
    fn test_clones_share_state() {
        let store = LedgerStore::new();
        let handle = store.clone();

        handle.append(qr_event("Shop"), Money::zero());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_concurrent_appends_keep_ids_unique() {
        let store = LedgerStore::new();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for j in 0..25 {
                        store.append(payment_event(&format!("job_{}_{}", i, j)), Money::zero());
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let all = store.all();
        assert_eq!(all.len(), 200);
        let ids: HashSet<String> = all.into_iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 200);
    }
}
