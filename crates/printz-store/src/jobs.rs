//! # Print Job Store
//!
//! Owns the in-memory collection of print jobs.
//!
//! ## Job Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Print Job Lifecycle                               │
//! │                                                                         │
//! │  1. CREATE                                                              │
//! │     └── create(draft) → PrintJob { status: Pending }                   │
//! │         (store assigns id + created_at; caller quoted the price)       │
//! │                                                                         │
//! │  2. PAY                                                                 │
//! │     └── update_status(id, Paid)                                         │
//! │                                                                         │
//! │  3. DISPATCH                                                            │
//! │     └── update_status(id, Printing)                                     │
//! │                                                                         │
//! │  4. FINISH                                                              │
//! │     └── update_status(id, Completed)   (terminal)                       │
//! │                                                                         │
//! │  Each step is the ONLY legal move from its predecessor. Skips,         │
//! │  repeats, and reversals return InvalidStatusTransition. Unknown ids    │
//! │  return JobNotFound and leave the collection untouched.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The register is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple handlers may access/modify jobs concurrently
//! 2. Only one handler should mutate at a time
//! 3. The deferred print-completion task updates status from a spawned task

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use printz_core::{validation, CoreError, CoreResult, JobDraft, JobStatus, Money, PrintJob};

// =============================================================================
// Job Register (the collection)
// =============================================================================

/// The ordered collection of print jobs.
///
/// ## Invariants
/// - Ids are unique (UUID v4, assigned here)
/// - Jobs keep their insertion position forever; nothing removes or reorders
/// - `created_at` is set once at creation and never mutated
/// - `update_status` changes the status field and nothing else
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct JobRegister {
    /// Jobs in insertion order.
    pub jobs: Vec<PrintJob>,
}

impl JobRegister {
    /// Creates an empty register.
    pub fn new() -> Self {
        JobRegister { jobs: Vec::new() }
    }

    /// Validates a draft, assigns identity, and appends the new job.
    ///
    /// ## Behavior
    /// - Draft validation runs eagerly; a rejected draft changes nothing
    /// - The new job gets a fresh UUID v4, `Pending` status, and the
    ///   current timestamp
    /// - Returns a clone of the stored job (its id is the caller's handle)
    pub fn create(&mut self, draft: JobDraft) -> CoreResult<PrintJob> {
        validation::validate_job_draft(&draft)?;

        let job = PrintJob {
            id: Uuid::new_v4().to_string(),
            qr_id: draft.qr_id,
            customer_id: draft.customer_id,
            files: draft.files,
            file_name: draft.file_name,
            settings: draft.settings,
            total_cost_cents: draft.total_cost_cents,
            status: JobStatus::Pending,
            created_at: Utc::now(),
        };

        self.jobs.push(job.clone());
        Ok(job)
    }

    /// Moves a job one step forward through the lifecycle.
    ///
    /// ## Behavior
    /// - Unknown id: `JobNotFound`, collection untouched (the legacy
    ///   frontend ignored these silently; callers deserve to know)
    /// - Anything but the single legal forward step: `InvalidStatusTransition`
    /// - On success only `status` changes; position and every other field
    ///   are preserved
    pub fn update_status(&mut self, job_id: &str, next: JobStatus) -> CoreResult<PrintJob> {
        let job = self
            .jobs
            .iter_mut()
            .find(|j| j.id == job_id)
            .ok_or_else(|| CoreError::JobNotFound(job_id.to_string()))?;

        if !job.status.can_transition_to(next) {
            return Err(CoreError::InvalidStatusTransition {
                job_id: job.id.clone(),
                from: job.status,
                to: next,
            });
        }

        job.status = next;
        Ok(job.clone())
    }

    /// Looks up a job by id.
    pub fn get(&self, job_id: &str) -> Option<&PrintJob> {
        self.jobs.iter().find(|j| j.id == job_id)
    }

    /// Number of jobs in the register.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Checks if the register is empty.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Sum of quoted totals across all jobs (the dashboard's headline
    /// revenue number counts every job, paid or not).
    pub fn revenue(&self) -> Money {
        self.jobs.iter().map(|j| j.total_cost()).sum()
    }

    /// Distinct customer identities seen so far.
    pub fn unique_customers(&self) -> usize {
        self.jobs
            .iter()
            .map(|j| j.customer_id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Distinct QR sessions jobs have attached to (walk-ins excluded).
    pub fn active_shops(&self) -> usize {
        self.jobs
            .iter()
            .filter(|j| !j.qr_id.is_empty())
            .map(|j| j.qr_id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Per-status job counts.
    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for job in &self.jobs {
            match job.status {
                JobStatus::Pending => counts.pending += 1,
                JobStatus::Paid => counts.paid += 1,
                JobStatus::Printing => counts.printing += 1,
                JobStatus::Completed => counts.completed += 1,
            }
        }
        counts
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Per-status breakdown for the admin panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub pending: usize,
    pub paid: usize,
    pub printing: usize,
    pub completed: usize,
}

/// Dashboard summary computed from the live register.
///
/// These mirror the numbers the shop dashboard and admin panel show:
/// job count, quoted revenue, distinct customers, distinct QR sessions,
/// and the per-status breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobTotals {
    pub total_jobs: usize,
    pub revenue_cents: i64,
    pub unique_customers: usize,
    pub active_shops: usize,
    pub status_counts: StatusCounts,
}

impl From<&JobRegister> for JobTotals {
    fn from(register: &JobRegister) -> Self {
        JobTotals {
            total_jobs: register.len(),
            revenue_cents: register.revenue().cents(),
            unique_customers: register.unique_customers(),
            active_shops: register.active_shops(),
            status_counts: register.status_counts(),
        }
    }
}

// =============================================================================
// Shared Store Handle
// =============================================================================

/// Shared handle to the job register.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<JobRegister>>` because:
/// - `Arc`: Allows shared ownership across handler tasks
/// - `Mutex`: Ensures only one task mutates the register at a time
///
/// ## Why Not RwLock?
/// Register operations are quick, and the demo's traffic is a single
/// browser. A RwLock would add complexity with minimal benefit.
#[derive(Debug, Clone, Default)]
pub struct PrintJobStore {
    register: Arc<Mutex<JobRegister>>,
}

impl PrintJobStore {
    /// Creates a store with an empty register.
    pub fn new() -> Self {
        PrintJobStore {
            register: Arc::new(Mutex::new(JobRegister::new())),
        }
    }

    /// Executes a function with read access to the register.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = store.with_register(|r| JobTotals::from(r));
    /// ```
    pub fn with_register<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&JobRegister) -> R,
    {
        let register = self.register.lock().expect("Job register mutex poisoned");
        f(&register)
    }

    /// Executes a function with write access to the register.
    pub fn with_register_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut JobRegister) -> R,
    {
        let mut register = self.register.lock().expect("Job register mutex poisoned");
        f(&mut register)
    }

    /// Creates a job from a draft. See [`JobRegister::create`].
    pub fn create(&self, draft: JobDraft) -> CoreResult<PrintJob> {
        let job = self.with_register_mut(|r| r.create(draft))?;
        debug!(
            id = %job.id,
            customer = %job.customer_id,
            cost = %job.total_cost(),
            files = job.files.len(),
            "Print job created"
        );
        Ok(job)
    }

    /// Moves a job one step forward. See [`JobRegister::update_status`].
    pub fn update_status(&self, job_id: &str, next: JobStatus) -> CoreResult<PrintJob> {
        let job = self.with_register_mut(|r| r.update_status(job_id, next))?;
        debug!(id = %job.id, status = %job.status, "Print job status updated");
        Ok(job)
    }

    /// Returns a snapshot of one job.
    pub fn get(&self, job_id: &str) -> Option<PrintJob> {
        self.with_register(|r| r.get(job_id).cloned())
    }

    /// Returns a snapshot of every job in insertion order.
    ///
    /// No filtering or paging here: callers slice the snapshot themselves.
    pub fn all(&self) -> Vec<PrintJob> {
        self.with_register(|r| r.jobs.clone())
    }

    /// Number of jobs.
    pub fn len(&self) -> usize {
        self.with_register(|r| r.len())
    }

    /// Checks if the store holds no jobs.
    pub fn is_empty(&self) -> bool {
        self.with_register(|r| r.is_empty())
    }

    /// Dashboard summary of the current register.
    pub fn totals(&self) -> JobTotals {
        self.with_register(|r| JobTotals::from(r))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use printz_core::{Orientation, PaperSize, PrintSettings};

    fn test_draft(customer: &str) -> JobDraft {
        JobDraft {
            qr_id: "qr_1700000000000_abc123def".to_string(),
            customer_id: customer.to_string(),
            files: vec!["report.pdf".to_string(), "appendix.pdf".to_string()],
            file_name: "report.pdf".to_string(),
            settings: PrintSettings {
                copies: 2,
                color: false,
                paper_size: PaperSize::A4,
                orientation: Orientation::Portrait,
                duplex: false,
            },
            total_cost_cents: 40,
        }
    }

    #[test]
    fn test_create_assigns_identity() {
        let store = PrintJobStore::new();

        let before = Utc::now();
        let a = store.create(test_draft("customer_1")).unwrap();
        let b = store.create(test_draft("customer_2")).unwrap();
        let after = Utc::now();

        assert_ne!(a.id, b.id);
        assert_eq!(a.status, JobStatus::Pending);
        assert_eq!(b.status, JobStatus::Pending);
        assert!(a.created_at >= before && a.created_at <= after);
        assert!(b.created_at >= before && b.created_at <= after);
    }

    #[test]
    fn test_create_preserves_draft_fields() {
        let store = PrintJobStore::new();
        let job = store.create(test_draft("customer_1")).unwrap();

        assert_eq!(job.customer_id, "customer_1");
        assert_eq!(job.qr_id, "qr_1700000000000_abc123def");
        assert_eq!(job.files.len(), 2);
        assert_eq!(job.file_name, "report.pdf");
        assert_eq!(job.total_cost_cents, 40);
        assert_eq!(job.settings.copies, 2);
    }

    #[test]
    fn test_create_rejects_bad_draft() {
        let store = PrintJobStore::new();

        let mut draft = test_draft("customer_1");
        draft.settings.copies = 0;
        assert!(matches!(
            store.create(draft),
            Err(CoreError::Validation(_))
        ));

        let mut draft = test_draft("customer_1");
        draft.files.clear();
        assert!(store.create(draft).is_err());

        // Nothing was stored
        assert!(store.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let store = PrintJobStore::new();
        let ids: Vec<String> = (0..5)
            .map(|i| {
                store
                    .create(test_draft(&format!("customer_{}", i)))
                    .unwrap()
                    .id
            })
            .collect();

        let stored: Vec<String> = store.all().into_iter().map(|j| j.id).collect();
        assert_eq!(stored, ids);
    }

    #[test]
    fn test_update_status_changes_only_status() {
        let store = PrintJobStore::new();
        store.create(test_draft("customer_0")).unwrap();
        let created = store.create(test_draft("customer_1")).unwrap();
        store.create(test_draft("customer_2")).unwrap();

        let updated = store.update_status(&created.id, JobStatus::Paid).unwrap();
        assert_eq!(updated.status, JobStatus::Paid);

        // Every other field is untouched
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.customer_id, created.customer_id);
        assert_eq!(updated.files, created.files);
        assert_eq!(updated.file_name, created.file_name);
        assert_eq!(updated.settings, created.settings);
        assert_eq!(updated.total_cost_cents, created.total_cost_cents);
        assert_eq!(updated.created_at, created.created_at);

        // And the job kept its position
        let all = store.all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[1].id, created.id);
        assert_eq!(all[1].status, JobStatus::Paid);
    }

    #[test]
    fn test_update_status_unknown_id_leaves_store_untouched() {
        let store = PrintJobStore::new();
        store.create(test_draft("customer_1")).unwrap();
        let snapshot = store.all();

        let err = store
            .update_status("no-such-id", JobStatus::Paid)
            .unwrap_err();
        assert!(matches!(err, CoreError::JobNotFound(_)));

        assert_eq!(store.all(), snapshot);
    }

    #[test]
    fn test_update_status_rejects_skips_and_reversals() {
        let store = PrintJobStore::new();
        let job = store.create(test_draft("customer_1")).unwrap();

        // Skip: pending -> printing
        let err = store
            .update_status(&job.id, JobStatus::Printing)
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidStatusTransition { .. }));

        // Repeat: pending -> pending
        assert!(store.update_status(&job.id, JobStatus::Pending).is_err());

        // Status is still pending after the failed attempts
        assert_eq!(store.get(&job.id).unwrap().status, JobStatus::Pending);
    }

    #[test]
    fn test_full_lifecycle() {
        let store = PrintJobStore::new();
        let job = store.create(test_draft("customer_1")).unwrap();

        store.update_status(&job.id, JobStatus::Paid).unwrap();
        store.update_status(&job.id, JobStatus::Printing).unwrap();
        store.update_status(&job.id, JobStatus::Completed).unwrap();

        assert_eq!(store.get(&job.id).unwrap().status, JobStatus::Completed);

        // Completed is terminal
        assert!(store.update_status(&job.id, JobStatus::Pending).is_err());
        assert!(store.update_status(&job.id, JobStatus::Completed).is_err());
    }

    #[test]
    fn test_totals() {
        let store = PrintJobStore::new();

        let mut draft = test_draft("customer_a");
        draft.total_cost_cents = 60;
        store.create(draft).unwrap();

        let mut draft = test_draft("customer_a"); // same customer again
        draft.total_cost_cents = 160;
        draft.qr_id = String::new(); // walk-in, no QR session
        let paid = store.create(draft).unwrap();

        let mut draft = test_draft("customer_b");
        draft.total_cost_cents = 15;
        draft.qr_id = "qr_1700000000001_zzz999zzz".to_string();
        store.create(draft).unwrap();

        store.update_status(&paid.id, JobStatus::Paid).unwrap();

        let totals = store.totals();
        assert_eq!(totals.total_jobs, 3);
        assert_eq!(totals.revenue_cents, 235);
        assert_eq!(totals.unique_customers, 2);
        assert_eq!(totals.active_shops, 2); // empty qr_id not counted
        assert_eq!(totals.status_counts.pending, 2);
        assert_eq!(totals.status_counts.paid, 1);
        assert_eq!(totals.status_counts.completed, 0);
    }

    #[test]
    fn test_clones_share_state() {
        let store = PrintJobStore::new();
        let handle = store.clone();

        handle.create(test_draft("customer_1")).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_concurrent_creates_keep_ids_unique() {
        let store = PrintJobStore::new();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for j in 0..25 {
                        store
                            .create(test_draft(&format!("customer_{}_{}", i, j)))
                            .unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let all = store.all();
        assert_eq!(all.len(), 200);
        let ids: HashSet<String> = all.into_iter().map(|j| j.id).collect();
        assert_eq!(ids.len(), 200);
    }
}
