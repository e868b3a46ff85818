//! Print job endpoints: create, list, get, pay, dispatch, stats.
//!
//! This is where the caller-side sequencing the stores refuse to own
//! actually happens:
//!
//! 1. quote the price with `pricing::quote`
//! 2. mutate the job store
//! 3. append the matching ledger event
//!
//! The job write always comes first. The pair is not transactional; a
//! crash between the two loses only the ledger record, which is accepted
//! demo behavior.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tokio::time::{sleep, Duration};
use tracing::{debug, warn};

use printz_core::{
    pricing, JobDraft, JobStatus, PaymentMethod, PrintJob, PrintSettings, TransactionDetails,
};
use printz_store::JobTotals;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// =============================================================================
// Create
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    /// QR session to attach to; omitted for walk-ins.
    #[serde(default)]
    pub qr_id: String,
    pub customer_id: String,
    pub files: Vec<String>,
    #[serde(flatten)]
    pub settings: PrintSettings,
}

/// `POST /api/print-jobs`
///
/// Quotes the price, creates the job (status `pending`), and records a
/// `job_created` ledger event carrying the quoted amount.
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateJobRequest>,
) -> ApiResult<(StatusCode, Json<PrintJob>)> {
    let total = pricing::quote(&request.settings, request.files.len());

    let draft = JobDraft {
        qr_id: request.qr_id,
        customer_id: request.customer_id,
        file_name: request.files.first().cloned().unwrap_or_default(),
        files: request.files,
        settings: request.settings,
        total_cost_cents: total.cents(),
    };

    // Job first, ledger second
    let job = state.jobs.create(draft)?;
    state.ledger.append(
        TransactionDetails::JobCreated {
            job_id: job.id.clone(),
            file_count: job.files.len(),
            settings: job.settings.clone(),
        },
        total,
    );

    Ok((StatusCode::CREATED, Json(job)))
}

// =============================================================================
// List / Get / Stats
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct ListJobsQuery {
    /// Optional status filter (e.g. `?status=paid`).
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobsResponse {
    pub count: usize,
    pub jobs: Vec<PrintJob>,
}

/// `GET /api/print-jobs`
///
/// Full snapshot in creation order. The store exposes no filtering, so
/// the optional `status` filter is applied here.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListJobsQuery>,
) -> ApiResult<Json<JobsResponse>> {
    let mut jobs = state.jobs.all();

    if let Some(raw) = query.status {
        let status: JobStatus = raw.parse().map_err(ApiError::from)?;
        jobs.retain(|j| j.status == status);
    }

    Ok(Json(JobsResponse {
        count: jobs.len(),
        jobs,
    }))
}

/// `GET /api/print-jobs/:id`
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PrintJob>> {
    let job = state
        .jobs
        .get(&id)
        .ok_or(printz_core::CoreError::JobNotFound(id))?;
    Ok(Json(job))
}

/// `GET /api/print-jobs/stats`
pub async fn stats(State(state): State<AppState>) -> Json<JobTotals> {
    Json(state.jobs.totals())
}

// =============================================================================
// Pay
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayJobRequest {
    pub method: PaymentMethod,
}

/// `POST /api/print-jobs/:id/pay`
///
/// Marks the job paid and records a `payment_completed` ledger event
/// carrying the job's frozen total. Payment authenticity is simulated
/// upstream; this endpoint trusts the caller.
pub async fn pay(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<PayJobRequest>,
) -> ApiResult<Json<PrintJob>> {
    let job = state.jobs.update_status(&id, JobStatus::Paid)?;

    state.ledger.append(
        TransactionDetails::PaymentCompleted {
            job_id: job.id.clone(),
            method: request.method,
            files: job.files.clone(),
            settings: job.settings.clone(),
        },
        job.total_cost(),
    );

    Ok(Json(job))
}

// =============================================================================
// Dispatch
// =============================================================================

/// `POST /api/print-jobs/:id/print`
///
/// Flips the job to `printing`, responds immediately, and spawns a
/// fire-and-forget task that marks it `completed` after the configured
/// delay. There is no cancel path; if the deferred update fails it is
/// logged and dropped.
pub async fn dispatch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PrintJob>> {
    let job = state.jobs.update_status(&id, JobStatus::Printing)?;

    let jobs = state.jobs.clone();
    let delay = Duration::from_millis(state.config.print_delay_ms);
    let job_id = job.id.clone();
    tokio::spawn(async move {
        sleep(delay).await;
        match jobs.update_status(&job_id, JobStatus::Completed) {
            Ok(_) => debug!(id = %job_id, "Print job completed"),
            Err(err) => warn!(id = %job_id, error = %err, "Deferred completion failed"),
        }
    });

    Ok(Json(job))
}

// =============================================================================
// Unit Tests
// =============================================================================
