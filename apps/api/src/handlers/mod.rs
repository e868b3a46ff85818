//! # REST Handlers
//!
//! All HTTP handlers for the PrintZplus API.
//!
//! ## Handler Organization
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Handler Modules                                  │
//! │                                                                         │
//! │  system.rs    GET  /api/health, GET /api/                              │
//! │  auth.rs      POST /api/auth/register|login|logout, GET profile        │
//! │  qr.rs        POST /api/qr, POST /api/uploads                          │
//! │  jobs.rs      /api/print-jobs: create, list, get, pay, print, stats    │
//! │  ledger.rs    /api/blockchain: list (filter/search), get, stats        │
//! │                                                                         │
//! │  Handlers own the dual write the stores refuse to coordinate:          │
//! │  mutate the job store FIRST, append the ledger event SECOND.           │
//! │  The pair is not transactional; a crash in between loses only the      │
//! │  ledger record.                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod jobs;
pub mod ledger;
pub mod qr;
pub mod system;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Builds the full `/api` router over the shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        // System
        .route("/api/health", get(system::health))
        .route("/api/", get(system::service_info))
        // Auth placeholders (no enforcement; see module docs)
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/profile", get(auth::profile))
        // QR sessions + secure uploads
        .route("/api/qr", post(qr::generate))
        .route("/api/uploads", post(qr::record_upload))
        // Print jobs
        .route(
            "/api/print-jobs",
            post(jobs::create).get(jobs::list),
        )
        .route("/api/print-jobs/stats", get(jobs::stats))
        .route("/api/print-jobs/:id", get(jobs::get_one))
        .route("/api/print-jobs/:id/pay", post(jobs::pay))
        .route("/api/print-jobs/:id/print", post(jobs::dispatch))
        // Blockchain explorer
        .route("/api/blockchain", get(ledger::list))
        .route("/api/blockchain/stats", get(ledger::stats))
        .route("/api/blockchain/:id", get(ledger::get_one))
        .with_state(state)
}

// =============================================================================
// Router Tests
// =============================================================================
