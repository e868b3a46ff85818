//! Shared application state.
//!
//! One `AppState` is built in `main` and cloned into every handler via
//! axum's `State` extractor. The stores are cheap handles around shared
//! collections, so cloning the whole state per request is fine.

use printz_store::{LedgerStore, PrintJobStore};

use crate::config::ApiConfig;

/// Shared application state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The in-memory print job register.
    pub jobs: PrintJobStore,

    /// The in-memory transaction ledger.
    pub ledger: LedgerStore,

    /// Server configuration (shop name, print delay).
    pub config: ApiConfig,
}

impl AppState {
    /// Creates fresh state with empty stores.
    pub fn new(config: ApiConfig) -> Self {
        AppState {
            jobs: PrintJobStore::new(),
            ledger: LedgerStore::new(),
            config,
        }
    }
}
