//! # printz-store: In-Memory Stores for PrintZplus
//!
//! The demo keeps everything in memory: a register of print jobs and an
//! append-only ledger of transactions. This crate owns both.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          State Layer                                    │
//! │                                                                         │
//! │   apps/api handlers                                                     │
//! │        │                                                                │
//! │        ├──────────────► PrintJobStore ───► Arc<Mutex<JobRegister>>     │
//! │        │                  create / update_status / get / all / totals  │
//! │        │                                                                │
//! │        └──────────────► LedgerStore ─────► Arc<Mutex<Ledger>>          │
//! │                           append / get / all / totals                   │
//! │                                                                         │
//! │   The two stores never talk to each other. Recording a job AND its     │
//! │   ledger event is the caller's sequencing, and it is not atomic:       │
//! │   a crash between the two writes loses the ledger record.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **Explicit ownership**: stores are plain values created in `main` and
//!    cloned into whoever needs them. No globals, no singletons.
//! 2. **Snapshot reads**: `get`/`all` hand out clones, never references into
//!    the locked collection.
//! 3. **Memory safety only**: the mutex guards the collections; it makes no
//!    cross-store consistency promises.

pub mod jobs;
pub mod ledger;

pub use jobs::{JobRegister, JobTotals, PrintJobStore, StatusCounts};
pub use ledger::{Ledger, LedgerStore, LedgerTotals};
