//! Spendlog: a minimal local expense ledger core.
//!
//! A single-table SQLite store ([`infra::db`]) behind a pass-through
//! repository, driven by an async state holder ([`state::ExpenseState`])
//! that publishes full-list snapshots after every mutation.

pub mod domain;
pub mod infra;
pub mod state;

use std::future::Future;
use tokio::runtime::Runtime;

lazy_static::lazy_static! {
    static ref RUNTIME: Runtime = Runtime::new().expect("Failed to create Tokio runtime");
}

/// Drive a future to completion on the crate's shared runtime.
///
/// Lets a synchronous embedder call into the async state holder without
/// owning a Tokio runtime of its own.
pub fn block_on<F: Future>(future: F) -> F::Output {
    RUNTIME.block_on(future)
}
