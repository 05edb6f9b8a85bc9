//! Domain error types for the expense ledger.

use thiserror::Error;

/// Errors surfaced by the state holder.
///
/// Malformed amount text is deliberately not represented here: `add`
/// defaults it to `0.0` instead of failing.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("Storage task was cancelled or panicked: {0}")]
    Dispatch(#[from] tokio::task::JoinError),

    #[error("Storage operation failed: {0}")]
    Storage(#[from] anyhow::Error),
}
