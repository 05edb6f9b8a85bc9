//! Application state holder: the in-memory observable owner of the
//! current expense list.

use crate::domain::{Expense, ExpenseError};
use crate::infra::db::ExpenseRepository;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task;

/// Holds the current expense list and mediates between caller actions
/// and the repository.
///
/// The list is always a full snapshot of the store as of the last read:
/// every mutation is followed by a complete re-read, never an
/// incremental update. Snapshots are published through a watch channel;
/// [`subscribe`](Self::subscribe) hands out receivers and
/// [`expenses`](Self::expenses) polls the latest value.
pub struct ExpenseState {
    repository: Arc<ExpenseRepository>,
    expenses: watch::Sender<Vec<Expense>>,
}

impl ExpenseState {
    /// Build the state holder and perform the initial load.
    pub async fn new(repository: ExpenseRepository) -> Result<Self, ExpenseError> {
        let (expenses, _) = watch::channel(Vec::new());
        let state = Self {
            repository: Arc::new(repository),
            expenses,
        };
        state.load().await?;
        Ok(state)
    }

    /// Re-read the full expense list from the repository and replace the
    /// published snapshot.
    pub async fn load(&self) -> Result<(), ExpenseError> {
        let repository = self.repository.clone();
        let rows = task::spawn_blocking(move || repository.get_all()).await??;
        log::debug!("Loaded {} expenses", rows.len());
        self.expenses.send_replace(rows);
        Ok(())
    }

    /// Parse `amount_text`, persist a new expense, then resynchronize the
    /// snapshot from the store.
    ///
    /// Malformed amount text defaults to `0.0` rather than failing; the
    /// caller is not told.
    pub async fn add(&self, title: &str, amount_text: &str) -> Result<(), ExpenseError> {
        let amount = match amount_text.trim().parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                log::warn!("Unparsable amount {:?}, defaulting to 0.0", amount_text);
                0.0
            }
        };

        let expense = Expense::new(title, amount);
        let repository = self.repository.clone();
        task::spawn_blocking(move || repository.insert(&expense)).await??;

        self.load().await
    }

    /// The latest published snapshot.
    pub fn expenses(&self) -> Vec<Expense> {
        self.expenses.borrow().clone()
    }

    /// Observe snapshot replacements. Receivers always see the latest
    /// full list once a mutation completes.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Expense>> {
        self.expenses.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::db::Database;

    async fn new_state() -> ExpenseState {
        let db = Database::open_in_memory().unwrap();
        let repository = ExpenseRepository::new(db.expense_store());
        ExpenseState::new(repository).await.unwrap()
    }

    #[tokio::test]
    async fn test_new_state_starts_empty() {
        let state = new_state().await;
        assert!(state.expenses().is_empty());
    }

    #[tokio::test]
    async fn test_new_state_loads_existing_rows() {
        let db = Database::open_in_memory().unwrap();
        db.expense_store().insert("Rent", 800.0).unwrap();

        let repository = ExpenseRepository::new(db.expense_store());
        let state = ExpenseState::new(repository).await.unwrap();

        let expenses = state.expenses();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].title, "Rent");
    }

    #[tokio::test]
    async fn test_add_parses_amount() {
        let state = new_state().await;
        state.add("Lunch", "12.5").await.unwrap();

        let expenses = state.expenses();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].title, "Lunch");
        assert_eq!(expenses[0].amount, 12.5);
    }

    #[tokio::test]
    async fn test_add_defaults_unparsable_amount_to_zero() {
        let state = new_state().await;
        state.add("Mystery", "not-a-number").await.unwrap();

        let expenses = state.expenses();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].amount, 0.0);
    }

    #[tokio::test]
    async fn test_sequential_adds_grow_snapshot() {
        let state = new_state().await;
        for i in 0..5 {
            state.add(&format!("Item {i}"), "1.0").await.unwrap();
        }

        let expenses = state.expenses();
        assert_eq!(expenses.len(), 5);

        let mut ids: Vec<_> = expenses.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[tokio::test]
    async fn test_subscriber_sees_snapshot_after_add() {
        let state = new_state().await;
        let mut rx = state.subscribe();

        state.add("Coffee", "3.5").await.unwrap();

        rx.changed().await.unwrap();
        let snapshot = rx.borrow_and_update().clone();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].title, "Coffee");
        assert_eq!(snapshot[0].amount, 3.5);
    }
}
