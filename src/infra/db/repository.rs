use super::ExpenseStore;
use crate::domain::Expense;
use anyhow::Result;

/// Pass-through façade over the expense store.
///
/// Exists as an indirection seam between the state holder and storage;
/// adds no logic of its own.
pub struct ExpenseRepository {
    store: ExpenseStore,
}

impl ExpenseRepository {
    pub fn new(store: ExpenseStore) -> Self {
        Self { store }
    }

    /// Persist one expense. The placeholder id on `expense` is ignored;
    /// the store assigns the real one.
    pub fn insert(&self, expense: &Expense) -> Result<()> {
        self.store.insert(&expense.title, expense.amount)
    }

    /// All persisted expenses, in unspecified order.
    pub fn get_all(&self) -> Result<Vec<Expense>> {
        self.store.fetch_all()
    }
}
