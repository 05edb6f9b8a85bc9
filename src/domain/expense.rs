use serde::{Deserialize, Serialize};

/// Identifier assigned by the store on insertion.
pub type ExpenseId = i64;

/// A single recorded expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned by the store. `0` on an expense that
    /// has not been persisted yet.
    pub id: ExpenseId,
    /// User-supplied label. No uniqueness or format constraint.
    pub title: String,
    /// User-supplied amount.
    pub amount: f64,
}

impl Expense {
    /// Build an expense with the placeholder id `0`; the store assigns
    /// the real id on insert.
    pub fn new(title: impl Into<String>, amount: f64) -> Self {
        Self {
            id: 0,
            title: title.into(),
            amount,
        }
    }
}
