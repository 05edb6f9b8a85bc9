//! Domain types for the expense ledger.

pub mod error;
pub mod expense;

pub use error::ExpenseError;
pub use expense::{Expense, ExpenseId};
