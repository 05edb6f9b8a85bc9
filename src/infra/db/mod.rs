//! SQLite persistence (infrastructure).

pub mod database;
pub mod repository;
pub mod store;

pub use database::Database;
pub use repository::ExpenseRepository;
pub use store::ExpenseStore;

use rusqlite::Connection;
use std::sync::{Arc, Mutex};

/// Shared handle to the underlying SQLite connection.
pub type DbConn = Arc<Mutex<Connection>>;
