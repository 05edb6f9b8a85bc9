//! Infrastructure layer (adapters/implementations).
//!
//! IO-heavy integrations live here; currently just SQLite persistence.

pub mod db;
