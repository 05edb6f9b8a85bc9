use super::DbConn;
use crate::domain::Expense;
use anyhow::Result;

/// Single-table record store for expense rows.
///
/// Insertion assigns the id; retrieval returns every row in unspecified
/// order. No update or delete operation exists.
pub struct ExpenseStore {
    conn: DbConn,
}

impl ExpenseStore {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    /// Append one row. The store assigns a fresh id.
    pub fn insert(&self, title: &str, amount: f64) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO expenses (title, amount) VALUES (?1, ?2)",
            (title, amount),
        )?;
        Ok(())
    }

    /// Every stored row, in unspecified order. An empty store yields an
    /// empty Vec.
    pub fn fetch_all(&self) -> Result<Vec<Expense>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT id, title, amount FROM expenses")?;

        let rows = stmt.query_map([], |row| {
            Ok(Expense {
                id: row.get(0)?,
                title: row.get(1)?,
                amount: row.get(2)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
