//! Employee table definition.
//!
//! # Invariants
//! - `salary` is a TEXT column holding two-decimal fixed point strings, so
//!   criteria match stored values by exact string equality.

use super::DbResult;
use log::info;
use rusqlite::Connection;

const EMPLOYEE_TABLE: &str = "employees";

const CREATE_EMPLOYEE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    forename TEXT NOT NULL,
    surname TEXT NOT NULL,
    email TEXT NOT NULL,
    salary TEXT NOT NULL
);";

/// Outcome of [`create_employee_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Created,
    AlreadyExists,
}

/// Returns whether the `employees` table is present.
pub fn employee_table_exists(conn: &Connection) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [EMPLOYEE_TABLE],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

/// Creates the `employees` table unless it already exists.
pub fn create_employee_table(conn: &Connection) -> DbResult<TableStatus> {
    if employee_table_exists(conn)? {
        info!("event=table_create module=db status=skipped reason=already_exists");
        return Ok(TableStatus::AlreadyExists);
    }

    conn.execute_batch(CREATE_EMPLOYEE_TABLE_SQL)?;
    info!("event=table_create module=db status=ok");
    Ok(TableStatus::Created)
}
