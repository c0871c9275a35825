//! SQLite storage bootstrap and table creation entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections for Staffbook core.
//! - Create the single `employees` table on demand.
//!
//! # Invariants
//! - Table creation is idempotent; an existing table is reported, not replaced.
//! - Column names used by queries live in `repo`, never in caller input.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory};
pub use schema::{create_employee_table, employee_table_exists, TableStatus};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Connection bootstrap options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DbOptions {
    /// Create the `employees` table while opening when it is missing.
    pub auto_create_table: bool,
}

impl Default for DbOptions {
    fn default() -> Self {
        Self {
            auto_create_table: true,
        }
    }
}
