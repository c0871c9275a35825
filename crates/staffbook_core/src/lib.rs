//! Core domain logic for Staffbook.
//! This crate is the single source of truth for employee record invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod repo;
pub mod workflow;

pub use db::{open_db, open_db_in_memory, DbError, DbOptions, TableStatus};
pub use logging::{default_log_level, init_logging, logging_status, normalize_level};
pub use model::employee::{Employee, EmployeeId, EmployeeValidationError, NewEmployee};
pub use model::field::{Field, FieldContext, UpdatableField};
pub use normalize::{Criterion, CriterionError, SelectionError};
pub use repo::employee_repo::{
    EmployeeRepository, RepoError, RepoResult, SqliteEmployeeRepository,
};
pub use workflow::{
    run_session, Console, ConsoleError, DeleteOutcome, IoConsole, RecordWorkflow,
    SessionOptions, SessionOutcome, UpdateOutcome, WorkflowError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
