//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the record-access contract used by the workflow engine.
//! - Isolate SQLite query details from workflow orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `NewEmployee::validate()` before persistence.
//! - Column names come from the closed field enumerations only; values are
//!   always bound as parameters.

pub mod employee_repo;
