//! Employee domain model and field registry.
//!
//! # Responsibility
//! - Define the single record shape stored by core.
//! - Enumerate the closed set of fields an operator may select.
//!
//! # Invariants
//! - Every stored record is identified by a store-assigned `EmployeeId`.
//! - Field selection is always one of the enumerated variants, never free text.

pub mod employee;
pub mod field;
