//! Input normalization for operator-supplied values.
//!
//! # Responsibility
//! - Turn raw console text into typed, canonical values per field.
//! - Parse numbered menu choices.
//!
//! # Invariants
//! - Text normalization (trim + lowercase) is idempotent.
//! - Salary normalization always yields `-?\d+\.\d{2}` and is idempotent.
//! - Insert-time and criterion-time salary share one formatter, so stored and
//!   queried strings compare equal.

use crate::model::employee::EmployeeId;
use crate::model::field::{Field, UpdatableField};
use rusqlite::types::{ToSql, ToSqlOutput};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Normalized match or update value for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    Id(EmployeeId),
    Text(String),
}

impl Display for Criterion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl ToSql for Criterion {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Self::Id(id) => id.to_sql(),
            Self::Text(text) => text.to_sql(),
        }
    }
}

/// Raw input that cannot be converted for the requested field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriterionError {
    InvalidId(String),
    InvalidSalary(String),
}

impl Display for CriterionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId(raw) => write!(f, "`{raw}` is not a whole number"),
            Self::InvalidSalary(raw) => write!(f, "`{raw}` is not a number"),
        }
    }
}

impl Error for CriterionError {}

/// Raw menu input that is not a valid numbered choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    NotANumber(String),
    OutOfRange { choice: i64, max: u32 },
}

impl Display for SelectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber(raw) => write!(f, "`{raw}` is not a number"),
            Self::OutOfRange { choice, max } => {
                write!(f, "choice {choice} is outside 1-{max}")
            }
        }
    }
}

impl Error for SelectionError {}

/// Lowercases and trims free text. Empty input stays empty.
pub fn normalize_text(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Parses a real number and formats it with exactly two fractional digits.
///
/// Non-finite values (`nan`, `inf`) are rejected.
pub fn normalize_salary(raw: &str) -> Result<String, CriterionError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(format!("{value:.2}")),
        _ => Err(CriterionError::InvalidSalary(trimmed.to_string())),
    }
}

/// Parses a record identifier.
pub fn normalize_id(raw: &str) -> Result<EmployeeId, CriterionError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<EmployeeId>()
        .map_err(|_| CriterionError::InvalidId(trimmed.to_string()))
}

/// Normalizes a match criterion for `field`.
pub fn normalize_criterion(field: Field, raw: &str) -> Result<Criterion, CriterionError> {
    match field {
        Field::Id => normalize_id(raw).map(Criterion::Id),
        Field::Salary => normalize_salary(raw).map(Criterion::Text),
        Field::Title | Field::Forename | Field::Surname | Field::Email => {
            Ok(Criterion::Text(normalize_text(raw)))
        }
    }
}

/// Normalizes a replacement value for an update target.
pub fn normalize_update_value(field: UpdatableField, raw: &str) -> Result<String, CriterionError> {
    match field {
        UpdatableField::Salary => normalize_salary(raw),
        UpdatableField::Title
        | UpdatableField::Forename
        | UpdatableField::Surname
        | UpdatableField::Email => Ok(normalize_text(raw)),
    }
}

/// Parses a numbered menu choice in `1..=max`.
pub fn parse_choice(raw: &str, max: u32) -> Result<u32, SelectionError> {
    let trimmed = raw.trim();
    let choice = trimmed
        .parse::<i64>()
        .map_err(|_| SelectionError::NotANumber(trimmed.to_string()))?;
    if choice < 1 || choice > i64::from(max) {
        return Err(SelectionError::OutOfRange { choice, max });
    }
    Ok(choice as u32)
}
