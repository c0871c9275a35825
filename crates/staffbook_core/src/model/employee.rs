//! Employee domain model.
//!
//! # Responsibility
//! - Define the stored record and the pre-insert draft.
//! - Validate that drafts are normalized before they reach storage.
//!
//! # Invariants
//! - `id` is assigned by the store; drafts never carry one.
//! - Text fields are lowercase and trimmed.
//! - `salary` is a two-decimal fixed point string.

use crate::model::field::Field;
use crate::normalize::{normalize_salary, normalize_text, CriterionError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned row identifier.
pub type EmployeeId = i64;

/// Persisted employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub title: String,
    pub forename: String,
    pub surname: String,
    pub email: String,
    /// Two-decimal text, e.g. `"1234.50"`.
    pub salary: String,
}

/// Employee record before insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub title: String,
    pub forename: String,
    pub surname: String,
    pub email: String,
    pub salary: String,
}

impl NewEmployee {
    /// Builds a normalized draft from raw operator input.
    ///
    /// # Errors
    /// - Returns `CriterionError::InvalidSalary` when `salary` is not a finite number.
    pub fn from_input(
        title: &str,
        forename: &str,
        surname: &str,
        email: &str,
        salary: &str,
    ) -> Result<Self, CriterionError> {
        Ok(Self {
            title: normalize_text(title),
            forename: normalize_text(forename),
            surname: normalize_text(surname),
            email: normalize_text(email),
            salary: normalize_salary(salary)?,
        })
    }

    /// Checks the normalization invariants required before storage.
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        validate_field_value(Field::Title, &self.title)?;
        validate_field_value(Field::Forename, &self.forename)?;
        validate_field_value(Field::Surname, &self.surname)?;
        validate_field_value(Field::Email, &self.email)?;
        validate_field_value(Field::Salary, &self.salary)
    }

    /// Attaches the store-assigned identifier.
    pub fn with_id(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            title: self.title,
            forename: self.forename,
            surname: self.surname,
            email: self.email,
            salary: self.salary,
        }
    }
}

/// Checks that `value` is already in canonical stored form for `field`.
///
/// `id` values are store-assigned and always rejected here.
pub fn validate_field_value(field: Field, value: &str) -> Result<(), EmployeeValidationError> {
    match field {
        Field::Id => Err(EmployeeValidationError::IdNotWritable),
        Field::Salary => match normalize_salary(value) {
            Ok(canonical) if canonical == value => Ok(()),
            _ => Err(EmployeeValidationError::InvalidSalary(value.to_string())),
        },
        Field::Title | Field::Forename | Field::Surname | Field::Email => {
            if normalize_text(value) == value {
                Ok(())
            } else {
                Err(EmployeeValidationError::UnnormalizedText { field })
            }
        }
    }
}

/// Draft rejected before persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeValidationError {
    /// Text field is not lowercase and trimmed.
    UnnormalizedText { field: Field },
    /// Salary is not a two-decimal fixed point string.
    InvalidSalary(String),
    /// Callers tried to supply an identifier.
    IdNotWritable,
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnnormalizedText { field } => {
                write!(f, "field `{field}` must be lowercase and trimmed")
            }
            Self::InvalidSalary(value) => {
                write!(f, "salary `{value}` is not a two-decimal amount")
            }
            Self::IdNotWritable => write!(f, "employee id is assigned by the store"),
        }
    }
}

impl Error for EmployeeValidationError {}
