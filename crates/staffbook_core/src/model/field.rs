//! Field registry: numbered choices for operator field selection.
//!
//! # Responsibility
//! - Map numeric menu choices to canonical fields per selection context.
//! - Keep the "id is never an update target" rule in the type system.
//!
//! # Invariants
//! - Search contexts offer 6 choices (1-6) including `id`.
//! - Update-target contexts offer 5 choices (1-5) excluding `id`.

use crate::normalize::{parse_choice, SelectionError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One of the six attributes of an employee record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Id,
    Title,
    Forename,
    Surname,
    Email,
    Salary,
}

impl Field {
    /// All fields in menu order.
    pub const ALL: [Field; 6] = [
        Field::Id,
        Field::Title,
        Field::Forename,
        Field::Surname,
        Field::Email,
        Field::Salary,
    ];

    /// Canonical lowercase field name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Forename => "forename",
            Self::Surname => "surname",
            Self::Email => "email",
            Self::Salary => "salary",
        }
    }

    /// Operator-facing menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Title => "Title",
            Self::Forename => "Forename",
            Self::Surname => "Surname",
            Self::Email => "Email",
            Self::Salary => "Salary",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A field that may be overwritten by the update flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdatableField {
    Title,
    Forename,
    Surname,
    Email,
    Salary,
}

impl UpdatableField {
    /// All updatable fields in menu order.
    pub const ALL: [UpdatableField; 5] = [
        UpdatableField::Title,
        UpdatableField::Forename,
        UpdatableField::Surname,
        UpdatableField::Email,
        UpdatableField::Salary,
    ];

    pub fn field(self) -> Field {
        match self {
            Self::Title => Field::Title,
            Self::Forename => Field::Forename,
            Self::Surname => Field::Surname,
            Self::Email => Field::Email,
            Self::Salary => Field::Salary,
        }
    }
}

impl From<UpdatableField> for Field {
    fn from(value: UpdatableField) -> Self {
        value.field()
    }
}

impl Display for UpdatableField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field().name())
    }
}

/// Which list of fields a selection prompt offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldContext {
    /// Search, update-match and delete-by selections.
    Search,
    /// Target of an update; `id` is excluded.
    UpdateTarget,
}

const UPDATE_TARGET_FIELDS: [Field; 5] = [
    Field::Title,
    Field::Forename,
    Field::Surname,
    Field::Email,
    Field::Salary,
];

impl FieldContext {
    /// Fields offered in this context, in menu order (choice `n` is index `n - 1`).
    pub fn choices(self) -> &'static [Field] {
        match self {
            Self::Search => &Field::ALL,
            Self::UpdateTarget => &UPDATE_TARGET_FIELDS,
        }
    }

    /// Highest valid numeric choice.
    pub fn max_choice(self) -> u32 {
        self.choices().len() as u32
    }

    /// Renders the numbered choice list shown before a selection prompt.
    pub fn menu_lines(self) -> Vec<String> {
        self.choices()
            .iter()
            .enumerate()
            .map(|(index, field)| format!("{}. {}", index + 1, field.label()))
            .collect()
    }
}

/// Resolves a raw search-context choice (1-6) to a field.
pub fn resolve_search_choice(raw: &str) -> Result<Field, SelectionError> {
    let choice = parse_choice(raw, FieldContext::Search.max_choice())?;
    Ok(Field::ALL[(choice - 1) as usize])
}

/// Resolves a raw update-target choice (1-5) to an updatable field.
pub fn resolve_update_choice(raw: &str) -> Result<UpdatableField, SelectionError> {
    let choice = parse_choice(raw, FieldContext::UpdateTarget.max_choice())?;
    Ok(UpdatableField::ALL[(choice - 1) as usize])
}
