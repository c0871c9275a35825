//! Record workflow engine.
//!
//! # Responsibility
//! - Run the operator-facing flows (create table, add, view all, search,
//!   update, delete) by composing field selection, criterion normalization
//!   and repository calls.
//! - Gate every mutation of existing rows behind a confirmation prompt.
//!
//! # Invariants
//! - Zero matches short-circuits update/delete without further prompts.
//! - A cancelled confirmation leaves the store untouched.
//! - Repository failures abort the running flow and are returned unchanged.

use super::console::{Console, ConsoleError};
use super::prompt::{
    confirm, read_criterion, read_menu_choice, read_update_value, select_search_field,
    select_update_field, Confirmation,
};
use super::render::{delete_summary, search_summary, update_summary, write_employees};
use crate::db::TableStatus;
use crate::model::employee::{EmployeeId, NewEmployee};
use crate::repo::employee_repo::{EmployeeRepository, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Failure that ends the running flow.
#[derive(Debug)]
pub enum WorkflowError {
    Repo(RepoError),
    Console(ConsoleError),
}

impl Display for WorkflowError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Console(err) => write!(f, "{err}"),
        }
    }
}

impl Error for WorkflowError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Console(err) => Some(err),
        }
    }
}

impl From<RepoError> for WorkflowError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<ConsoleError> for WorkflowError {
    fn from(value: ConsoleError) -> Self {
        Self::Console(value)
    }
}

/// Result of the update flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    NoMatches,
    Cancelled,
    Updated(usize),
}

/// Result of the delete flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Exited,
    NoMatches,
    Cancelled,
    DeletedAll(usize),
    DeletedSelected(usize),
}

const DELETE_MENU_OPTIONS: [&str; 3] = [
    "Delete all employees",
    "Delete selected employees",
    "Exit delete menu",
];

/// Owns the repository and console for one operator session.
pub struct RecordWorkflow<R, C> {
    repo: R,
    console: C,
}

impl<R: EmployeeRepository, C: Console> RecordWorkflow<R, C> {
    pub fn new(repo: R, console: C) -> Self {
        Self { repo, console }
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn into_parts(self) -> (R, C) {
        (self.repo, self.console)
    }

    /// Creates the record table, warning when it already exists.
    pub fn create_table(&mut self) -> WorkflowResult<TableStatus> {
        let status = self.repo.create_table()?;
        let message = match status {
            TableStatus::Created => "Table successfully created",
            TableStatus::AlreadyExists => "Warning: Table already created",
        };
        self.console.write_line(message)?;
        Ok(status)
    }

    /// Prompts for a new record and inserts it.
    ///
    /// Only the salary is re-prompted; text answers are accepted as typed and
    /// normalized on the way in.
    pub fn add_employee(&mut self) -> WorkflowResult<EmployeeId> {
        let title = self.console.prompt("Employee title: ")?;
        let forename = self.console.prompt("Employee forename: ")?;
        let surname = self.console.prompt("Employee surname: ")?;
        let email = self.console.prompt("Employee email: ")?;
        let mut salary = self.console.prompt("Employee salary: ")?;

        let employee = loop {
            match NewEmployee::from_input(&title, &forename, &surname, &email, &salary) {
                Ok(employee) => break employee,
                Err(_) => {
                    salary = self
                        .console
                        .prompt("Invalid entry. Please enter a number value: ")?;
                }
            }
        };
        let id = self.repo.insert(&employee)?;
        self.console.write_line("Employee added.")?;
        Ok(id)
    }

    /// Prints every stored record; returns how many were shown.
    pub fn view_all(&mut self) -> WorkflowResult<usize> {
        let employees = self.repo.list_all()?;
        if employees.is_empty() {
            self.console.write_line("No records in database")?;
        } else {
            write_employees(&mut self.console, &employees)?;
        }
        Ok(employees.len())
    }

    /// Search flow: field, criterion, report and display matches.
    pub fn search(&mut self) -> WorkflowResult<usize> {
        let field = select_search_field(&mut self.console, "Search")?;
        let criterion = read_criterion(&mut self.console, field, "search criterion")?;
        let matches = self.repo.find_by(field, &criterion)?;

        self.console.write_line(&search_summary(matches.len()))?;
        write_employees(&mut self.console, &matches)?;
        Ok(matches.len())
    }

    /// Update flow: locate rows, pick a target field and value, confirm, apply.
    pub fn update(&mut self) -> WorkflowResult<UpdateOutcome> {
        let match_field = select_search_field(&mut self.console, "Select users to update")?;
        let match_value = read_criterion(&mut self.console, match_field, "search criterion")?;
        let matches = self.repo.find_by(match_field, &match_value)?;

        self.console.write_line(&update_summary(matches.len()))?;
        write_employees(&mut self.console, &matches)?;
        if matches.is_empty() {
            return Ok(UpdateOutcome::NoMatches);
        }

        let set_field = select_update_field(&mut self.console, "Select a category to update")?;
        let set_value = read_update_value(&mut self.console, set_field, "update value")?;
        if confirm(&mut self.console)? == Confirmation::Cancel {
            return Ok(UpdateOutcome::Cancelled);
        }

        let updated = self
            .repo
            .update_where(match_field, &match_value, set_field, &set_value)?;
        self.console.write_line("Employee(s) successfully updated.")?;
        Ok(UpdateOutcome::Updated(updated))
    }

    /// Delete flow: delete all, delete selected, or leave.
    pub fn delete(&mut self) -> WorkflowResult<DeleteOutcome> {
        let choice = read_menu_choice(
            &mut self.console,
            "Please choose from the following delete options:",
            &DELETE_MENU_OPTIONS,
        )?;
        match choice {
            1 => self.delete_all(),
            2 => self.delete_selected(),
            _ => Ok(DeleteOutcome::Exited),
        }
    }

    fn delete_all(&mut self) -> WorkflowResult<DeleteOutcome> {
        if confirm(&mut self.console)? == Confirmation::Cancel {
            return Ok(DeleteOutcome::Cancelled);
        }

        let removed = self.repo.delete_all()?;
        self.console
            .write_line(&format!("All {removed} records have been deleted."))?;
        self.console.write_line("No data remains.")?;
        Ok(DeleteOutcome::DeletedAll(removed))
    }

    fn delete_selected(&mut self) -> WorkflowResult<DeleteOutcome> {
        let field = select_search_field(&mut self.console, "Delete")?;
        let criterion = read_criterion(&mut self.console, field, "delete criterion")?;
        let matches = self.repo.find_by(field, &criterion)?;
        if matches.is_empty() {
            self.console.write_line("No matching employee.")?;
            return Ok(DeleteOutcome::NoMatches);
        }

        if confirm(&mut self.console)? == Confirmation::Cancel {
            return Ok(DeleteOutcome::Cancelled);
        }

        self.console.write_line(&delete_summary(matches.len()))?;
        write_employees(&mut self.console, &matches)?;
        let removed = self.repo.delete_where(field, &criterion)?;
        self.console.write_line("Employee(s) successfully deleted")?;
        Ok(DeleteOutcome::DeletedSelected(removed))
    }
}
