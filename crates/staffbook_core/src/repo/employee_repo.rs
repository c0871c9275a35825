//! Employee repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide find/insert/update/delete over the single `employees` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `NewEmployee::validate()` before SQL mutations.
//! - Read paths reject rows that cannot be decoded instead of masking them.
//! - Results are ordered by `id` ascending.

use crate::db::{create_employee_table, DbError, TableStatus};
use crate::model::employee::{
    validate_field_value, Employee, EmployeeId, EmployeeValidationError, NewEmployee,
};
use crate::model::field::{Field, UpdatableField};
use crate::normalize::Criterion;
use log::{error, info};
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    id,
    title,
    forename,
    surname,
    email,
    salary
FROM employees";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for employee persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(EmployeeValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted employee data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<EmployeeValidationError> for RepoError {
    fn from(value: EmployeeValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Record-access contract for the employee table.
pub trait EmployeeRepository {
    /// Creates the backing table; an existing table is reported, not an error.
    fn create_table(&self) -> RepoResult<TableStatus>;
    fn find_by(&self, field: Field, value: &Criterion) -> RepoResult<Vec<Employee>>;
    fn list_all(&self) -> RepoResult<Vec<Employee>>;
    fn count(&self) -> RepoResult<u64>;
    /// Inserts a draft and returns the store-assigned id.
    fn insert(&self, employee: &NewEmployee) -> RepoResult<EmployeeId>;
    /// Overwrites `set_field` on every row matching `match_field = match_value`.
    fn update_where(
        &self,
        match_field: Field,
        match_value: &Criterion,
        set_field: UpdatableField,
        set_value: &str,
    ) -> RepoResult<usize>;
    fn delete_where(&self, field: Field, value: &Criterion) -> RepoResult<usize>;
    fn delete_all(&self) -> RepoResult<usize>;
}

/// SQLite-backed employee repository.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query_employees(&self, sql: &str, value: Option<&Criterion>) -> RepoResult<Vec<Employee>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = match value {
            Some(value) => stmt.query([value])?,
            None => stmt.query([])?,
        };

        let mut employees = Vec::new();
        while let Some(row) = rows.next()? {
            employees.push(parse_employee_row(row)?);
        }
        Ok(employees)
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn create_table(&self) -> RepoResult<TableStatus> {
        Ok(create_employee_table(self.conn)?)
    }

    fn find_by(&self, field: Field, value: &Criterion) -> RepoResult<Vec<Employee>> {
        let started_at = Instant::now();
        let sql = format!(
            "{EMPLOYEE_SELECT_SQL} WHERE {} = ?1 ORDER BY id ASC;",
            field_column(field)
        );
        let result = self.query_employees(&sql, Some(value));
        log_outcome("employee_find", field, &result, started_at, Vec::len);
        result
    }

    fn list_all(&self) -> RepoResult<Vec<Employee>> {
        self.query_employees(&format!("{EMPLOYEE_SELECT_SQL} ORDER BY id ASC;"), None)
    }

    fn count(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM employees;", [], |row| row.get(0))?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative row count `{count}`")))
    }

    fn insert(&self, employee: &NewEmployee) -> RepoResult<EmployeeId> {
        employee.validate()?;

        self.conn.execute(
            "INSERT INTO employees (
                title,
                forename,
                surname,
                email,
                salary
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                employee.title.as_str(),
                employee.forename.as_str(),
                employee.surname.as_str(),
                employee.email.as_str(),
                employee.salary.as_str(),
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        info!("event=employee_insert module=repo status=ok id={id}");
        Ok(id)
    }

    fn update_where(
        &self,
        match_field: Field,
        match_value: &Criterion,
        set_field: UpdatableField,
        set_value: &str,
    ) -> RepoResult<usize> {
        validate_field_value(set_field.field(), set_value)?;

        let started_at = Instant::now();
        let sql = format!(
            "UPDATE employees SET {} = ?1 WHERE {} = ?2;",
            field_column(set_field.field()),
            field_column(match_field)
        );
        let result = self
            .conn
            .execute(&sql, params![set_value, match_value])
            .map_err(RepoError::from);
        log_outcome("employee_update", match_field, &result, started_at, |n| *n);
        result
    }

    fn delete_where(&self, field: Field, value: &Criterion) -> RepoResult<usize> {
        let started_at = Instant::now();
        let sql = format!("DELETE FROM employees WHERE {} = ?1;", field_column(field));
        let result = self.conn.execute(&sql, [value]).map_err(RepoError::from);
        log_outcome("employee_delete", field, &result, started_at, |n| *n);
        result
    }

    fn delete_all(&self) -> RepoResult<usize> {
        let removed = self.conn.execute("DELETE FROM employees;", [])?;
        info!("event=employee_delete_all module=repo status=ok affected={removed}");
        Ok(removed)
    }
}

/// Static column lookup; the only source of column names in query text.
fn field_column(field: Field) -> &'static str {
    match field {
        Field::Id => "id",
        Field::Title => "title",
        Field::Forename => "forename",
        Field::Surname => "surname",
        Field::Email => "email",
        Field::Salary => "salary",
    }
}

fn log_outcome<T>(
    event: &str,
    field: Field,
    result: &RepoResult<T>,
    started_at: Instant,
    affected: impl Fn(&T) -> usize,
) {
    match result {
        Ok(value) => info!(
            "event={event} module=repo status=ok field={field} affected={} duration_ms={}",
            affected(value),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event={event} module=repo status=error field={field} duration_ms={} error={err}",
            started_at.elapsed().as_millis()
        ),
    }
}

fn parse_employee_row(row: &Row<'_>) -> RepoResult<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        title: row.get("title")?,
        forename: row.get("forename")?,
        surname: row.get("surname")?,
        email: row.get("email")?,
        salary: parse_salary(row.get_ref("salary")?)?,
    })
}

// Stores created with a REAL salary column hand back numbers, not text.
fn parse_salary(value: ValueRef<'_>) -> RepoResult<String> {
    match value {
        ValueRef::Text(bytes) => String::from_utf8(bytes.to_vec()).map_err(|_| {
            RepoError::InvalidData("non UTF-8 text in employees.salary".to_string())
        }),
        ValueRef::Real(amount) => Ok(format!("{amount:.2}")),
        ValueRef::Integer(amount) => Ok(format!("{amount}.00")),
        ValueRef::Null | ValueRef::Blob(_) => Err(RepoError::InvalidData(
            "employees.salary must be text or a number".to_string(),
        )),
    }
}
