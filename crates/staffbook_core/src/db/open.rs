//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Configure connection settings required by core behavior.
//! - Optionally create the employee table before returning the connection.

use super::schema::create_employee_table;
use super::{DbOptions, DbResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens a SQLite database file and bootstraps it with `options`.
///
/// # Side effects
/// - Creates the file when missing.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>, options: &DbOptions) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=file");

    let conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    finish_open(&conn, options, "file", started_at)?;
    Ok(conn)
}

/// Opens an in-memory SQLite database and bootstraps it with `options`.
pub fn open_db_in_memory(options: &DbOptions) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=memory");

    let conn = match Connection::open_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=memory duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    finish_open(&conn, options, "memory", started_at)?;
    Ok(conn)
}

fn finish_open(
    conn: &Connection,
    options: &DbOptions,
    mode: &str,
    started_at: Instant,
) -> DbResult<()> {
    match bootstrap_connection(conn, options) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode={} auto_create_table={} duration_ms={}",
                mode,
                options.auto_create_table,
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={} duration_ms={} error_code=db_bootstrap_failed error={}",
                mode,
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &Connection, options: &DbOptions) -> DbResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    if options.auto_create_table {
        create_employee_table(conn)?;
    }
    Ok(())
}
