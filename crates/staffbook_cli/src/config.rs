//! Command-line configuration.
//!
//! # Responsibility
//! - Parse flags and environment overrides into one resolved `AppConfig`.
//! - Validate the log level and make the log directory absolute before
//!   anything is opened.

use clap::Parser;
use staffbook_core::{default_log_level, normalize_level, DbOptions, SessionOptions};
use std::path::{Path, PathBuf};

const DEFAULT_DB_FILE: &str = "Employee.db";
const DEFAULT_LOG_DIR: &str = "logs";

/// Interactive employee record manager backed by a local SQLite file.
#[derive(Parser, Debug)]
#[command(name = "staffbook", version, about = "Interactive employee record manager")]
pub struct CliArgs {
    /// SQLite database file holding the employees table
    #[arg(long = "db", value_name = "PATH", env = "STAFFBOOK_DB", default_value = DEFAULT_DB_FILE)]
    pub db_path: PathBuf,

    /// Log level (trace|debug|info|warn|error); defaults to debug in debug builds, info otherwise
    #[arg(long, value_name = "LEVEL", env = "STAFFBOOK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory for rolling log files; relative paths resolve against the working directory
    #[arg(long, value_name = "DIR", env = "STAFFBOOK_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Do not create the employees table at start-up
    #[arg(long)]
    pub no_auto_create: bool,

    /// Return to the main menu without waiting for Enter
    #[arg(long)]
    pub no_pause: bool,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_level: &'static str,
    pub log_dir: PathBuf,
    pub db_options: DbOptions,
    pub session_options: SessionOptions,
}

impl AppConfig {
    /// Resolves parsed flags against the working directory `cwd`.
    pub fn resolve(args: CliArgs, cwd: &Path) -> Result<Self, String> {
        let log_level = match args.log_level.as_deref() {
            Some(level) => normalize_level(level)?,
            None => default_log_level(),
        };
        let log_dir = args
            .log_dir
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR));

        Ok(Self {
            db_path: args.db_path,
            log_level,
            log_dir: absolutize(cwd, log_dir),
            db_options: DbOptions {
                auto_create_table: !args.no_auto_create,
            },
            session_options: SessionOptions {
                pause_after_action: !args.no_pause,
            },
        })
    }
}

fn absolutize(cwd: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
