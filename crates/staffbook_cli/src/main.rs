//! Staffbook console entry point.
//!
//! # Responsibility
//! - Resolve configuration, start logging and open the store once.
//! - Run the interactive menu and close the store before exiting.

mod config;

use clap::Parser;
use config::{AppConfig, CliArgs};
use log::{error, info};
use staffbook_core::{
    init_logging, open_db, run_session, IoConsole, RecordWorkflow, SqliteEmployeeRepository,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(err) => {
            eprintln!("staffbook: cannot determine working directory: {err}");
            return ExitCode::FAILURE;
        }
    };
    let config = match AppConfig::resolve(args, &cwd) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("staffbook: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        eprintln!("staffbook: {err}");
        return ExitCode::FAILURE;
    }

    run(&config)
}

fn run(config: &AppConfig) -> ExitCode {
    let conn = match open_db(&config.db_path, &config.db_options) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!(
                "staffbook: cannot open database `{}`: {err}",
                config.db_path.display()
            );
            return ExitCode::FAILURE;
        }
    };

    let repo = SqliteEmployeeRepository::new(&conn);
    let mut workflow = RecordWorkflow::new(repo, IoConsole::stdio());
    let outcome = run_session(&mut workflow, config.session_options);
    drop(workflow);

    if let Err((_, err)) = conn.close() {
        error!("event=db_close module=cli status=error error={err}");
        eprintln!("staffbook: failed to close database: {err}");
        return ExitCode::FAILURE;
    }

    match outcome {
        Ok(ended) => {
            info!("event=app_exit module=cli status=ok outcome={ended:?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("staffbook: {err}");
            ExitCode::FAILURE
        }
    }
}
