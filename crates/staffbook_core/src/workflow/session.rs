//! Main menu loop.
//!
//! # Responsibility
//! - Redisplay the seven-entry menu after every completed action.
//! - Report store failures and keep the session alive.
//!
//! # Invariants
//! - Invalid selections never run an action.
//! - Only console failures (or exit) end the loop.

use super::console::{Console, ConsoleError, ConsoleResult};
use super::engine::{RecordWorkflow, WorkflowError, WorkflowResult};
use super::prompt::CHOICE_PROMPT;
use crate::normalize::parse_choice;
use crate::repo::employee_repo::EmployeeRepository;
use log::{error, info};

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    CreateTable,
    AddEmployee,
    ViewAll,
    Search,
    Update,
    Delete,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 7] = [
        MenuAction::CreateTable,
        MenuAction::AddEmployee,
        MenuAction::ViewAll,
        MenuAction::Search,
        MenuAction::Update,
        MenuAction::Delete,
        MenuAction::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::CreateTable => "Create employee table",
            Self::AddEmployee => "Add employee",
            Self::ViewAll => "View all employees",
            Self::Search => "Search employee(s)",
            Self::Update => "Update employee(s)",
            Self::Delete => "Delete employee(s)",
            Self::Exit => "Exit",
        }
    }

    fn event_name(self) -> &'static str {
        match self {
            Self::CreateTable => "create_table",
            Self::AddEmployee => "add_employee",
            Self::ViewAll => "view_all",
            Self::Search => "search",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Exit => "exit",
        }
    }

    /// Parses a raw menu answer (1-7).
    pub fn from_input(raw: &str) -> Option<Self> {
        let choice = parse_choice(raw, Self::ALL.len() as u32).ok()?;
        Some(Self::ALL[(choice - 1) as usize])
    }
}

/// Behavior switches for [`run_session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Wait for Enter before redisplaying the menu.
    pub pause_after_action: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            pause_after_action: true,
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Operator chose "Exit".
    Exited,
    /// Input stream ended.
    InputClosed,
}

/// Runs the main menu until exit or end of input.
///
/// # Errors
/// - Returns `ConsoleError::Io` when the console cannot be read or written.
pub fn run_session<R, C>(
    workflow: &mut RecordWorkflow<R, C>,
    options: SessionOptions,
) -> ConsoleResult<SessionOutcome>
where
    R: EmployeeRepository,
    C: Console,
{
    info!("event=session_start module=workflow status=ok");
    let outcome = match session_loop(workflow, options) {
        Err(ConsoleError::InputClosed) => Ok(SessionOutcome::InputClosed),
        other => other,
    };
    match &outcome {
        Ok(ended) => info!("event=session_end module=workflow status=ok outcome={ended:?}"),
        Err(err) => error!("event=session_end module=workflow status=error error={err}"),
    }
    outcome
}

fn session_loop<R, C>(
    workflow: &mut RecordWorkflow<R, C>,
    options: SessionOptions,
) -> ConsoleResult<SessionOutcome>
where
    R: EmployeeRepository,
    C: Console,
{
    loop {
        write_menu(workflow.console_mut())?;
        let answer = workflow.console_mut().prompt(CHOICE_PROMPT)?;

        match MenuAction::from_input(&answer) {
            Some(MenuAction::Exit) => return Ok(SessionOutcome::Exited),
            Some(action) => match run_action(workflow, action) {
                Ok(()) => info!(
                    "event=session_action module=workflow status=ok action={}",
                    action.event_name()
                ),
                Err(WorkflowError::Repo(err)) => {
                    error!(
                        "event=session_action module=workflow status=error action={} error={}",
                        action.event_name(),
                        err
                    );
                    workflow.console_mut().write_line(&format!("Error: {err}"))?;
                }
                Err(WorkflowError::Console(err)) => return Err(err),
            },
            None => workflow.console_mut().write_line("Invalid choice")?,
        }

        if options.pause_after_action {
            workflow
                .console_mut()
                .prompt("Press the enter key to go back to the main menu.")?;
        }
    }
}

fn run_action<R, C>(workflow: &mut RecordWorkflow<R, C>, action: MenuAction) -> WorkflowResult<()>
where
    R: EmployeeRepository,
    C: Console,
{
    match action {
        MenuAction::CreateTable => workflow.create_table().map(drop),
        MenuAction::AddEmployee => workflow.add_employee().map(drop),
        MenuAction::ViewAll => workflow.view_all().map(drop),
        MenuAction::Search => workflow.search().map(drop),
        MenuAction::Update => workflow.update().map(drop),
        MenuAction::Delete => workflow.delete().map(drop),
        MenuAction::Exit => Ok(()),
    }
}

fn write_menu<C: Console + ?Sized>(console: &mut C) -> ConsoleResult<()> {
    console.write_line("")?;
    console.write_line(
        "The following menu options can be used to access and edit the employee database:",
    )?;
    for (index, action) in MenuAction::ALL.iter().enumerate() {
        console.write_line(&format!(" {}. {}", index + 1, action.label()))?;
    }
    console.write_line("")
}
