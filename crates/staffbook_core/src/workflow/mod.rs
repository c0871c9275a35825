//! Interactive record workflows.
//!
//! # Responsibility
//! - Drive search/update/delete flows from operator answers.
//! - Keep console I/O behind the [`Console`] trait so flows run against
//!   scripted input in tests.

pub mod console;
pub mod engine;
pub mod prompt;
pub mod render;
pub mod session;

pub use console::{Console, ConsoleError, ConsoleResult, IoConsole};
pub use engine::{DeleteOutcome, RecordWorkflow, UpdateOutcome, WorkflowError, WorkflowResult};
pub use prompt::Confirmation;
pub use session::{run_session, MenuAction, SessionOptions, SessionOutcome};
