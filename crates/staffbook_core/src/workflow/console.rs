//! Line-oriented console abstraction.
//!
//! # Responsibility
//! - Decouple workflow prompts from process stdin/stdout.
//! - Report end of input as a typed error instead of an empty answer.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{BufRead, Stdout, StdinLock, Write};

pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[derive(Debug)]
pub enum ConsoleError {
    Io(std::io::Error),
    /// Input stream reached end of file while an answer was expected.
    InputClosed,
}

impl Display for ConsoleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "console I/O failed: {err}"),
            Self::InputClosed => write!(f, "console input closed"),
        }
    }
}

impl Error for ConsoleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InputClosed => None,
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Synchronous operator console.
pub trait Console {
    /// Writes one line of feedback.
    fn write_line(&mut self, line: &str) -> ConsoleResult<()>;

    /// Shows `prompt` without a trailing newline and reads one answer line.
    ///
    /// The returned text has its line terminator removed. Bytes that are not
    /// valid UTF-8 are replaced rather than reported as an error.
    fn prompt(&mut self, prompt: &str) -> ConsoleResult<String>;
}

/// [`Console`] over any buffered reader and writer.
pub struct IoConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> IoConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl IoConsole<StdinLock<'static>, Stdout> {
    /// Console bound to the process standard streams.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    fn write_line(&mut self, line: &str) -> ConsoleResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> ConsoleResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        // Undecodable bytes become U+FFFD and flow into the caller's validator.
        let answer = String::from_utf8_lossy(&raw);
        Ok(answer.trim_end_matches(['\n', '\r']).to_string())
    }
}
