//! Domain errors raised by the task model and the command parser.
//!
//! Every variant is recoverable: the command loop reports it as a single
//! message and keeps reading input. I/O and configuration failures are not
//! modelled here; they travel as `anyhow::Error`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Deadline date not in `D/M/YYYY HHMM` form, or an empty event time.
    #[error("Invalid date format '{input}', expected D/M/YYYY HHMM")]
    InvalidFormat { input: String },

    /// Index outside the list at the time of the call. `number` is 1-based.
    #[error("Task number {number} is out of range (list has {len} task(s))")]
    OutOfBound { number: usize, len: usize },

    #[error("Command '{command}' requires {argument}")]
    MissingArgument { command: String, argument: String },

    #[error("'{input}' is not a task number")]
    InvalidIndex { input: String },

    #[error("Task has no follow-up available until it is done")]
    AfterTaskUnavailable,

    #[error("Cannot read task record on line {line}: {reason}")]
    CorruptRecord { line: usize, reason: String },
}

impl TaskError {
    pub(crate) fn missing(command: &str, argument: &str) -> Self {
        TaskError::MissingArgument {
            command: command.to_string(),
            argument: argument.to_string(),
        }
    }
}
