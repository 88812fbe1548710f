pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

use super::error::TaskError;

impl From<&TaskError> for Message {
    fn from(error: &TaskError) -> Self {
        match error {
            TaskError::InvalidFormat { .. } => Message::InvalidSchedule(error.to_string()),
            TaskError::OutOfBound { .. } => Message::IndexOutOfBound(error.to_string()),
            TaskError::MissingArgument { .. } => Message::EmptyDescription(error.to_string()),
            TaskError::InvalidIndex { .. } => Message::InvalidTaskNumber(error.to_string()),
            TaskError::AfterTaskUnavailable => Message::AfterTaskUnavailable,
            TaskError::CorruptRecord { .. } => Message::CorruptTaskFile(error.to_string()),
        }
    }
}
