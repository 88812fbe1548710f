//! Display implementation for duke application messages.
//!
//! All user-facing text is defined here, in one place, so the command loop
//! and the CLI only ever deal with structured [`Message`] values.
//!
//! ```rust
//! use duke::libs::messages::Message;
//!
//! assert_eq!(Message::Farewell.to_string(), "Bye. Hope to see you again soon!");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SESSION MESSAGES ===
            Message::Greeting => "Hello! I'm Duke\nWhat can I do for you?".to_string(),
            Message::Farewell => "Bye. Hope to see you again soon!".to_string(),
            Message::UnknownCommand(command) => format!("OOPS!!! I'm sorry, but I don't know what '{}' means :-(", command),
            Message::EmptyDescription(detail) => format!("OOPS!!! The description cannot be empty. {}", detail),
            Message::TasksLoaded(count) => format!("Loaded {} task(s) from storage", count),

            // === TASK MESSAGES ===
            Message::TaskAdded { task, total } => format!("Got it. I've added this task:\n  {}\nNow you have {} task(s) in the list.", task, total),
            Message::TaskMarkedDone(task) => format!("Nice! I've marked this task as done:\n  {}", task),
            Message::TaskMarkedUndone(task) => format!("OK, I've marked this task as not done yet:\n  {}", task),
            Message::TaskDeleted { task, total } => format!("Noted. I've removed this task:\n  {}\nNow you have {} task(s) in the list.", task, total),
            Message::TaskTagged(task) => format!("Tags updated:\n  {}", task),
            Message::TaskUntagged(task) => format!("Tags cleared:\n  {}", task),
            Message::AfterTaskAttached(after) => format!("Follow-up attached, available once the task is done:\n  {}", after),
            Message::AfterTaskUnlocked(after) => format!("Follow-up now available:\n  {}", after),
            Message::AfterTaskDone(after) => format!("Nice! I've marked this follow-up as done:\n  {}", after),
            Message::AfterTaskUndone(after) => format!("OK, I've marked this follow-up as not done yet:\n  {}", after),
            Message::TasksHeader => "Here are the tasks in your list:".to_string(),
            Message::TasksFoundHeader(needle) => format!("Here are the matching tasks for '{}':", needle),
            Message::TasksTaggedHeader(tag) => format!("Here are the tasks tagged #{}:", tag),
            Message::NoTasks => "Your list is empty.".to_string(),
            Message::NoTasksFound(needle) => format!("No tasks match '{}'.", needle),

            // === ERROR MESSAGES ===
            Message::InvalidSchedule(detail) => format!("OOPS!!! {}", detail),
            Message::IndexOutOfBound(detail) => format!("OOPS!!! {}", detail),
            Message::InvalidTaskNumber(detail) => format!("OOPS!!! {}", detail),
            Message::AfterTaskUnavailable => "OOPS!!! That task has no follow-up available yet. Finish the task first.".to_string(),
            Message::CorruptTaskFile(detail) => format!("Task file is damaged: {}", detail),
            Message::TaskFileWriteFailed(error) => format!("Failed to save tasks: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleStorage => "Storage settings".to_string(),
            Message::PromptSelectModules => "Select nodes to configure".to_string(),
            Message::PromptTaskFileName => "Enter task file name".to_string(),
        };

        write!(f, "{}", text)
    }
}
