//! Parsing of one line of user input into an [`Action`].
//!
//! The first word selects the command; everything after the first space is
//! its argument text. Deadlines and events split their argument on the
//! literal ` /by ` and ` /at ` separators.

use crate::libs::error::TaskError;

const DEADLINE_SEPARATOR: &str = " /by ";
const EVENT_SEPARATOR: &str = " /at ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List,
    Todo { description: String },
    Deadline { description: String, by: String },
    Event { description: String, at: String },
    Done { number: usize },
    Undone { number: usize },
    Delete { number: usize },
    Find { needle: String },
    Tag { number: usize, tags: String },
    Untag { number: usize },
    Tagged { tag: String },
    After { number: usize, description: String },
    AfterDone { number: usize },
    AfterUndone { number: usize },
    Bye,
    Empty,
    Unknown { command: String },
}

impl Action {
    pub fn parse(line: &str) -> Result<Action, TaskError> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Ok(Action::Empty);
        }
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        let action = match command {
            "list" => Action::List,
            "bye" => Action::Bye,
            "todo" => Action::Todo {
                description: required(command, rest, "a description")?.to_string(),
            },
            "deadline" => {
                let (description, by) = split_schedule(command, rest, DEADLINE_SEPARATOR)?;
                Action::Deadline { description, by }
            }
            "event" => {
                let (description, at) = split_schedule(command, rest, EVENT_SEPARATOR)?;
                Action::Event { description, at }
            }
            "done" => Action::Done {
                number: task_number(command, rest)?,
            },
            "undone" => Action::Undone {
                number: task_number(command, rest)?,
            },
            "delete" => Action::Delete {
                number: task_number(command, rest)?,
            },
            "find" => {
                required(command, rest, "search text")?;
                Action::Find { needle: rest.to_string() }
            }
            "tag" => {
                let (number, tags) = number_and_text(command, rest, "one or more tags")?;
                Action::Tag { number, tags }
            }
            "untag" => Action::Untag {
                number: task_number(command, rest)?,
            },
            "tagged" => Action::Tagged {
                tag: required(command, rest, "a tag")?.to_string(),
            },
            "after" => {
                let (number, description) = number_and_text(command, rest, "a follow-up description")?;
                Action::After { number, description }
            }
            "afterdone" => Action::AfterDone {
                number: task_number(command, rest)?,
            },
            "afterundone" => Action::AfterUndone {
                number: task_number(command, rest)?,
            },
            _ => Action::Unknown {
                command: command.to_string(),
            },
        };
        Ok(action)
    }
}

fn required<'a>(command: &str, text: &'a str, argument: &str) -> Result<&'a str, TaskError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TaskError::missing(command, argument));
    }
    Ok(text)
}

fn parse_number(raw: &str) -> Result<usize, TaskError> {
    raw.parse().map_err(|_| TaskError::InvalidIndex { input: raw.to_string() })
}

/// First word of `rest` as a task number; anything after it is ignored.
fn task_number(command: &str, rest: &str) -> Result<usize, TaskError> {
    let raw = required(command, rest, "a task number")?;
    parse_number(raw.split_whitespace().next().unwrap_or(raw))
}

fn number_and_text(command: &str, rest: &str, argument: &str) -> Result<(usize, String), TaskError> {
    let rest = required(command, rest, "a task number")?;
    let (raw, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    let number = parse_number(raw)?;
    Ok((number, required(command, text, argument)?.to_string()))
}

fn split_schedule(command: &str, rest: &str, separator: &str) -> Result<(String, String), TaskError> {
    let rest = required(command, rest, "a description")?;
    let (description, schedule) = rest.split_once(separator).ok_or_else(|| TaskError::InvalidFormat { input: rest.to_string() })?;
    Ok((description.to_string(), schedule.to_string()))
}
