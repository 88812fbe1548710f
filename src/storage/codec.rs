//! One-line-per-task text format.
//!
//! ```text
//! T | 0 | read book
//! D | 1 | return book | 02 Dec 2019 18:00
//! E | 0 | project meeting | 06 Aug 2019 14:00 | #work #weekly | >0 write minutes
//! ```
//!
//! Fields are separated by `" | "`: kind symbol, done flag, description and,
//! for deadlines and events, the schedule display text. Two optional fields
//! may follow: the tags (each prefixed with `#`) and the follow-up task
//! (`>` + done flag + space + description). Lines without tags or a follow-up
//! look exactly like the plain three- or four-field form.
//!
//! Free text (descriptions and schedules) escapes `|` as `\|` and `\` as
//! `\\`, so a stored field never contains the separator. A backslash in
//! front of any other character is read literally.

use crate::libs::error::TaskError;
use crate::libs::task::{AfterTask, Kind, Task};

pub const FIELD_SEPARATOR: &str = " | ";
const TAG_MARKER: char = '#';
const AFTER_TASK_MARKER: char = '>';
const ESCAPE: char = '\\';

pub fn encode(task: &Task) -> String {
    let mut fields = vec![
        task.symbol().to_string(),
        encode_flag(task.is_done()).to_string(),
        escape(task.description()),
    ];
    if let Some(schedule) = task.schedule() {
        fields.push(escape(schedule));
    }
    if task.has_tags() {
        let tags: Vec<String> = task.tags().iter().map(|tag| format!("{}{}", TAG_MARKER, tag)).collect();
        fields.push(tags.join(" "));
    }
    if let Some(after_task) = task.pending_after_task() {
        fields.push(format!("{}{} {}", AFTER_TASK_MARKER, encode_flag(after_task.is_done()), escape(after_task.description())));
    }
    fields.join(FIELD_SEPARATOR)
}

/// Decodes one stored line. `line` is 1-based and only used in errors.
pub fn decode(text: &str, line: usize) -> Result<Task, TaskError> {
    let corrupt = |reason: &str| TaskError::CorruptRecord {
        line,
        reason: reason.to_string(),
    };

    let fields: Vec<&str> = text.split(FIELD_SEPARATOR).collect();
    if fields.len() < 3 {
        return Err(corrupt("expected at least 3 fields"));
    }

    let is_done = decode_flag(fields[1]).ok_or_else(|| corrupt("done flag must be 0 or 1"))?;
    let description = unescape(fields[2]);
    if description.trim().is_empty() {
        return Err(corrupt("empty description"));
    }

    let mut rest = fields[3..].iter();
    let mut schedule = || rest.next().map(|s| unescape(s)).ok_or_else(|| corrupt("missing schedule"));
    let kind = match fields[0] {
        "T" => Kind::Plain,
        "D" => Kind::Deadline { by: schedule()? },
        "E" => Kind::Event { at: schedule()? },
        _ => return Err(corrupt("unknown task symbol")),
    };

    let mut tags = Vec::new();
    let mut after_task = None;
    for field in rest {
        if field.starts_with(TAG_MARKER) {
            for token in field.split_whitespace() {
                let tag = token.strip_prefix(TAG_MARKER).ok_or_else(|| corrupt("tag without '#'"))?;
                tags.push(tag.to_string());
            }
        } else if let Some(encoded) = field.strip_prefix(AFTER_TASK_MARKER) {
            after_task = Some(decode_after_task(encoded).ok_or_else(|| corrupt("malformed follow-up"))?);
        } else {
            return Err(corrupt("unexpected trailing field"));
        }
    }

    Ok(Task::restore(description, kind, is_done, tags, after_task))
}

fn decode_after_task(encoded: &str) -> Option<AfterTask> {
    let (flag, description) = encoded.split_once(' ')?;
    let is_done = decode_flag(flag)?;
    if description.trim().is_empty() {
        return None;
    }
    Some(AfterTask::restore(unescape(description), is_done))
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c == ESCAPE || c == '|' {
            escaped.push(ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

fn unescape(field: &str) -> String {
    let mut text = String::with_capacity(field.len());
    let mut chars = field.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ESCAPE {
            if let Some(&next) = chars.peek() {
                if next == ESCAPE || next == '|' {
                    text.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        text.push(c);
    }
    text
}

fn encode_flag(flag: bool) -> char {
    if flag {
        '1'
    } else {
        '0'
    }
}

fn decode_flag(field: &str) -> Option<bool> {
    match field {
        "0" => Some(false),
        "1" => Some(true),
        _ => None,
    }
}
