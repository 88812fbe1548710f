use super::error::TaskError;
use super::formatter::format_schedule;
use std::fmt;

/// What sort of task this is, together with the schedule that kind requires.
///
/// Keeping the schedule inside the variant means a to-do can never carry a
/// date and a deadline can never lose its `by`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    Plain,
    Deadline { by: String },
    Event { at: String },
}

impl Kind {
    /// One-character code used in the task file and in listings.
    pub fn symbol(&self) -> char {
        match self {
            Kind::Plain => 'T',
            Kind::Deadline { .. } => 'D',
            Kind::Event { .. } => 'E',
        }
    }

    /// Display text of the schedule, `None` for plain to-dos.
    pub fn schedule(&self) -> Option<&str> {
        match self {
            Kind::Plain => None,
            Kind::Deadline { by } => Some(by),
            Kind::Event { at } => Some(at),
        }
    }

    fn schedule_prefix(&self) -> &'static str {
        match self {
            Kind::Plain => "",
            Kind::Deadline { .. } => "by:",
            Kind::Event { .. } => "at:",
        }
    }
}

/// A single unit of work.
///
/// Description, kind and schedule are fixed at creation. Completion is a
/// functional update: [`Task::mark_done`] returns a new value and leaves the
/// receiver alone, so whoever owns the task decides when to swap it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    kind: Kind,
    is_done: bool,
    tags: Vec<String>,
    after_task: Option<AfterTask>,
}

impl Task {
    pub fn todo(description: &str) -> Result<Self, TaskError> {
        Ok(Self::new(required_description("todo", description)?, Kind::Plain))
    }

    /// Creates a deadline from `D/M/YYYY HHMM` input.
    pub fn deadline(description: &str, by: &str) -> Result<Self, TaskError> {
        let description = required_description("deadline", description)?;
        let by = format_schedule(by)?;
        Ok(Self::new(description, Kind::Deadline { by }))
    }

    /// Creates an event. `at` is free text; input in `D/M/YYYY HHMM` form is
    /// rendered like a deadline, anything else is kept as typed.
    pub fn event(description: &str, at: &str) -> Result<Self, TaskError> {
        let description = required_description("event", description)?;
        let at = at.trim();
        if at.is_empty() {
            return Err(TaskError::InvalidFormat { input: at.to_string() });
        }
        let at = format_schedule(at).unwrap_or_else(|_| at.to_string());
        Ok(Self::new(description, Kind::Event { at }))
    }

    /// Rebuilds a task from persisted fields.
    ///
    /// The schedule inside `kind` is taken as display text and is not
    /// validated again.
    pub fn restore(description: String, kind: Kind, is_done: bool, tags: Vec<String>, after_task: Option<AfterTask>) -> Self {
        Self {
            description,
            kind,
            is_done,
            tags,
            after_task,
        }
    }

    fn new(description: String, kind: Kind) -> Self {
        Self::restore(description, kind, false, Vec::new(), None)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    pub fn symbol(&self) -> char {
        self.kind.symbol()
    }

    pub fn schedule(&self) -> Option<&str> {
        self.kind.schedule()
    }

    pub fn is_done(&self) -> bool {
        self.is_done
    }

    /// `X` when done, a blank otherwise.
    pub fn status_icon(&self) -> char {
        if self.is_done {
            'X'
        } else {
            ' '
        }
    }

    pub fn mark_done(&self) -> Task {
        Task {
            is_done: true,
            ..self.clone()
        }
    }

    pub fn mark_undone(&self) -> Task {
        Task {
            is_done: false,
            ..self.clone()
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Appends every whitespace-separated token of `tags`. Duplicates are kept.
    pub fn add_tags(&mut self, tags: &str) {
        self.tags.extend(tags.split_whitespace().map(str::to_string));
    }

    pub fn clear_tags(&mut self) {
        self.tags.clear();
    }

    /// Attaches a follow-up, replacing any previous one.
    pub fn set_after_task(&mut self, after_task: AfterTask) {
        self.after_task = Some(after_task);
    }

    pub fn has_after_task(&self) -> bool {
        self.after_task.is_some()
    }

    /// The follow-up, but only once this task is done.
    pub fn after_task(&self) -> Option<&AfterTask> {
        if self.is_done {
            self.after_task.as_ref()
        } else {
            None
        }
    }

    /// The follow-up regardless of completion. Used when persisting.
    pub fn pending_after_task(&self) -> Option<&AfterTask> {
        self.after_task.as_ref()
    }

    pub fn mark_after_task_done(&self) -> Result<Task, TaskError> {
        self.with_after_task(AfterTask::mark_done)
    }

    pub fn mark_after_task_undone(&self) -> Result<Task, TaskError> {
        self.with_after_task(AfterTask::mark_undone)
    }

    fn with_after_task(&self, update: impl FnOnce(&AfterTask) -> AfterTask) -> Result<Task, TaskError> {
        let after_task = self.after_task().ok_or(TaskError::AfterTaskUnavailable)?;
        Ok(Task {
            after_task: Some(update(after_task)),
            ..self.clone()
        })
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][{}] {}", self.status_icon(), self.symbol(), self.description)?;
        if let Some(schedule) = self.schedule() {
            write!(f, " ({} {})", self.kind.schedule_prefix(), schedule)?;
        }
        for tag in &self.tags {
            write!(f, " #{} ", tag)?;
        }
        Ok(())
    }
}

/// Follow-up to-do attached to a task.
///
/// Only constructible as a plain task with no follow-up of its own, and the
/// inner task is handed out by shared reference only, so chains never grow
/// past one level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AfterTask(Box<Task>);

impl AfterTask {
    pub fn new(description: &str) -> Result<Self, TaskError> {
        Ok(Self::plain(required_description("after", description)?, false))
    }

    pub fn restore(description: String, is_done: bool) -> Self {
        Self::plain(description, is_done)
    }

    fn plain(description: String, is_done: bool) -> Self {
        AfterTask(Box::new(Task::restore(description, Kind::Plain, is_done, Vec::new(), None)))
    }

    pub fn task(&self) -> &Task {
        &self.0
    }

    pub fn description(&self) -> &str {
        self.0.description()
    }

    pub fn is_done(&self) -> bool {
        self.0.is_done()
    }

    pub fn mark_done(&self) -> AfterTask {
        AfterTask(Box::new(self.0.mark_done()))
    }

    pub fn mark_undone(&self) -> AfterTask {
        AfterTask(Box::new(self.0.mark_undone()))
    }
}

impl fmt::Display for AfterTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

fn required_description(command: &str, description: &str) -> Result<String, TaskError> {
    let description = description.trim();
    if description.is_empty() {
        return Err(TaskError::missing(command, "a description"));
    }
    Ok(description.to_string())
}
