//! The interactive command loop.
//!
//! A [`Session`] owns the task list and the task file. Each input line is
//! parsed, executed, written to disk and reported before the next line is
//! read. Domain errors are reported and the loop carries on.

use super::action::Action;
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::libs::task_list::TaskList;
use crate::libs::view::View;
use crate::storage::TaskFile;
use crate::{msg_bail_anyhow, msg_error, msg_info, msg_print};
use anyhow::Result;
use std::io::BufRead;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session {
    list: TaskList,
    file: TaskFile,
}

impl Session {
    /// Loads the saved tasks from `file`.
    ///
    /// A damaged file stops here with a message naming the file and the
    /// offending line; nothing is written back to it.
    pub fn open(file: TaskFile) -> Result<Self> {
        let tasks = match file.load() {
            Ok(tasks) => tasks,
            Err(error) => match error.downcast_ref::<TaskError>() {
                Some(task_error) => msg_bail_anyhow!(Message::CorruptTaskFile(format!("{} ({})", task_error, file.path().display()))),
                None => return Err(error),
            },
        };
        let mut list = TaskList::new();
        list.load_from(tasks);
        Ok(Self { list, file })
    }

    pub fn tasks(&self) -> &TaskList {
        &self.list
    }

    /// Reads commands until `bye` or end of input.
    pub fn run(&mut self, input: impl BufRead) -> Result<()> {
        msg_print!(Message::Greeting);
        for line in input.lines() {
            if self.handle_line(&line?) == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Parses and executes one line, reporting any failure.
    pub fn handle_line(&mut self, line: &str) -> Flow {
        let outcome = Action::parse(line).map_err(anyhow::Error::from).and_then(|action| self.execute(action));
        match outcome {
            Ok(flow) => flow,
            Err(error) => {
                report(&error);
                Flow::Continue
            }
        }
    }

    pub fn execute(&mut self, action: Action) -> Result<Flow> {
        debug!(?action, "executing");
        match action {
            Action::List => show(self.list.all().iter().collect(), Message::TasksHeader, Message::NoTasks),
            Action::Todo { description } => self.create(Task::todo(&description)?)?,
            Action::Deadline { description, by } => self.create(Task::deadline(&description, &by)?)?,
            Action::Event { description, at } => self.create(Task::event(&description, &at)?)?,
            Action::Done { number } => {
                let task = self.update(number, |list, index| list.mark_done(index).cloned())?;
                msg_print!(Message::TaskMarkedDone(task.to_string()));
                if let Some(after_task) = task.after_task() {
                    msg_info!(Message::AfterTaskUnlocked(after_task.to_string()));
                }
            }
            Action::Undone { number } => {
                let task = self.update(number, |list, index| list.mark_undone(index).cloned())?;
                msg_print!(Message::TaskMarkedUndone(task.to_string()));
            }
            Action::Delete { number } => {
                let task = self.update(number, |list, index| list.delete(index))?;
                msg_print!(Message::TaskDeleted {
                    task: task.to_string(),
                    total: self.list.len(),
                });
            }
            Action::Find { needle } => {
                let found = self.list.find(&needle);
                show(found, Message::TasksFoundHeader(needle.clone()), Message::NoTasksFound(needle));
            }
            Action::Tag { number, tags } => {
                let task = self.update(number, |list, index| list.tag(index, &tags).cloned())?;
                msg_print!(Message::TaskTagged(task.to_string()));
            }
            Action::Untag { number } => {
                let task = self.update(number, |list, index| list.untag(index).cloned())?;
                msg_print!(Message::TaskUntagged(task.to_string()));
            }
            Action::Tagged { tag } => {
                let found = self.list.tagged(&tag);
                show(found, Message::TasksTaggedHeader(tag.clone()), Message::NoTasksFound(format!("#{}", tag)));
            }
            Action::After { number, description } => {
                let task = self.update(number, |list, index| list.attach_after(index, &description).cloned())?;
                if let Some(after_task) = task.pending_after_task() {
                    msg_print!(Message::AfterTaskAttached(after_task.to_string()));
                }
            }
            Action::AfterDone { number } => {
                let task = self.update(number, |list, index| list.mark_after_done(index).cloned())?;
                if let Some(after_task) = task.after_task() {
                    msg_print!(Message::AfterTaskDone(after_task.to_string()));
                }
            }
            Action::AfterUndone { number } => {
                let task = self.update(number, |list, index| list.mark_after_undone(index).cloned())?;
                if let Some(after_task) = task.after_task() {
                    msg_print!(Message::AfterTaskUndone(after_task.to_string()));
                }
            }
            Action::Bye => {
                msg_print!(Message::Farewell);
                return Ok(Flow::Exit);
            }
            Action::Empty => {}
            Action::Unknown { command } => msg_error!(Message::UnknownCommand(command)),
        }
        Ok(Flow::Continue)
    }

    fn create(&mut self, task: Task) -> Result<()> {
        self.file.append(&task)?;
        let shown = task.to_string();
        self.list.add(task);
        msg_print!(Message::TaskAdded {
            task: shown,
            total: self.list.len(),
        });
        Ok(())
    }

    /// Applies `change` to a copy of the list at the position of `number`,
    /// saves the copy and only then adopts it, so a failed change or a failed
    /// write leaves both the list and the file as they were.
    fn update<T>(&mut self, number: usize, change: impl FnOnce(&mut TaskList, usize) -> Result<T, TaskError>) -> Result<T> {
        let index = self.list.position(number)?;
        let mut next = self.list.clone();
        let result = change(&mut next, index)?;
        self.file.rewrite(next.all())?;
        self.list = next;
        Ok(result)
    }
}

fn show(tasks: Vec<&Task>, header: Message, empty: Message) {
    if tasks.is_empty() {
        msg_info!(empty);
        return;
    }
    msg_print!(header);
    View::tasks(tasks);
}

fn report(error: &anyhow::Error) {
    match error.downcast_ref::<TaskError>() {
        Some(task_error) => msg_error!(Message::from(task_error)),
        None => msg_error!(Message::TaskFileWriteFailed(error.to_string())),
    }
}
