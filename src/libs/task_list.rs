//! Ordered task collection.
//!
//! A task's identity is its position. Every index argument is checked against
//! the list as it is at the moment of the call, so deleting task 1 turns the
//! old task 2 into task 1 for the next command.

use super::error::TaskError;
use super::task::{AfterTask, Task};
use tracing::debug;

#[derive(Debug, Default, Clone)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Live view of the tasks, in order.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Seeds the list with previously saved tasks. No dedup or validation.
    pub fn load_from(&mut self, tasks: Vec<Task>) {
        debug!(count = tasks.len(), "loading saved tasks");
        self.tasks.extend(tasks);
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Turns a user-facing 1-based task number into a position in the
    /// current list.
    ///
    /// This is the only place task numbers are converted; the resulting
    /// position feeds both the list mutation and the file rewrite.
    pub fn position(&self, number: usize) -> Result<usize, TaskError> {
        match number.checked_sub(1) {
            Some(index) if index < self.tasks.len() => Ok(index),
            _ => Err(TaskError::OutOfBound {
                number,
                len: self.tasks.len(),
            }),
        }
    }

    fn check(&self, index: usize) -> Result<(), TaskError> {
        if index < self.tasks.len() {
            Ok(())
        } else {
            Err(TaskError::OutOfBound {
                number: index.saturating_add(1),
                len: self.tasks.len(),
            })
        }
    }

    /// Swaps the task at `index` for the result of `update`. Nothing changes
    /// when `update` fails.
    fn replace(&mut self, index: usize, update: impl FnOnce(&Task) -> Result<Task, TaskError>) -> Result<&Task, TaskError> {
        self.check(index)?;
        let updated = update(&self.tasks[index])?;
        self.tasks[index] = updated;
        Ok(&self.tasks[index])
    }

    pub fn mark_done(&mut self, index: usize) -> Result<&Task, TaskError> {
        self.replace(index, |task| Ok(task.mark_done()))
    }

    pub fn mark_undone(&mut self, index: usize) -> Result<&Task, TaskError> {
        self.replace(index, |task| Ok(task.mark_undone()))
    }

    pub fn delete(&mut self, index: usize) -> Result<Task, TaskError> {
        self.check(index)?;
        Ok(self.tasks.remove(index))
    }

    /// Tasks whose description contains `needle` verbatim (case-sensitive).
    pub fn find(&self, needle: &str) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.description().contains(needle)).collect()
    }

    /// Tasks carrying exactly `tag`.
    pub fn tagged(&self, tag: &str) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.has_tag(tag)).collect()
    }

    pub fn tag(&mut self, index: usize, tags: &str) -> Result<&Task, TaskError> {
        self.replace(index, |task| {
            let mut task = task.clone();
            task.add_tags(tags);
            Ok(task)
        })
    }

    pub fn untag(&mut self, index: usize) -> Result<&Task, TaskError> {
        self.replace(index, |task| {
            let mut task = task.clone();
            task.clear_tags();
            Ok(task)
        })
    }

    pub fn attach_after(&mut self, index: usize, description: &str) -> Result<&Task, TaskError> {
        self.check(index)?;
        let after_task = AfterTask::new(description)?;
        self.replace(index, |task| {
            let mut task = task.clone();
            task.set_after_task(after_task);
            Ok(task)
        })
    }

    pub fn mark_after_done(&mut self, index: usize) -> Result<&Task, TaskError> {
        self.replace(index, Task::mark_after_task_done)
    }

    pub fn mark_after_undone(&mut self, index: usize) -> Result<&Task, TaskError> {
        self.replace(index, Task::mark_after_task_undone)
    }
}
