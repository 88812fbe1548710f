use super::codec;
use crate::libs::task::Task;
use anyhow::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Flat-file task store.
///
/// New tasks are appended as one line each; any other change rewrites the
/// whole file from the caller's list.
#[derive(Debug, Clone)]
pub struct TaskFile {
    path: PathBuf,
}

impl TaskFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every saved task in file order. A missing file is an empty list.
    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no task file yet");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let mut tasks = Vec::new();
        for (number, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            tasks.push(codec::decode(line, number + 1)?);
        }
        Ok(tasks)
    }

    pub fn append(&self, task: &Task) -> Result<()> {
        self.ensure_parent()?;
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{}", codec::encode(task))?;
        debug!(path = %self.path.display(), "appended task");
        Ok(())
    }

    pub fn rewrite(&self, tasks: &[Task]) -> Result<()> {
        self.ensure_parent()?;
        let mut content = String::new();
        for task in tasks {
            content.push_str(&codec::encode(task));
            content.push('\n');
        }
        fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), count = tasks.len(), "rewrote task file");
        Ok(())
    }

    fn ensure_parent(&self) -> Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                fs::create_dir_all(parent)?;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}
