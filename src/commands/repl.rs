use super::session::Session;
use crate::libs::messages::Message;
use crate::msg_debug;
use crate::storage::TaskFile;
use anyhow::Result;
use std::io;

/// Starts the interactive loop on standard input.
pub fn cmd(file: TaskFile) -> Result<()> {
    let mut session = Session::open(file)?;
    msg_debug!(Message::TasksLoaded(session.tasks().len()));
    session.run(io::stdin().lock())
}
