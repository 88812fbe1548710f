use super::session::Session;
use crate::{
    libs::{messages::Message, view::View},
    msg_info, msg_print,
    storage::TaskFile,
};
use anyhow::Result;

/// Prints the saved tasks once, without entering the loop.
pub fn cmd(file: TaskFile) -> Result<()> {
    let session = Session::open(file)?;
    let tasks = session.tasks().all();
    if tasks.is_empty() {
        msg_info!(Message::NoTasks);
        return Ok(());
    }

    msg_print!(Message::TasksHeader);
    View::tasks(tasks);
    Ok(())
}
