use super::task::Task;
use prettytable::{format, row, Table};

pub struct View {}

impl View {
    /// Prints tasks numbered from 1. A done task's follow-up is shown on the
    /// row below it.
    pub fn tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) {
        Self::table(tasks).printstd();
    }

    pub fn table<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);

        for (index, task) in tasks.into_iter().enumerate() {
            table.add_row(row![format!("{}.", index + 1), task]);
            if let Some(after_task) = task.after_task() {
                table.add_row(row!["", format!("  -> {}", after_task)]);
            }
        }
        table
    }
}
