use super::collection::TaskCounts;
use super::date::format_display_date;
use super::messages::Message;
use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints tasks as a table, annotating each row with its status relative to `today`.
    pub fn tasks(tasks: &[&Task], today: &str) {
        Self::tasks_table(tasks, today).printstd();
    }

    pub fn tasks_table(tasks: &[&Task], today: &str) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "DUE", "STATUS"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.title,
                task.description,
                format_display_date(&task.due_date),
                task.status(today)
            ]);
        }

        table
    }

    pub fn counts(counts: &TaskCounts) -> String {
        Message::TaskCounts(counts.all, counts.active, counts.completed).to_string()
    }
}
