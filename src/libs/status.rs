//! Display status of a task.

use std::fmt;

/// Mutually exclusive status labels, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Completed,
    Overdue,
    InProgress,
}

impl TaskStatus {
    /// Derives the status from the completion flag and due date.
    ///
    /// `due_date` and `today` must both be normalized `YYYY-MM-DD` strings;
    /// they are compared lexicographically. A task is overdue only when its
    /// due date is strictly before today.
    pub fn classify(completed: bool, due_date: &str, today: &str) -> Self {
        if completed {
            TaskStatus::Completed
        } else if due_date < today {
            TaskStatus::Overdue
        } else {
            TaskStatus::InProgress
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "Completed",
            TaskStatus::Overdue => "Overdue",
            TaskStatus::InProgress => "In Progress",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
