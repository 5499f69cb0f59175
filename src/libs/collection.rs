//! Filtered, searched and sorted projection over the fetched tasks.
//!
//! The collection owns the last fetched set and recomputes the projection
//! on every call. Nothing is cached between calls.
//!
//! ```rust
//! use taskdesk::libs::collection::{StatusFilter, TaskCollection};
//!
//! let collection = TaskCollection::new(Vec::new());
//! let visible = collection.view(StatusFilter::Active, "groceries");
//! assert!(visible.is_empty());
//! ```

use super::task::Task;
use clap::ValueEnum;
use std::fmt;

/// Which completion bucket to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub fn accepts(&self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => !task.completed,
            StatusFilter::Completed => task.completed,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Completed => "completed",
        };
        write!(f, "{}", name)
    }
}

/// Task totals per bucket, always over the unfiltered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub all: usize,
    pub active: usize,
    pub completed: usize,
}

#[derive(Debug, Clone, Default)]
pub struct TaskCollection {
    tasks: Vec<Task>,
}

impl TaskCollection {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Applies the status filter, then the search query, then sorts by due date.
    ///
    /// A query that is blank after trimming matches everything. Otherwise the
    /// lowercased query must occur in the title or description. The sort is
    /// stable, so tasks sharing a due date keep their fetched order.
    pub fn view(&self, filter: StatusFilter, query: &str) -> Vec<&Task> {
        let query = if query.trim().is_empty() { None } else { Some(query.to_lowercase()) };

        let mut result: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|task| filter.accepts(task))
            .filter(|task| query.as_deref().is_none_or(|q| task.matches(q)))
            .collect();

        result.sort_by(|a, b| a.due_date.cmp(&b.due_date));
        result
    }

    pub fn counts(&self) -> TaskCounts {
        let completed = self.tasks.iter().filter(|task| task.completed).count();
        TaskCounts {
            all: self.tasks.len(),
            active: self.tasks.len() - completed,
            completed,
        }
    }
}
