use super::date::{self, is_calendar_date};
use super::messages::Message;
use super::status::TaskStatus;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const TITLE_MIN_LEN: usize = 3;
pub const TITLE_MAX_LEN: usize = 100;

/// A task as held by the client after normalization.
///
/// `due_date` is always a calendar date without time component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Task {
    pub fn status(&self, today: &str) -> TaskStatus {
        TaskStatus::classify(self.completed, &self.due_date, today)
    }

    /// Draft carrying the current values, the starting point for edits and toggles.
    pub fn to_draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: self.due_date.clone(),
            completed: self.completed,
        }
    }

    /// `query` must already be lowercased.
    pub fn matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query) || self.description.to_lowercase().contains(query)
    }
}

/// Input for creating or updating a task.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub completed: bool,
}

#[derive(Debug, Error, PartialEq)]
pub enum DraftError {
    #[error("{}", Message::TitleTooShort(TITLE_MIN_LEN))]
    TitleTooShort,
    #[error("{}", Message::TitleTooLong(TITLE_MAX_LEN))]
    TitleTooLong,
    #[error("{}", Message::DueDateRequired)]
    DueDateRequired,
    #[error("{}", invalid_due_date(.0))]
    DueDateInvalid(String),
}

fn invalid_due_date(value: &str) -> Message {
    Message::DueDateInvalid(value.to_string())
}

impl TaskDraft {
    /// New incomplete task due today.
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            due_date: date::today(),
            completed: false,
        }
    }

    pub fn with_due_date(mut self, due_date: &str) -> Self {
        self.due_date = due_date.trim().to_string();
        self
    }

    /// Checks the rules a form submission must satisfy before any request is sent.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().chars().count() < TITLE_MIN_LEN {
            return Err(DraftError::TitleTooShort);
        }
        // The server counts the title as sent, surrounding whitespace included.
        if self.title.chars().count() > TITLE_MAX_LEN {
            return Err(DraftError::TitleTooLong);
        }
        if self.due_date.trim().is_empty() {
            return Err(DraftError::DueDateRequired);
        }
        if !is_calendar_date(&self.due_date) {
            return Err(DraftError::DueDateInvalid(self.due_date.clone()));
        }
        Ok(())
    }
}
