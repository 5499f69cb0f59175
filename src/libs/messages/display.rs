//! Text for every [`Message`] variant.
//!
//! Keeping all strings here means command handlers, the API client and
//! validation code never format user-facing text themselves.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated => "Task created successfully".to_string(),
            Message::TaskUpdated => "Task updated successfully".to_string(),
            Message::TaskDeleted => "Task deleted successfully".to_string(),
            Message::TaskMarkedComplete => "Task marked as complete".to_string(),
            Message::TaskMarkedIncomplete => "Task marked as incomplete".to_string(),
            Message::TasksNotAvailable => "No tasks available.".to_string(),
            Message::TasksNoSearchMatch => "No tasks match your search.".to_string(),
            Message::TaskCounts(all, active, completed) => {
                format!("All Tasks ({}) | Active ({}) | Completed ({})", all, active, completed)
            }
            Message::EditingTask(title) => format!("Editing task '{}'", title),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::OperationCancelled => "Operation cancelled.".to_string(),
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptTaskDueDate => "Due date (YYYY-MM-DD)".to_string(),

            // === VALIDATION MESSAGES ===
            Message::TitleTooShort(min) => format!("Title must be at least {} characters", min),
            Message::TitleTooLong(max) => format!("Title must be at most {} characters", max),
            Message::DueDateRequired => "Due date is required".to_string(),
            Message::DueDateInvalid(value) => format!("Due date must be in YYYY-MM-DD format, got '{}'", value),

            // === API MESSAGES ===
            Message::FetchTasksFailed => "Failed to fetch tasks".to_string(),
            Message::FetchTaskFailed => "Task not found".to_string(),
            Message::CreateTaskFailed => "Failed to create task".to_string(),
            Message::UpdateTaskFailed => "Failed to update task".to_string(),
            Message::DeleteTaskFailed => "Failed to delete task".to_string(),
            Message::ToggleStatusFailed => "Failed to update task status".to_string(),
            Message::UnexpectedResponseFormat => "Unexpected API response format".to_string(),
            Message::ApiRequest(method, url) => format!("{} {}", method, url),
            Message::ApiWrappedEnvelope => "Task list arrived wrapped in a 'data' envelope".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigModuleServer => "Task server".to_string(),
            Message::PromptServerApiUrl => "Enter the task server base URL".to_string(),
            Message::ApiUrlResolved(url) => format!("Using task server at {}", url),
        };
        write!(f, "{}", text)
    }
}
