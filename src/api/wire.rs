//! JSON shapes exchanged with the task server.
//!
//! The server speaks snake_case (`due_date`, `created_at`, `updated_at`)
//! and sends due dates as full timestamps. Some deployments answer with
//! camelCase names or wrap payloads under `data`; both are tolerated here
//! and nowhere else.

use crate::libs::date::{format_date_for_api, normalize_due_date};
use crate::libs::task::{Task, TaskDraft};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Either the payload itself or the payload under a `data` key.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Bare(T),
    Wrapped { data: T },
}

impl<T> Envelope<T> {
    pub fn is_wrapped(&self) -> bool {
        matches!(self, Envelope::Wrapped { .. })
    }

    pub fn into_inner(self) -> T {
        match self {
            Envelope::Bare(inner) | Envelope::Wrapped { data: inner } => inner,
        }
    }
}

/// Identifiers are strings, but numeric ids are accepted and stringified.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Text(String),
    Number(i64),
}

impl From<WireId> for String {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Text(id) => id,
            WireId::Number(id) => id.to_string(),
        }
    }
}

/// A task as the server sends it. Everything but `id` may be missing or null.
#[derive(Debug, Deserialize)]
pub struct WireTask {
    pub id: WireId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "truthy")]
    pub completed: bool,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default, rename = "dueDate")]
    pub due_date_camel: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at_camel: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at_camel: Option<String>,
}

/// Reads `completed` loosely: `1`, `"yes"` and the like count as done,
/// while `null`, `0`, `""` and `false` do not.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// First non-empty value, snake_case name winning.
fn coalesce(primary: Option<String>, fallback: Option<String>) -> String {
    primary
        .filter(|value| !value.is_empty())
        .or(fallback.filter(|value| !value.is_empty()))
        .unwrap_or_default()
}

impl From<WireTask> for Task {
    fn from(wire: WireTask) -> Self {
        let due_date = coalesce(wire.due_date, wire.due_date_camel);

        Task {
            id: wire.id.into(),
            title: wire.title.unwrap_or_default(),
            description: wire.description.unwrap_or_default(),
            due_date: normalize_due_date(&due_date),
            completed: wire.completed,
            created_at: coalesce(wire.created_at, wire.created_at_camel),
            updated_at: coalesce(wire.updated_at, wire.updated_at_camel),
        }
    }
}

/// Request body for create and update.
#[derive(Debug, Serialize, PartialEq)]
pub struct WireDraft {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub completed: bool,
}

impl From<&TaskDraft> for WireDraft {
    fn from(draft: &TaskDraft) -> Self {
        WireDraft {
            title: draft.title.clone(),
            description: draft.description.clone(),
            due_date: format_date_for_api(&draft.due_date),
            completed: draft.completed,
        }
    }
}

/// Error body; only `message` is surfaced to the user.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Parses a task-list body in either envelope and normalizes every item.
///
/// Returns `None` for any other shape.
pub fn parse_task_list(body: &str) -> Option<(Vec<Task>, bool)> {
    let envelope: Envelope<Vec<WireTask>> = serde_json::from_str(body).ok()?;
    let wrapped = envelope.is_wrapped();
    Some((envelope.into_inner().into_iter().map(Task::from).collect(), wrapped))
}

/// Parses a single-task body in either envelope.
pub fn parse_task(body: &str) -> Option<Task> {
    let envelope: Envelope<WireTask> = serde_json::from_str(body).ok()?;
    Some(envelope.into_inner().into())
}

/// Server-supplied error message, if the body carries a non-blank one.
pub fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()?
        .message
        .filter(|message| !message.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case_wins_over_camel_case() {
        let task = parse_task(r#"{"id":"1","due_date":"2024-01-02","dueDate":"2030-01-01"}"#).unwrap();
        assert_eq!(task.due_date, "2024-01-02");
    }

    #[test]
    fn test_camel_case_fills_missing_fields() {
        let task = parse_task(r#"{"id":"1","due_date":"","createdAt":"2024-01-01T10:00:00Z"}"#).unwrap();
        assert_eq!(task.due_date, "");
        assert_eq!(task.created_at, "2024-01-01T10:00:00Z");
    }

    #[test]
    fn test_numeric_id_is_stringified() {
        let task = parse_task(r#"{"id":42,"title":"Answer"}"#).unwrap();
        assert_eq!(task.id, "42");
    }

    #[test]
    fn test_completed_accepts_non_boolean_values() {
        let done = |raw: &str| parse_task(&format!(r#"{{"id":"1","completed":{raw}}}"#)).unwrap().completed;
        assert!(done("true"));
        assert!(done("1"));
        assert!(done(r#""x""#));
        assert!(!done("false"));
        assert!(!done("0"));
        assert!(!done(r#""""#));
        assert!(!done("null"));
        assert!(!parse_task(r#"{"id":"1"}"#).unwrap().completed);
    }

    #[test]
    fn test_list_with_numeric_completed_keeps_every_item() {
        let (tasks, wrapped) =
            parse_task_list(r#"[{"id":"1","completed":false},{"id":"2","completed":1}]"#).unwrap();
        assert!(!wrapped);
        assert_eq!(tasks.len(), 2);
        assert!(!tasks[0].completed);
        assert!(tasks[1].completed);
    }

    #[test]
    fn test_error_message_ignores_blank() {
        assert_eq!(parse_error_message(r#"{"message":"  "}"#), None);
        assert_eq!(parse_error_message("not json"), None);
        assert_eq!(parse_error_message(r#"{"error":"x","message":"boom"}"#), Some("boom".to_string()));
    }
}
