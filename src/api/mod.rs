//! Client for the remote task store.
//!
//! The store is the source of truth; nothing here caches. [`TaskStore`] is
//! the seam command handlers program against, [`TasksClient`] the HTTP
//! implementation.
//!
//! ## Endpoints
//!
//! - `GET {base}/api/v1/tasks`: list, bare array or `{ "data": [...] }`
//! - `GET {base}/api/v1/tasks/:id`: single task
//! - `POST {base}/api/v1/tasks`: create
//! - `PUT {base}/api/v1/tasks/:id`: update
//! - `DELETE {base}/api/v1/tasks/:id`: delete
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::api::{TaskStore, TasksClient};
//!
//! # async fn run() -> Result<(), taskdesk::api::ApiError> {
//! let client = TasksClient::new("http://localhost:8080");
//! let tasks = client.fetch_tasks().await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::task::{Task, TaskDraft};

pub mod client;
pub mod error;
pub mod wire;

pub use client::TasksClient;
pub use error::{ApiError, Operation};

/// Operations against the task store.
///
/// Every call is independent. Failures carry a message fit for the user:
/// the server's own when it sent one, otherwise a per-operation fallback.
#[allow(async_fn_in_trait)]
pub trait TaskStore {
    /// Fetches the whole collection with due dates normalized to calendar dates.
    async fn fetch_tasks(&self) -> Result<Vec<Task>, ApiError>;

    async fn fetch_task(&self, id: &str) -> Result<Task, ApiError>;

    /// Creates a task and returns the server's representation.
    async fn create_task(&self, draft: &TaskDraft) -> Result<Task, ApiError>;

    /// Replaces every field of task `id` and returns the server's representation.
    async fn update_task(&self, id: &str, draft: &TaskDraft) -> Result<Task, ApiError>;

    async fn delete_task(&self, id: &str) -> Result<(), ApiError>;
}
