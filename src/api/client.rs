use super::error::{ApiError, Operation};
use super::wire::{self, WireDraft};
use super::TaskStore;
use crate::libs::config::{normalize_base_url, Config};
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskDraft};
use crate::msg_debug;
use reqwest::{Client, RequestBuilder, Response};
use tracing::debug;

const TASKS_PATH: &str = "/api/v1/tasks";

/// HTTP client for the `/api/v1/tasks` resource.
///
/// Requests are independent: no retries, no timeouts beyond reqwest's
/// defaults, no cancellation.
#[derive(Debug, Clone)]
pub struct TasksClient {
    client: Client,
    base_url: String,
}

impl TasksClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api_url())
    }

    pub fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, TASKS_PATH)
    }

    pub fn item_url(&self, id: &str) -> String {
        format!("{}{}/{}", self.base_url, TASKS_PATH, id)
    }

    /// Sends the request and turns transport failures and non-success statuses into [`ApiError`].
    async fn send(&self, request: RequestBuilder, operation: Operation) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|source| ApiError::Transport { operation, source })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = wire::parse_error_message(&body).unwrap_or_else(|| operation.fallback().to_string());
        debug!(%status, %message, "task server returned an error");

        Err(ApiError::Server { status, message })
    }

    async fn body(response: Response, operation: Operation) -> Result<String, ApiError> {
        response.text().await.map_err(|source| ApiError::Transport { operation, source })
    }
}

impl TaskStore for TasksClient {
    async fn fetch_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let url = self.collection_url();
        msg_debug!(Message::ApiRequest("GET".to_string(), url.clone()));

        let response = self.send(self.client.get(&url), Operation::FetchAll).await?;
        let body = Self::body(response, Operation::FetchAll).await?;

        let (tasks, wrapped) = wire::parse_task_list(&body).ok_or(ApiError::UnexpectedFormat)?;
        if wrapped {
            msg_debug!(Message::ApiWrappedEnvelope);
        }
        debug!(count = tasks.len(), "fetched tasks");

        Ok(tasks)
    }

    async fn fetch_task(&self, id: &str) -> Result<Task, ApiError> {
        let url = self.item_url(id);
        msg_debug!(Message::ApiRequest("GET".to_string(), url.clone()));

        let response = self.send(self.client.get(&url), Operation::FetchOne).await?;
        let body = Self::body(response, Operation::FetchOne).await?;

        wire::parse_task(&body).ok_or(ApiError::UnexpectedFormat)
    }

    async fn create_task(&self, draft: &TaskDraft) -> Result<Task, ApiError> {
        let url = self.collection_url();
        msg_debug!(Message::ApiRequest("POST".to_string(), url.clone()));

        let payload = WireDraft::from(draft);
        let response = self.send(self.client.post(&url).json(&payload), Operation::Create).await?;
        let body = Self::body(response, Operation::Create).await?;

        wire::parse_task(&body).ok_or(ApiError::UnexpectedFormat)
    }

    async fn update_task(&self, id: &str, draft: &TaskDraft) -> Result<Task, ApiError> {
        let url = self.item_url(id);
        msg_debug!(Message::ApiRequest("PUT".to_string(), url.clone()));

        let payload = WireDraft::from(draft);
        let response = self.send(self.client.put(&url).json(&payload), Operation::Update).await?;
        let body = Self::body(response, Operation::Update).await?;

        wire::parse_task(&body).ok_or(ApiError::UnexpectedFormat)
    }

    async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        let url = self.item_url(id);
        msg_debug!(Message::ApiRequest("DELETE".to_string(), url.clone()));

        self.send(self.client.delete(&url), Operation::Delete).await?;
        Ok(())
    }
}
