//! HTTP client for the todo REST API.
//!
//! Wraps the four server operations (health, list, create, delete) using
//! [`reqwest`].

use serde::{Deserialize, Serialize};
use todo_core::todo::Category;
use todo_core::types::{DbId, Timestamp};

/// A todo as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TodoItem {
    pub id: DbId,
    pub title: String,
    /// Older servers do not persist a category; treat it as empty.
    #[serde(default)]
    pub category: String,
    pub completed: bool,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

impl TodoItem {
    /// The category as one of the known labels, if it is one.
    pub fn known_category(&self) -> Option<Category> {
        self.category.parse().ok()
    }
}

/// Request body for `POST /api/todos`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTodo {
    pub title: String,
    pub category: String,
    pub completed: bool,
}

/// Response body of `DELETE /api/todos/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    #[serde(rename = "deletedTodo")]
    pub deleted_todo: TodoItem,
}

/// Response body of `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
    pub timestamp: Timestamp,
    pub version: String,
    pub database: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Errors from the todo REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum TodoApiError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status code.
    #[error("Todo API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The server's `error` field, or the raw body if there was none.
        message: String,
    },
}

/// HTTP client for one todo server.
#[derive(Clone)]
pub struct TodoApi {
    client: reqwest::Client,
    base_url: String,
}

impl TodoApi {
    /// Create a client for the server at `base_url`, e.g.
    /// `http://localhost:3000`. A trailing slash is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /health`.
    pub async fn health(&self) -> Result<HealthStatus, TodoApiError> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `GET /api/todos` -- the full list, newest first.
    pub async fn list(&self) -> Result<Vec<TodoItem>, TodoApiError> {
        let response = self
            .client
            .get(format!("{}/api/todos", self.base_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `POST /api/todos` -- returns the stored row.
    pub async fn create(&self, input: &CreateTodo) -> Result<TodoItem, TodoApiError> {
        let response = self
            .client
            .post(format!("{}/api/todos", self.base_url))
            .json(input)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `DELETE /api/todos/{id}`.
    pub async fn delete(&self, id: DbId) -> Result<DeleteResponse, TodoApiError> {
        let response = self
            .client
            .delete(format!("{}/api/todos/{}", self.base_url, id))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, turning anything else
    /// into [`TodoApiError::Api`] with the server's message.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, TodoApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or(body);

        Err(TodoApiError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, TodoApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
