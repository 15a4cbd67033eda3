//! List state and user flows for a todo front end.
//!
//! The view keeps no state the server does not also have, apart from the
//! text being typed, the selected category, and completion toggles. Toggles
//! are never sent to the server, so a re-fetch discards them.

use std::sync::Arc;

use todo_core::todo::Category;
use todo_core::types::DbId;

use crate::api::{CreateTodo, TodoApi, TodoApiError, TodoItem};
use crate::prompt::Prompt;

pub const LOAD_FAILED_TITLE: &str = "Error";
pub const LOAD_FAILED_MSG: &str = "Could not load todos";
pub const EMPTY_INPUT_TITLE: &str = "Notice";
pub const EMPTY_INPUT_MSG: &str = "Please enter a task";
pub const CREATE_FAILED_TITLE: &str = "Create failed";
pub const DELETE_FAILED_TITLE: &str = "Delete failed";
pub const DELETE_CONFIRM_TITLE: &str = "Confirm delete";
pub const DELETE_CONFIRM_MSG: &str = "Are you sure you want to delete this task?";
pub const NETWORK_ERROR_TITLE: &str = "Network error";
pub const NETWORK_ERROR_MSG: &str = "Please check your network connection";
pub const UNKNOWN_ERROR_MSG: &str = "Unknown error";

/// How a user action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The server accepted the change and the list was re-fetched.
    Done,
    /// Refused locally before any request (e.g. blank input).
    Rejected,
    /// The user declined the confirmation.
    Cancelled,
    /// The request failed; an alert was shown.
    Failed,
}

/// Todo list state driven by a front end.
pub struct TodoView {
    api: TodoApi,
    prompt: Arc<dyn Prompt>,
    todos: Vec<TodoItem>,
    input: String,
    selected_category: Category,
}

impl TodoView {
    pub fn new(api: TodoApi, prompt: Arc<dyn Prompt>) -> Self {
        Self {
            api,
            prompt,
            todos: Vec::new(),
            input: String::new(),
            selected_category: Category::default(),
        }
    }

    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn selected_category(&self) -> Category {
        self.selected_category
    }

    pub fn select_category(&mut self, category: Category) {
        self.selected_category = category;
    }

    /// Number of todos not (locally) marked completed.
    pub fn pending_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    /// Initial load when the view is first shown.
    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    /// Replace local state with the server's list. On failure the list is
    /// emptied and the user alerted. Returns whether the fetch succeeded.
    pub async fn refresh(&mut self) -> bool {
        match self.api.list().await {
            Ok(todos) => {
                self.todos = todos;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load todos");
                self.todos.clear();
                self.prompt.alert(LOAD_FAILED_TITLE, LOAD_FAILED_MSG).await;
                false
            }
        }
    }

    /// Create a todo from the current input and selected category.
    pub async fn add(&mut self) -> ActionOutcome {
        let title = self.input.trim();
        if title.is_empty() {
            self.prompt.alert(EMPTY_INPUT_TITLE, EMPTY_INPUT_MSG).await;
            return ActionOutcome::Rejected;
        }

        let request = CreateTodo {
            title: title.to_string(),
            category: self.selected_category.as_str().to_string(),
            completed: false,
        };

        match self.api.create(&request).await {
            Ok(todo) => {
                tracing::debug!(todo_id = todo.id, "Todo created");
                self.refresh().await;
                self.input.clear();
                ActionOutcome::Done
            }
            Err(e) => {
                self.report_failure(CREATE_FAILED_TITLE, e).await;
                ActionOutcome::Failed
            }
        }
    }

    /// Delete a todo after the user confirms.
    pub async fn delete(&mut self, id: DbId) -> ActionOutcome {
        let confirmed = self
            .prompt
            .confirm(DELETE_CONFIRM_TITLE, DELETE_CONFIRM_MSG)
            .await;
        if !confirmed {
            return ActionOutcome::Cancelled;
        }

        match self.api.delete(id).await {
            Ok(response) => {
                tracing::debug!(todo_id = response.deleted_todo.id, "Todo deleted");
                self.refresh().await;
                ActionOutcome::Done
            }
            Err(e) => {
                self.report_failure(DELETE_FAILED_TITLE, e).await;
                ActionOutcome::Failed
            }
        }
    }

    /// Flip a todo's completion flag locally. Returns `false` if no todo
    /// with that id is shown.
    pub fn toggle(&mut self, id: DbId) -> bool {
        match self.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                true
            }
            None => false,
        }
    }

    async fn report_failure(&self, title: &str, error: TodoApiError) {
        match error {
            TodoApiError::Api { status, message } => {
                tracing::warn!(status, %message, "Todo API rejected request");
                let message = if message.trim().is_empty() {
                    UNKNOWN_ERROR_MSG.to_string()
                } else {
                    message
                };
                self.prompt.alert(title, &message).await;
            }
            TodoApiError::Request(e) => {
                tracing::error!(error = %e, "Todo API request failed");
                self.prompt
                    .alert(NETWORK_ERROR_TITLE, NETWORK_ERROR_MSG)
                    .await;
            }
        }
    }
}
