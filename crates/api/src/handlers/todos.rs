//! Handlers for the `/todos` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use todo_core::error::CoreError;
use todo_core::todo::{parse_todo_id, validate_new_todo};
use todo_db::models::todo::{NewTodo, Todo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /api/todos`.
///
/// Every field is optional at the serde level so that a missing field is
/// reported as a validation error (400) rather than a deserialization
/// failure.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
    pub category: Option<String>,
    pub completed: Option<bool>,
}

/// Response body for `DELETE /api/todos/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteTodoResponse {
    pub message: &'static str,
    #[serde(rename = "deletedTodo")]
    pub deleted_todo: Todo,
}

/// GET /api/todos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Todo>>> {
    let todos = state.store.list().await?;
    Ok(Json(todos))
}

/// POST /api/todos
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    let Json(input) = payload?;
    let (title, category) = validate_new_todo(input.title.as_deref(), input.category.as_deref())?;

    let new_todo = NewTodo {
        title,
        category,
        completed: input.completed.unwrap_or(false),
    };
    let todo = state.store.create(&new_todo).await?;

    tracing::info!(todo_id = todo.id, category = %todo.category, "Todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// DELETE /api/todos/{id}
///
/// The id is taken as a raw string so a non-numeric value produces our own
/// 400 body instead of the extractor's rejection.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<DeleteTodoResponse>> {
    let id = parse_todo_id(&raw_id)?;

    let deleted = state
        .store
        .delete(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;

    tracing::info!(todo_id = id, "Todo deleted");

    Ok(Json(DeleteTodoResponse {
        message: "Todo deleted",
        deleted_todo: deleted,
    }))
}
