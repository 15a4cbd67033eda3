//! Todo model and insert DTO.

use serde::Serialize;
use sqlx::FromRow;
use todo_core::types::{DbId, Timestamp};

/// A row from the `todos` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub category: String,
    pub completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Validated fields for inserting a todo. `id` and timestamps are assigned
/// by the database.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub title: String,
    pub category: String,
    pub completed: bool,
}
