//! The storage seam the HTTP layer is written against.
//!
//! [`PgTodoStore`] is the production backend. [`MemoryTodoStore`] keeps
//! rows in process and is what the router tests and the client tests run
//! against when no PostgreSQL instance is around.

mod memory;
mod postgres;

use async_trait::async_trait;
use todo_core::types::DbId;

use crate::models::todo::{NewTodo, Todo};

pub use memory::MemoryTodoStore;
pub use postgres::PgTodoStore;

/// Persistence operations needed by the todo API.
///
/// Errors are the underlying `sqlx::Error` so callers classify them the
/// same way regardless of backend.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All todos, newest first (ties by descending id).
    async fn list(&self) -> Result<Vec<Todo>, sqlx::Error>;

    /// Insert a todo and return the stored row.
    async fn create(&self, input: &NewTodo) -> Result<Todo, sqlx::Error>;

    /// Remove a todo, returning it if it existed.
    async fn delete(&self, id: DbId) -> Result<Option<Todo>, sqlx::Error>;

    /// Cheap liveness probe used by the health endpoint.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}
