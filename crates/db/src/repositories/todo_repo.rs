//! Repository for the `todos` table.
//!
//! Every method checks one connection out of the pool for the duration of
//! a single statement. The [`PoolConnection`](sqlx::pool::PoolConnection)
//! guard returns it to the pool when it drops, on success and error alike.

use sqlx::PgPool;
use todo_core::types::DbId;

use crate::models::todo::{NewTodo, Todo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, category, completed, created_at, updated_at";

/// Provides create/list/delete operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// List all todos, newest first. Rows created in the same instant are
    /// ordered by descending id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos ORDER BY created_at DESC, id DESC");
        let mut conn = pool.acquire().await?;
        sqlx::query_as::<_, Todo>(&query)
            .fetch_all(&mut *conn)
            .await
    }

    /// Insert a new todo, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewTodo) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (title, category, completed, created_at, updated_at)
             VALUES ($1, $2, $3, NOW(), NOW())
             RETURNING {COLUMNS}"
        );
        let mut conn = pool.acquire().await?;
        sqlx::query_as::<_, Todo>(&query)
            .bind(&input.title)
            .bind(&input.category)
            .bind(input.completed)
            .fetch_one(&mut *conn)
            .await
    }

    /// Permanently delete a todo by ID.
    ///
    /// Returns the removed row, or `None` if no row with the given `id`
    /// exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("DELETE FROM todos WHERE id = $1 RETURNING {COLUMNS}");
        let mut conn = pool.acquire().await?;
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }
}
