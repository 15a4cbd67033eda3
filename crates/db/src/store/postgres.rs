use async_trait::async_trait;
use todo_core::types::DbId;

use super::TodoStore;
use crate::models::todo::{NewTodo, Todo};
use crate::repositories::TodoRepo;
use crate::DbPool;

/// [`TodoStore`] backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PgTodoStore {
    pool: DbPool,
}

impl PgTodoStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn list(&self) -> Result<Vec<Todo>, sqlx::Error> {
        TodoRepo::list(&self.pool).await
    }

    async fn create(&self, input: &NewTodo) -> Result<Todo, sqlx::Error> {
        TodoRepo::create(&self.pool, input).await
    }

    async fn delete(&self, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        TodoRepo::delete(&self.pool, id).await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
