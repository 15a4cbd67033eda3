use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use todo_core::types::{DbId, Timestamp};

use super::TodoStore;
use crate::models::todo::{NewTodo, Todo};

/// In-process [`TodoStore`] with the same id and ordering rules as the
/// PostgreSQL table: ids start at 1 and only ever grow, even across
/// deletes. `created_at` never goes backwards between creations, so the
/// newest-first order always matches id order.
pub struct MemoryTodoStore {
    state: Mutex<MemoryState>,
    available: AtomicBool,
}

struct MemoryState {
    next_id: DbId,
    last_created_at: Option<Timestamp>,
    rows: Vec<Todo>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState {
                next_id: 1,
                last_created_at: None,
                rows: Vec::new(),
            }),
            available: AtomicBool::new(true),
        }
    }

    /// Make every subsequent operation fail as if the database were
    /// unreachable (or recover again with `true`).
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), sqlx::Error> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(sqlx::Error::PoolTimedOut)
        }
    }
}

impl Default for MemoryTodoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn list(&self) -> Result<Vec<Todo>, sqlx::Error> {
        self.check_available()?;
        let state = self.state.lock().await;
        let mut rows = state.rows.clone();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(rows)
    }

    async fn create(&self, input: &NewTodo) -> Result<Todo, sqlx::Error> {
        self.check_available()?;
        let mut state = self.state.lock().await;
        // Clamp against wall-clock steps backwards.
        let now = state
            .last_created_at
            .map_or_else(Utc::now, |last| last.max(Utc::now()));
        state.last_created_at = Some(now);
        let todo = Todo {
            id: state.next_id,
            title: input.title.clone(),
            category: input.category.clone(),
            completed: input.completed,
            created_at: now,
            updated_at: now,
        };
        state.next_id += 1;
        state.rows.push(todo.clone());
        Ok(todo)
    }

    async fn delete(&self, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        self.check_available()?;
        let mut state = self.state.lock().await;
        let position = state.rows.iter().position(|t| t.id == id);
        Ok(position.map(|index| state.rows.remove(index)))
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        self.check_available()
    }
}
