//! Request handlers.
//!
//! Handlers delegate to the injected [`TodoStore`](todo_db::store::TodoStore)
//! and map errors via [`AppError`](crate::error::AppError).

pub mod todos;
