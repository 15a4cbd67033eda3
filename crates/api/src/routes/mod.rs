pub mod health;
pub mod todos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /todos                 list, create
/// /todos/{id}            delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/todos", todos::router())
}
