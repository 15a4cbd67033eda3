use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::todos;
use crate::state::AppState;

/// Todo routes mounted at `/todos`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(todos::list).post(todos::create))
        .route("/{id}", delete(todos::delete))
}
