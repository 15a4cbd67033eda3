use std::sync::Arc;

use todo_db::store::TodoStore;

use crate::config::ServerConfig;
use crate::readiness::Readiness;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Todo persistence backend, injected at startup.
    pub store: Arc<dyn TodoStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Result of the startup database bootstrap.
    pub readiness: Readiness,
}
