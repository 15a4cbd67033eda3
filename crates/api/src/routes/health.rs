use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;
use todo_core::types::Timestamp;

use crate::readiness::ReadinessState;
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Human-readable summary.
    pub message: &'static str,
    /// `ok` when the database is usable, `degraded` otherwise.
    pub status: &'static str,
    /// Server time when the check ran.
    pub timestamp: Timestamp,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Runtime environment label (`APP_ENV`).
    pub environment: String,
    /// `connected`, `connecting` (bootstrap still running) or `unavailable`.
    pub database: &'static str,
}

/// GET /health -- always 200; database trouble is reported in the body.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.readiness.state() {
        ReadinessState::Pending => "connecting",
        ReadinessState::Failed => "unavailable",
        ReadinessState::Ready => match state.store.ping().await {
            Ok(()) => "connected",
            Err(err) => {
                tracing::warn!(error = %err, "Health check database ping failed");
                "unavailable"
            }
        },
    };

    let healthy = database == "connected";

    Json(HealthResponse {
        message: if healthy {
            "Todo API server is running"
        } else {
            "Todo API server is running without a usable database"
        },
        status: if healthy { "ok" } else { "degraded" },
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        database,
    })
}

/// Mount health check routes (root level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
