#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use todo_api::app::build_app;
use todo_api::config::ServerConfig;
use todo_api::readiness::Readiness;
use todo_api::state::AppState;
use todo_db::store::{MemoryTodoStore, TodoStore};
use todo_db::DbConfig;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: "test".to_string(),
        cors_origins: None,
        request_timeout_secs: 30,
        database: DbConfig::default(),
    }
}

/// Build the full application router over an arbitrary store, with the
/// given readiness.
pub fn build_app_with(store: Arc<dyn TodoStore>, readiness: Readiness) -> Router {
    let state = AppState {
        store,
        config: Arc::new(test_config()),
        readiness,
    };
    build_app(state).unwrap()
}

/// Build the full application router over a fresh in-memory store.
///
/// Returns the store as well so tests can seed it or take it offline.
pub fn build_test_app() -> (Router, Arc<MemoryTodoStore>) {
    let store = Arc::new(MemoryTodoStore::new());
    let app = build_app_with(store.clone(), Readiness::ready());
    (app, store)
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<String>) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
