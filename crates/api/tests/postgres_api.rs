//! The same HTTP contract, exercised against a real PostgreSQL database.
//!
//! Need a reachable server via `DATABASE_URL`; run with
//! `cargo test -p todo-api -- --ignored`.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};
use serde_json::json;
use sqlx::PgPool;
use todo_api::readiness::Readiness;
use todo_db::store::PgTodoStore;

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn round_trip_against_postgres(pool: PgPool) {
    let app = common::build_app_with(Arc::new(PgTodoStore::new(pool)), Readiness::ready());

    let response = post_json(
        app.clone(),
        "/api/todos",
        json!({"title": "Persisted", "category": "life"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["category"], "life");

    let listed = body_json(get(app.clone(), "/api/todos").await).await;
    assert_eq!(listed[0]["id"], id);

    let response = delete(app.clone(), &format!("/api/todos/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete(app, &format!("/api/todos/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn health_pings_postgres(pool: PgPool) {
    let app = common::build_app_with(Arc::new(PgTodoStore::new(pool)), Readiness::ready());

    let json = body_json(get(app, "/health").await).await;
    assert_eq!(json["database"], "connected");
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn nul_character_is_a_400_not_a_database_error(pool: PgPool) {
    let app = common::build_app_with(Arc::new(PgTodoStore::new(pool)), Readiness::ready());

    let response = post_json(
        app.clone(),
        "/api/todos",
        json!({"title": "a\0b", "category": "work"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let listed = body_json(get(app, "/api/todos").await).await;
    assert_eq!(listed, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn rejected_column_values_map_to_400(pool: PgPool) {
    use axum::response::IntoResponse;
    use todo_api::error::AppError;
    use todo_db::models::todo::NewTodo;
    use todo_db::repositories::TodoRepo;

    for (title, category) in [("a\0b".to_string(), "work"), ("x".repeat(300), "work")] {
        let err = TodoRepo::create(
            &pool,
            &NewTodo {
                title,
                category: category.to_string(),
                completed: false,
            },
        )
        .await
        .unwrap_err();

        let response = AppError::Database(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }
}
