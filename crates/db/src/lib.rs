//! Persistence layer for todos.
//!
//! Owns pool construction, the startup bootstrap (connectivity check and
//! idempotent schema creation), the [`TodoRepo`](repositories::TodoRepo)
//! queries, and the [`TodoStore`](store::TodoStore) seam the HTTP layer is
//! built against.

use sqlx::postgres::PgPoolOptions;

pub mod config;
pub mod models;
pub mod repositories;
pub mod store;

pub use config::{DbConfig, DbConfigError};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from configuration.
///
/// The pool connects lazily: building it never touches the network, so an
/// unreachable database surfaces on first use (or in [`bootstrap`]) rather
/// than here.
pub fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    let options = config.connect_options()?;
    Ok(PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy_with(options))
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations. Safe to run on every startup.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Failure modes of [`bootstrap`].
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Database unreachable: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Schema setup failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Verify connectivity, then make sure the `todos` table exists.
pub async fn bootstrap(pool: &DbPool) -> Result<(), BootstrapError> {
    health_check(pool).await.map_err(BootstrapError::Connect)?;
    tracing::info!("Database health check passed");

    run_migrations(pool).await?;
    tracing::info!("Database schema ready");

    Ok(())
}
