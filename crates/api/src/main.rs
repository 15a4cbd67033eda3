use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_api::app::build_app;
use todo_api::config::ServerConfig;
use todo_api::readiness::Readiness;
use todo_api::state::AppState;
use todo_db::store::PgTodoStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_api=debug,todo_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });
    tracing::info!(
        host = %config.host,
        port = config.port,
        environment = %config.environment,
        database = ?config.database,
        "Loaded server configuration",
    );

    // --- Database ---
    let pool = todo_db::create_pool(&config.database).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid database connection settings");
        std::process::exit(1);
    });
    tracing::info!("Database connection pool created");

    // The bootstrap runs alongside the server; its outcome is reported by
    // /health rather than blocking startup.
    let readiness = Readiness::new();
    {
        let pool = pool.clone();
        let readiness = readiness.clone();
        tokio::spawn(async move {
            match todo_db::bootstrap(&pool).await {
                Ok(()) => readiness.mark_ready(),
                Err(e) => {
                    tracing::error!(error = %e, "Database bootstrap failed");
                    readiness.mark_failed();
                }
            }
        });
    }

    // --- App state ---
    let addr_host = config.host.clone();
    let port = config.port;
    let state = AppState {
        store: Arc::new(PgTodoStore::new(pool)),
        config: Arc::new(config),
        readiness,
    };

    let app = build_app(state).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid CORS configuration");
        std::process::exit(1);
    });

    // --- Start server ---
    let ip = addr_host.parse::<IpAddr>().unwrap_or_else(|e| {
        tracing::error!(host = %addr_host, error = %e, "Invalid HOST address");
        std::process::exit(1);
    });
    let addr = SocketAddr::new(ip, port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!(%addr, error = %e, "Failed to bind to address");
            std::process::exit(1);
        });
    tracing::info!(%addr, "Starting server");
    tracing::info!("Health check: http://{addr}/health");
    tracing::info!("Todo API: http://{addr}/api/todos");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
