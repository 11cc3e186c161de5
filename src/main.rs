//! YouthHub Server: youth affairs content backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::future::IntoFuture;
use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use youthhub_api::{build_app, build_state};
use youthhub_auth::password::PasswordHasher;
use youthhub_core::config::AppConfig;
use youthhub_core::error::AppError;
use youthhub_database::connection::DatabasePool;
use youthhub_service::database_bootstrap;

#[tokio::main]
async fn main() {
    let env = std::env::var("YOUTHHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting YouthHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database ─────────────────────────────────────────
    let db = DatabasePool::connect(&config.database).await?;

    // ── Step 2: Schema and seed rows ─────────────────────────────
    let hasher = PasswordHasher::new(&config.auth)?;
    let bootstrap = database_bootstrap(db.pool().clone(), &config.auth, &hasher)?;
    bootstrap.ensure_initialized().await?;

    // ── Step 3: Application ──────────────────────────────────────
    let addr = config.server.socket_addr()?;
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let state = build_state(config, db.clone()).await?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("YouthHub server listening on {}", addr);

    // ── Step 4: Graceful shutdown ────────────────────────────────
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, draining connections...");
        let _ = shutdown_tx.send(true);
    });

    let grace_elapsed = async move {
        if shutdown_rx.wait_for(|stopped| *stopped).await.is_ok() {
            tokio::time::sleep(grace).await;
        } else {
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        result = server.into_future() => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
        }
        () = grace_elapsed => {
            tracing::warn!(grace_seconds = grace.as_secs(), "Grace period elapsed, closing open connections");
        }
    }

    db.close().await;
    tracing::info!("YouthHub server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
