//! # Barista API Server
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  .env / environment ──► ApiConfig ──► Database (migrations) ──► serve  │
//! │                                                                         │
//! │  Ctrl+C / SIGTERM ──► graceful shutdown ──► pool closed                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use anyhow::Context;
use barista_api::{router, ApiConfig, AppState};
use barista_db::Database;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "barista_api=info,barista_db=info,tower_http=debug".into()),
        )
        .with_target(true)
        .init();

    info!("Starting Barista API server...");
    info!(
        port = config.port,
        database = %config.database_url,
        origins = ?config.allowed_origins,
        "Configuration loaded"
    );

    let db = Database::new(config.db_config())
        .await
        .context("Failed to open database")?;

    let app = router(AppState::new(db.clone()), &config);

    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
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
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
