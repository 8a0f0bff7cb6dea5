//! Application builder: wires router, middleware, and state into an Axum app.

use axum::Router;

use jobboard_core::config::AppConfig;
use jobboard_core::error::AppError;
use jobboard_database::Database;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application on top of an opened store.
pub fn build_app(config: AppConfig, db: Database) -> Result<Router, AppError> {
    let state = AppState::new(config, db)?;
    Ok(build_router(state))
}

/// Runs the HTTP server until Ctrl-C or SIGTERM.
pub async fn run_server(config: AppConfig, db: Database) -> Result<(), AppError> {
    tracing::info!(provider = db.provider(), "Starting job board server...");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = build_app(config, db.clone())?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Job board server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
