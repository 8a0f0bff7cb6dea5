//! Job board server.
//!
//! Loads configuration, initializes logging, opens the configured store,
//! and serves the HTTP API until Ctrl-C or SIGTERM.

use tracing_subscriber::{EnvFilter, fmt};

use jobboard_core::config::AppConfig;
use jobboard_core::error::AppError;
use jobboard_database::Database;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file, environment overlay, and env vars
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("JOBBOARD_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());
    let env = std::env::var("JOBBOARD_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load(&config_path, &env)
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

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting job board v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!(provider = %config.database.provider, "Opening store...");
    let db = Database::open(&config.database).await?;
    tracing::info!("Store ready");

    jobboard_api::run_server(config, db).await
}
