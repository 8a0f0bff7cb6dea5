//! Start the job board server.

use clap::Args;

use jobboard_core::config::AppConfig;
use jobboard_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Run database migrations on startup
    #[arg(long)]
    pub auto_migrate: Option<bool>,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(auto_migrate) = args.auto_migrate {
        config.database.auto_migrate = auto_migrate;
    }

    println!("Starting job board server...");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);
    println!("  Store: {}", config.database.provider);

    let db = super::open_database(&config).await?;
    jobboard_api::run_server(config, db).await
}
