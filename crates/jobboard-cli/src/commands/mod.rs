//! CLI command definitions and dispatch.

pub mod admin;
pub mod migrate;
pub mod serve;
pub mod user;

use clap::{Parser, Subcommand};

use jobboard_core::config::AppConfig;
use jobboard_core::error::AppError;
use jobboard_database::Database;

use crate::output::OutputFormat;

/// Job board administration
#[derive(Debug, Parser)]
#[command(name = "jobboard", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Environment overlay (`config/{env}.toml`)
    #[arg(short, long, env = "JOBBOARD_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Superuser management
    Admin(admin::AdminArgs),
    /// User management
    User(user::UserArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load(&self.config, &self.env)?;
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::Admin(args) => admin::execute(args, &config).await,
            Commands::User(args) => user::execute(args, &config, self.format).await,
        }
    }
}

/// Helper: open the configured store
pub async fn open_database(config: &AppConfig) -> Result<Database, AppError> {
    Database::open(&config.database).await
}
