//! Superuser management commands.

use std::sync::Arc;

use clap::{Args, Subcommand};

use jobboard_auth::password::{PasswordHasher, PasswordValidator};
use jobboard_core::config::AppConfig;
use jobboard_core::error::AppError;
use jobboard_service::user::UserManager;

use crate::output;

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Create a superuser
    Create {
        /// Email
        #[arg(short, long)]
        email: Option<String>,
        /// Display name
        #[arg(short, long)]
        name: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
}

/// Execute admin commands
pub async fn execute(args: &AdminArgs, config: &AppConfig) -> Result<(), AppError> {
    match &args.command {
        AdminCommand::Create {
            email,
            name,
            password,
        } => {
            let email = match email {
                Some(e) => e.clone(),
                None => prompt("Admin email")?,
            };
            let name = match name {
                Some(n) => n.clone(),
                None => prompt("Display name")?,
            };
            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Admin password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            PasswordValidator::new(&config.auth).validate(&password)?;

            let db = super::open_database(config).await?;
            let hasher = Arc::new(PasswordHasher::new(&config.auth)?);
            let manager = UserManager::new(db.users.clone(), hasher);
            let user = manager.create_superuser(&email, &password, &name).await?;
            db.close().await;

            output::print_success(&format!("Superuser '{}' created", user.email));
            output::print_kv("id", &user.id.to_string());
            output::print_kv("name", &user.name);
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String, AppError> {
    dialoguer::Input::new()
        .with_prompt(label)
        .interact_text()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}
