//! User management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use jobboard_core::config::AppConfig;
use jobboard_core::error::AppError;
use jobboard_entity::user::{User, normalize_email};

use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List all users
    List,
    /// Delete a user and everything they own
    Delete {
        /// Email of the user
        email: String,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: i64,
    email: String,
    name: String,
    active: bool,
    staff: bool,
    superuser: bool,
    created_at: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            email: u.email.clone(),
            name: u.name.clone(),
            active: u.is_active,
            staff: u.is_staff,
            superuser: u.is_superuser,
            created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let db = super::open_database(config).await?;

    match &args.command {
        UserCommand::List => {
            let users = db.users.find_all().await?;
            let rows: Vec<UserRow> = users.iter().map(UserRow::from).collect();
            output::print_list(&rows, format);
        }
        UserCommand::Delete { email, force } => {
            let user = db
                .users
                .find_by_email(&normalize_email(email))
                .await?
                .ok_or_else(|| AppError::not_found(format!("User '{email}' not found")))?;

            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!(
                        "Delete '{}' with all of their portals, descriptions and titles?",
                        user.email
                    ))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;
                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            db.users.delete(user.id).await?;
            tracing::info!(user_id = user.id, "User deleted from CLI");
            output::print_success(&format!("User '{}' deleted", user.email));
        }
    }

    db.close().await;
    Ok(())
}
