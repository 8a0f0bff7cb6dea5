//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered account, identified by email.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Primary key.
    pub id: i64,
    /// Unique, normalized email address (login identifier).
    pub email: String,
    /// Display name.
    pub name: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Inactive accounts cannot obtain or use tokens.
    pub is_active: bool,
    /// May access staff tooling.
    pub is_staff: bool,
    /// Holds every permission.
    pub is_superuser: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Normalized email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Initial active flag.
    pub is_active: bool,
    /// Initial staff flag.
    pub is_staff: bool,
    /// Initial superuser flag.
    pub is_superuser: bool,
}

impl CreateUser {
    /// A regular, active, unprivileged account.
    pub fn regular(email: String, name: String, password_hash: String) -> Self {
        Self {
            email,
            name,
            password_hash,
            is_active: true,
            is_staff: false,
            is_superuser: false,
        }
    }
}

/// Data for updating an existing user. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    /// The user ID to update.
    pub id: i64,
    /// New normalized email.
    pub email: Option<String>,
    /// New display name.
    pub name: Option<String>,
    /// New password hash.
    pub password_hash: Option<String>,
    /// New active flag.
    pub is_active: Option<bool>,
}
