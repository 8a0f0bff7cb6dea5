//! Resolves token keys to active users.

use std::sync::Arc;

use tracing::debug;

use jobboard_core::error::AppError;
use jobboard_database::store::{TokenStore, UserStore};
use jobboard_entity::user::User;

/// Looks up the user behind a presented token key.
#[derive(Debug, Clone)]
pub struct TokenAuthenticator {
    tokens: Arc<dyn TokenStore>,
    users: Arc<dyn UserStore>,
}

impl TokenAuthenticator {
    /// Creates a new authenticator.
    pub fn new(tokens: Arc<dyn TokenStore>, users: Arc<dyn UserStore>) -> Self {
        Self { tokens, users }
    }

    /// Returns the active user owning `key`.
    pub async fn authenticate(&self, key: &str) -> Result<User, AppError> {
        let token = self
            .tokens
            .find_by_key(key)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid token."))?;

        let user = self
            .users
            .find_by_id(token.user_id)
            .await?
            .filter(|u| u.is_active)
            .ok_or_else(|| AppError::authentication("User inactive or deleted."))?;

        debug!(user_id = user.id, "Token authenticated");
        Ok(user)
    }
}
