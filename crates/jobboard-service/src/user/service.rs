//! Sign-up and self-service profile operations.

use std::sync::Arc;

use tracing::info;

use jobboard_auth::password::{PasswordHasher, PasswordValidator};
use jobboard_core::error::{AppError, ErrorKind};
use jobboard_core::result::AppResult;
use jobboard_database::store::UserStore;
use jobboard_entity::user::{UpdateUser, User, normalize_email};

use super::manager::{EMAIL_TAKEN, UserManager};
use crate::context::RequestContext;
use crate::validation::{FieldErrors, WriteMode};

/// Sign-up payload.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterUser {
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Display name.
    pub name: String,
}

/// Changes a caller may make to their own account.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ProfileChanges {
    /// New email.
    pub email: Option<String>,
    /// New display name.
    pub name: Option<String>,
    /// New plaintext password.
    pub password: Option<String>,
}

/// Handles sign-up and the `/me` resource.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    manager: Arc<UserManager>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn UserStore>,
        manager: Arc<UserManager>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            users,
            manager,
            hasher,
            validator,
        }
    }

    /// Registers a new account after applying the password policy.
    pub async fn register(&self, req: RegisterUser) -> AppResult<User> {
        self.validator.validate(&req.password)?;
        self.manager
            .create_user(&req.email, &req.password, &req.name)
            .await
    }

    /// Gets the caller's account.
    pub async fn get_profile(&self, ctx: &RequestContext) -> AppResult<User> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Updates the caller's account. A new password is hashed again.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        changes: ProfileChanges,
        mode: WriteMode,
    ) -> AppResult<User> {
        let mut errors = FieldErrors::new();
        errors.require("email", &changes.email, mode);
        errors.require("name", &changes.name, mode);
        errors.require("password", &changes.password, mode);
        if let Some(email) = &changes.email {
            if email.trim().is_empty() {
                errors.add("email", "This field may not be blank.");
            }
        }
        errors.into_result()?;

        let password_hash = match &changes.password {
            Some(password) => {
                self.validator.validate(password)?;
                Some(self.hasher.hash_password(password)?)
            }
            None => None,
        };

        let update = UpdateUser {
            id: ctx.user_id,
            email: changes.email.as_deref().map(normalize_email),
            name: changes.name,
            password_hash,
            is_active: None,
        };

        let user = self.users.update(&update).await.map_err(|e| {
            if e.is(ErrorKind::Conflict) {
                AppError::field("email", EMAIL_TAKEN)
            } else {
                e
            }
        })?;

        info!(
            user_id = ctx.user_id,
            password_changed = update.password_hash.is_some(),
            "Profile updated"
        );
        Ok(user)
    }
}
