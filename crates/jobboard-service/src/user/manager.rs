//! Account creation rules shared by sign-up and the admin CLI.

use std::sync::Arc;

use tracing::info;

use jobboard_auth::password::PasswordHasher;
use jobboard_core::error::{AppError, ErrorKind};
use jobboard_core::result::AppResult;
use jobboard_database::store::UserStore;
use jobboard_entity::user::{CreateUser, User, normalize_email};

/// Message reported when an email is already registered.
pub const EMAIL_TAKEN: &str = "user with this email already exists.";

/// Creates accounts with a normalized email and a hashed password.
#[derive(Debug, Clone)]
pub struct UserManager {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
}

impl UserManager {
    /// Creates a new user manager.
    pub fn new(users: Arc<dyn UserStore>, hasher: Arc<PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    /// Creates a regular, active account.
    pub async fn create_user(&self, email: &str, password: &str, name: &str) -> AppResult<User> {
        self.create(email, password, name, false).await
    }

    /// Creates an account with the staff and superuser flags set.
    pub async fn create_superuser(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> AppResult<User> {
        self.create(email, password, name, true).await
    }

    async fn create(
        &self,
        email: &str,
        password: &str,
        name: &str,
        privileged: bool,
    ) -> AppResult<User> {
        if email.trim().is_empty() {
            return Err(AppError::field("email", "Users must have an email address"));
        }

        let email = normalize_email(email);
        let password_hash = self.hasher.hash_password(password)?;

        let mut data = CreateUser::regular(email, name.to_string(), password_hash);
        data.is_staff = privileged;
        data.is_superuser = privileged;

        let user = self.users.create(&data).await.map_err(|e| {
            if e.is(ErrorKind::Conflict) {
                AppError::field("email", EMAIL_TAKEN)
            } else {
                e
            }
        })?;

        info!(
            user_id = user.id,
            is_superuser = user.is_superuser,
            "User created"
        );
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;
    use jobboard_database::Database;

    fn manager(db: &Database) -> UserManager {
        UserManager::new(db.users.clone(), testing::hasher())
    }

    #[tokio::test]
    async fn test_create_user_stores_hash() {
        let db = Database::in_memory();
        let user = manager(&db)
            .create_user("test@example.com", "testpass123", "Test")
            .await
            .unwrap();
        assert_eq!(user.email, "test@example.com");
        assert_ne!(user.password_hash, "testpass123");
        assert!(testing::hasher()
            .verify_password("testpass123", &user.password_hash)
            .unwrap());
        assert!(user.is_active);
        assert!(!user.is_staff);
    }

    #[tokio::test]
    async fn test_email_domain_normalized() {
        let db = Database::in_memory();
        let user = manager(&db)
            .create_user("ADMIN3@GMAIl.COM", "test123", "Admin")
            .await
            .unwrap();
        assert_eq!(user.email, "ADMIN3@gmail.com");
    }

    #[tokio::test]
    async fn test_empty_email_rejected() {
        let db = Database::in_memory();
        let err = manager(&db)
            .create_user("", "test123", "Nobody")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(db.users.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_superuser_flags() {
        let db = Database::in_memory();
        let user = manager(&db)
            .create_superuser("root@example.com", "test123", "Root")
            .await
            .unwrap();
        assert!(user.is_staff);
        assert!(user.is_superuser);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_field_error() {
        let db = Database::in_memory();
        let manager = manager(&db);
        manager
            .create_user("dup@Example.com", "test123", "One")
            .await
            .unwrap();
        let err = manager
            .create_user("dup@EXAMPLE.COM", "test123", "Two")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(
            err.details,
            Some(serde_json::json!({"email": [EMAIL_TAKEN]}))
        );
    }
}
