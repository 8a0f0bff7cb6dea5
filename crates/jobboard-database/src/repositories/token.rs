//! Authentication token repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use jobboard_core::error::{AppError, ErrorKind};
use jobboard_core::result::AppResult;
use jobboard_entity::token::AuthToken;

use crate::store::TokenStore;

/// PostgreSQL-backed token store.
#[derive(Debug, Clone)]
pub struct TokenRepository {
    pool: PgPool,
}

impl TokenRepository {
    /// Create a new token repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenStore for TokenRepository {
    async fn find_by_key(&self, key: &str) -> AppResult<Option<AuthToken>> {
        sqlx::query_as::<_, AuthToken>("SELECT * FROM auth_tokens WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find token", e))
    }

    async fn find_by_user(&self, user_id: i64) -> AppResult<Option<AuthToken>> {
        sqlx::query_as::<_, AuthToken>("SELECT * FROM auth_tokens WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find token by user", e)
            })
    }

    async fn create(&self, user_id: i64, key: &str) -> AppResult<AuthToken> {
        sqlx::query_as::<_, AuthToken>(
            "INSERT INTO auth_tokens (key, user_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(key)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::conflict(format!("User {user_id} already has a token"))
            }
            _ => super::write_error(e, "Failed to create token"),
        })
    }
}
