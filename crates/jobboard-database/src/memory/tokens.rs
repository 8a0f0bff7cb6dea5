//! In-memory token store.

use async_trait::async_trait;
use chrono::Utc;

use jobboard_core::error::AppError;
use jobboard_core::result::AppResult;
use jobboard_entity::token::AuthToken;

use super::MemoryStore;
use crate::store::TokenStore;

#[async_trait]
impl TokenStore for MemoryStore {
    async fn find_by_key(&self, key: &str) -> AppResult<Option<AuthToken>> {
        Ok(self.tables.read().await.tokens.get(key).cloned())
    }

    async fn find_by_user(&self, user_id: i64) -> AppResult<Option<AuthToken>> {
        let tables = self.tables.read().await;
        Ok(tables.tokens.values().find(|t| t.user_id == user_id).cloned())
    }

    async fn create(&self, user_id: i64, key: &str) -> AppResult<AuthToken> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&user_id) {
            return Err(AppError::validation(format!("User {user_id} does not exist")));
        }
        if tables.tokens.contains_key(key) || tables.tokens.values().any(|t| t.user_id == user_id)
        {
            return Err(AppError::conflict(format!("User {user_id} already has a token")));
        }

        let token = AuthToken {
            key: key.to_string(),
            user_id,
            created_at: Utc::now(),
        };
        tables.tokens.insert(token.key.clone(), token.clone());
        Ok(token)
    }
}
