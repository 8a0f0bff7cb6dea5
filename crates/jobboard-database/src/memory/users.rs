//! In-memory user store.

use async_trait::async_trait;
use chrono::Utc;

use jobboard_core::error::AppError;
use jobboard_core::result::AppResult;
use jobboard_entity::user::{CreateUser, UpdateUser, User};

use super::{MemoryStore, Sequences};
use crate::store::UserStore;

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.tables.read().await.users.values().cloned().collect())
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == data.email) {
            return Err(AppError::conflict("Email already in use"));
        }

        let now = Utc::now();
        let user = User {
            id: Sequences::next(&mut tables.sequences.users),
            email: data.email.clone(),
            name: data.name.clone(),
            password_hash: data.password_hash.clone(),
            is_active: data.is_active,
            is_staff: data.is_staff,
            is_superuser: data.is_superuser,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, data: &UpdateUser) -> AppResult<User> {
        let mut tables = self.tables.write().await;
        if let Some(email) = &data.email {
            if tables
                .users
                .values()
                .any(|u| u.id != data.id && &u.email == email)
            {
                return Err(AppError::conflict("Email already in use"));
            }
        }

        let user = tables
            .users
            .get_mut(&data.id)
            .ok_or_else(|| AppError::not_found(format!("User {} not found", data.id)))?;
        if let Some(email) = &data.email {
            user.email = email.clone();
        }
        if let Some(name) = &data.name {
            user.name = name.clone();
        }
        if let Some(hash) = &data.password_hash {
            user.password_hash = hash.clone();
        }
        if let Some(active) = data.is_active {
            user.is_active = active;
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.tables.write().await.remove_user(id))
    }
}
