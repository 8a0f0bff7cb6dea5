//! Portal repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use jobboard_core::error::{AppError, ErrorKind};
use jobboard_core::result::AppResult;
use jobboard_entity::portal::{CreatePortal, Portal, UpdatePortal};

use crate::store::PortalStore;

/// PostgreSQL-backed portal store.
#[derive(Debug, Clone)]
pub struct PortalRepository {
    pool: PgPool,
}

impl PortalRepository {
    /// Create a new portal repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortalStore for PortalRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Portal>> {
        sqlx::query_as::<_, Portal>("SELECT * FROM portals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find portal", e))
    }

    async fn find_by_owner(&self, user_id: i64) -> AppResult<Vec<Portal>> {
        sqlx::query_as::<_, Portal>("SELECT * FROM portals WHERE user_id = $1 ORDER BY id DESC")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list portals", e))
    }

    async fn create(&self, data: &CreatePortal) -> AppResult<Portal> {
        sqlx::query_as::<_, Portal>(
            "INSERT INTO portals (user_id, name, description) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.name)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("portals_name_key") => {
                AppError::conflict(format!("Portal '{}' already exists", data.name))
            }
            _ => super::write_error(e, "Failed to create portal"),
        })
    }

    async fn update(&self, data: &UpdatePortal) -> AppResult<Portal> {
        sqlx::query_as::<_, Portal>(
            "UPDATE portals SET name = COALESCE($2, name), \
                                description = COALESCE($3, description) \
             WHERE id = $1 RETURNING *",
        )
        .bind(data.id)
        .bind(&data.name)
        .bind(&data.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("portals_name_key") => {
                AppError::conflict("Portal name already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update portal", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Portal {} not found", data.id)))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM portals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete portal", e))?;
        Ok(result.rows_affected() > 0)
    }
}
