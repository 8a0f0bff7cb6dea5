//! Job description repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use jobboard_core::error::{AppError, ErrorKind};
use jobboard_core::result::AppResult;
use jobboard_entity::job::{CreateJobDescription, JobDescription, UpdateJobDescription};

use crate::store::JobDescriptionStore;

/// PostgreSQL-backed job description store.
#[derive(Debug, Clone)]
pub struct JobDescriptionRepository {
    pool: PgPool,
}

impl JobDescriptionRepository {
    /// Create a new job description repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobDescriptionStore for JobDescriptionRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<JobDescription>> {
        sqlx::query_as::<_, JobDescription>("SELECT * FROM job_descriptions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find job description", e)
            })
    }

    async fn find_by_owner(&self, user_id: i64) -> AppResult<Vec<JobDescription>> {
        sqlx::query_as::<_, JobDescription>(
            "SELECT * FROM job_descriptions WHERE user_id = $1 ORDER BY id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list job descriptions", e)
        })
    }

    async fn create(&self, data: &CreateJobDescription) -> AppResult<JobDescription> {
        sqlx::query_as::<_, JobDescription>(
            "INSERT INTO job_descriptions (user_id, role, description_text, published_date) \
             VALUES ($1, $2, $3, COALESCE($4, NOW())) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.role)
        .bind(&data.description_text)
        .bind(data.published_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| super::write_error(e, "Failed to create job description"))
    }

    async fn update(&self, data: &UpdateJobDescription) -> AppResult<JobDescription> {
        sqlx::query_as::<_, JobDescription>(
            "UPDATE job_descriptions SET role = COALESCE($2, role), \
                                         description_text = COALESCE($3, description_text), \
                                         published_date = COALESCE($4, published_date) \
             WHERE id = $1 RETURNING *",
        )
        .bind(data.id)
        .bind(&data.role)
        .bind(&data.description_text)
        .bind(data.published_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update job description", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Job description {} not found", data.id)))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM job_descriptions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete job description", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
