//! Job title repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use jobboard_core::error::{AppError, ErrorKind};
use jobboard_core::result::AppResult;
use jobboard_entity::job::{CreateJobTitle, JobTitle, UpdateJobTitle};

use crate::store::JobTitleStore;

const DESCRIPTION_KEY: &str = "job_titles_job_description_id_key";

/// PostgreSQL-backed job title store.
#[derive(Debug, Clone)]
pub struct JobTitleRepository {
    pool: PgPool,
}

impl JobTitleRepository {
    /// Create a new job title repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobTitleStore for JobTitleRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<JobTitle>> {
        sqlx::query_as::<_, JobTitle>("SELECT * FROM job_titles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find job title", e))
    }

    async fn find_by_owner(&self, user_id: i64) -> AppResult<Vec<JobTitle>> {
        sqlx::query_as::<_, JobTitle>(
            "SELECT * FROM job_titles WHERE user_id = $1 ORDER BY id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list job titles", e))
    }

    async fn find_by_job_description(
        &self,
        job_description_id: i64,
    ) -> AppResult<Option<JobTitle>> {
        sqlx::query_as::<_, JobTitle>("SELECT * FROM job_titles WHERE job_description_id = $1")
            .bind(job_description_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to find job title by description",
                    e,
                )
            })
    }

    async fn create(&self, data: &CreateJobTitle) -> AppResult<JobTitle> {
        sqlx::query_as::<_, JobTitle>(
            "INSERT INTO job_titles (user_id, title, job_description_id, portal_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.title)
        .bind(data.job_description_id)
        .bind(data.portal_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some(DESCRIPTION_KEY) => {
                AppError::conflict(format!(
                    "Job description {} already backs a job title",
                    data.job_description_id
                ))
            }
            _ => super::write_error(e, "Failed to create job title"),
        })
    }

    async fn update(&self, data: &UpdateJobTitle) -> AppResult<JobTitle> {
        sqlx::query_as::<_, JobTitle>(
            "UPDATE job_titles SET title = COALESCE($2, title), \
                                   job_description_id = COALESCE($3, job_description_id), \
                                   portal_id = COALESCE($4, portal_id) \
             WHERE id = $1 RETURNING *",
        )
        .bind(data.id)
        .bind(&data.title)
        .bind(data.job_description_id)
        .bind(data.portal_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some(DESCRIPTION_KEY) => {
                AppError::conflict("Job description already backs a job title")
            }
            _ => super::write_error(e, "Failed to update job title"),
        })?
        .ok_or_else(|| AppError::not_found(format!("Job title {} not found", data.id)))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM job_titles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete job title", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
