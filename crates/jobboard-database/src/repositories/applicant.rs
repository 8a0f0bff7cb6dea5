//! Applicant profile repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use jobboard_core::error::{AppError, ErrorKind};
use jobboard_core::result::AppResult;
use jobboard_entity::applicant::{ApplicantProfile, CreateApplicantProfile, UpdateApplicantProfile};

use crate::store::ApplicantStore;

/// PostgreSQL-backed applicant profile store.
#[derive(Debug, Clone)]
pub struct ApplicantRepository {
    pool: PgPool,
}

impl ApplicantRepository {
    /// Create a new applicant repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicantStore for ApplicantRepository {
    async fn find_by_user(&self, user_id: i64) -> AppResult<Option<ApplicantProfile>> {
        sqlx::query_as::<_, ApplicantProfile>(
            "SELECT * FROM applicant_profiles WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find applicant", e))
    }

    async fn find_by_job_title(&self, job_title_id: i64) -> AppResult<Vec<ApplicantProfile>> {
        sqlx::query_as::<_, ApplicantProfile>(
            "SELECT * FROM applicant_profiles WHERE applied_for_id = $1 ORDER BY user_id DESC",
        )
        .bind(job_title_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list applicants", e))
    }

    async fn create(&self, data: &CreateApplicantProfile) -> AppResult<ApplicantProfile> {
        sqlx::query_as::<_, ApplicantProfile>(
            "INSERT INTO applicant_profiles (user_id, is_applicant, applied_for_id, cover_letter) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.is_applicant)
        .bind(data.applied_for_id)
        .bind(&data.cover_letter)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::conflict(format!("User {} is already an applicant", data.user_id))
            }
            _ => super::write_error(e, "Failed to create applicant"),
        })
    }

    async fn update(&self, data: &UpdateApplicantProfile) -> AppResult<ApplicantProfile> {
        sqlx::query_as::<_, ApplicantProfile>(
            "UPDATE applicant_profiles SET is_applicant = COALESCE($2, is_applicant), \
                                           applied_for_id = COALESCE($3, applied_for_id), \
                                           cover_letter = COALESCE($4, cover_letter) \
             WHERE user_id = $1 RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.is_applicant)
        .bind(data.applied_for_id)
        .bind(&data.cover_letter)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| super::write_error(e, "Failed to update applicant"))?
        .ok_or_else(|| AppError::not_found(format!("Applicant {} not found", data.user_id)))
    }

    async fn delete(&self, user_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM applicant_profiles WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete applicant", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
