//! In-memory applicant profile store.

use async_trait::async_trait;

use jobboard_core::error::AppError;
use jobboard_core::result::AppResult;
use jobboard_entity::applicant::{ApplicantProfile, CreateApplicantProfile, UpdateApplicantProfile};

use super::MemoryStore;
use crate::store::ApplicantStore;

#[async_trait]
impl ApplicantStore for MemoryStore {
    async fn find_by_user(&self, user_id: i64) -> AppResult<Option<ApplicantProfile>> {
        Ok(self.tables.read().await.applicants.get(&user_id).cloned())
    }

    async fn find_by_job_title(&self, job_title_id: i64) -> AppResult<Vec<ApplicantProfile>> {
        let tables = self.tables.read().await;
        Ok(tables
            .applicants
            .values()
            .rev()
            .filter(|a| a.applied_for_id == job_title_id)
            .cloned()
            .collect())
    }

    async fn create(&self, data: &CreateApplicantProfile) -> AppResult<ApplicantProfile> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&data.user_id) {
            return Err(AppError::validation(format!(
                "User {} does not exist",
                data.user_id
            )));
        }
        if !tables.titles.contains_key(&data.applied_for_id) {
            return Err(AppError::validation(format!(
                "Job title {} does not exist",
                data.applied_for_id
            )));
        }
        if tables.applicants.contains_key(&data.user_id) {
            return Err(AppError::conflict(format!(
                "User {} is already an applicant",
                data.user_id
            )));
        }

        let profile = ApplicantProfile {
            user_id: data.user_id,
            is_applicant: data.is_applicant,
            applied_for_id: data.applied_for_id,
            cover_letter: data.cover_letter.clone(),
        };
        tables.applicants.insert(profile.user_id, profile.clone());
        Ok(profile)
    }

    async fn update(&self, data: &UpdateApplicantProfile) -> AppResult<ApplicantProfile> {
        let mut tables = self.tables.write().await;
        if let Some(title_id) = data.applied_for_id {
            if !tables.titles.contains_key(&title_id) {
                return Err(AppError::validation(format!(
                    "Job title {title_id} does not exist"
                )));
            }
        }

        let profile = tables
            .applicants
            .get_mut(&data.user_id)
            .ok_or_else(|| AppError::not_found(format!("Applicant {} not found", data.user_id)))?;
        if let Some(flag) = data.is_applicant {
            profile.is_applicant = flag;
        }
        if let Some(title_id) = data.applied_for_id {
            profile.applied_for_id = title_id;
        }
        if let Some(letter) = &data.cover_letter {
            profile.cover_letter = letter.clone();
        }
        Ok(profile.clone())
    }

    async fn delete(&self, user_id: i64) -> AppResult<bool> {
        Ok(self
            .tables
            .write()
            .await
            .applicants
            .remove(&user_id)
            .is_some())
    }
}
