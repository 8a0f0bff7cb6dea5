//! In-memory portal, job description, and job title stores.

use async_trait::async_trait;
use chrono::Utc;

use jobboard_core::error::AppError;
use jobboard_core::result::AppResult;
use jobboard_entity::job::{
    CreateJobDescription, CreateJobTitle, JobDescription, JobTitle, UpdateJobDescription,
    UpdateJobTitle,
};
use jobboard_entity::portal::{CreatePortal, Portal, UpdatePortal};

use super::{MemoryStore, Sequences, Tables, newest_first};
use crate::store::{JobDescriptionStore, JobTitleStore, PortalStore};

#[async_trait]
impl PortalStore for MemoryStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Portal>> {
        Ok(self.tables.read().await.portals.get(&id).cloned())
    }

    async fn find_by_owner(&self, user_id: i64) -> AppResult<Vec<Portal>> {
        let tables = self.tables.read().await;
        Ok(newest_first(&tables.portals, user_id, |p| p.user_id))
    }

    async fn create(&self, data: &CreatePortal) -> AppResult<Portal> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&data.user_id) {
            return Err(AppError::validation(format!(
                "User {} does not exist",
                data.user_id
            )));
        }
        if tables.portals.values().any(|p| p.name == data.name) {
            return Err(AppError::conflict(format!(
                "Portal '{}' already exists",
                data.name
            )));
        }

        let portal = Portal {
            id: Sequences::next(&mut tables.sequences.portals),
            user_id: data.user_id,
            name: data.name.clone(),
            description: data.description.clone(),
        };
        tables.portals.insert(portal.id, portal.clone());
        Ok(portal)
    }

    async fn update(&self, data: &UpdatePortal) -> AppResult<Portal> {
        let mut tables = self.tables.write().await;
        if let Some(name) = &data.name {
            if tables
                .portals
                .values()
                .any(|p| p.id != data.id && &p.name == name)
            {
                return Err(AppError::conflict("Portal name already exists"));
            }
        }

        let portal = tables
            .portals
            .get_mut(&data.id)
            .ok_or_else(|| AppError::not_found(format!("Portal {} not found", data.id)))?;
        if let Some(name) = &data.name {
            portal.name = name.clone();
        }
        if let Some(description) = &data.description {
            portal.description = description.clone();
        }
        Ok(portal.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.tables.write().await.remove_portal(id))
    }
}

#[async_trait]
impl JobDescriptionStore for MemoryStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<JobDescription>> {
        Ok(self.tables.read().await.descriptions.get(&id).cloned())
    }

    async fn find_by_owner(&self, user_id: i64) -> AppResult<Vec<JobDescription>> {
        let tables = self.tables.read().await;
        Ok(newest_first(&tables.descriptions, user_id, |d| d.user_id))
    }

    async fn create(&self, data: &CreateJobDescription) -> AppResult<JobDescription> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&data.user_id) {
            return Err(AppError::validation(format!(
                "User {} does not exist",
                data.user_id
            )));
        }

        let description = JobDescription {
            id: Sequences::next(&mut tables.sequences.descriptions),
            user_id: data.user_id,
            role: data.role.clone(),
            description_text: data.description_text.clone(),
            published_date: data.published_date.unwrap_or_else(Utc::now),
        };
        tables
            .descriptions
            .insert(description.id, description.clone());
        Ok(description)
    }

    async fn update(&self, data: &UpdateJobDescription) -> AppResult<JobDescription> {
        let mut tables = self.tables.write().await;
        let description = tables
            .descriptions
            .get_mut(&data.id)
            .ok_or_else(|| AppError::not_found(format!("Job description {} not found", data.id)))?;
        if let Some(role) = &data.role {
            description.role = role.clone();
        }
        if let Some(text) = &data.description_text {
            description.description_text = text.clone();
        }
        if let Some(date) = data.published_date {
            description.published_date = date;
        }
        Ok(description.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.tables.write().await.remove_description(id))
    }
}

/// Reference and uniqueness checks shared by title create and update.
fn check_title_links(
    tables: &Tables,
    title_id: Option<i64>,
    job_description_id: Option<i64>,
    portal_id: Option<i64>,
) -> AppResult<()> {
    if let Some(portal_id) = portal_id {
        if !tables.portals.contains_key(&portal_id) {
            return Err(AppError::validation(format!(
                "Portal {portal_id} does not exist"
            )));
        }
    }
    if let Some(description_id) = job_description_id {
        if !tables.descriptions.contains_key(&description_id) {
            return Err(AppError::validation(format!(
                "Job description {description_id} does not exist"
            )));
        }
        if tables
            .titles
            .values()
            .any(|t| t.job_description_id == description_id && Some(t.id) != title_id)
        {
            return Err(AppError::conflict(format!(
                "Job description {description_id} already backs a job title"
            )));
        }
    }
    Ok(())
}

#[async_trait]
impl JobTitleStore for MemoryStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<JobTitle>> {
        Ok(self.tables.read().await.titles.get(&id).cloned())
    }

    async fn find_by_owner(&self, user_id: i64) -> AppResult<Vec<JobTitle>> {
        let tables = self.tables.read().await;
        Ok(newest_first(&tables.titles, user_id, |t| t.user_id))
    }

    async fn find_by_job_description(
        &self,
        job_description_id: i64,
    ) -> AppResult<Option<JobTitle>> {
        let tables = self.tables.read().await;
        Ok(tables
            .titles
            .values()
            .find(|t| t.job_description_id == job_description_id)
            .cloned())
    }

    async fn create(&self, data: &CreateJobTitle) -> AppResult<JobTitle> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&data.user_id) {
            return Err(AppError::validation(format!(
                "User {} does not exist",
                data.user_id
            )));
        }
        check_title_links(
            &tables,
            None,
            Some(data.job_description_id),
            Some(data.portal_id),
        )?;

        let title = JobTitle {
            id: Sequences::next(&mut tables.sequences.titles),
            user_id: data.user_id,
            title: data.title.clone(),
            last_updated: Utc::now(),
            job_description_id: data.job_description_id,
            portal_id: data.portal_id,
        };
        tables.titles.insert(title.id, title.clone());
        Ok(title)
    }

    async fn update(&self, data: &UpdateJobTitle) -> AppResult<JobTitle> {
        let mut tables = self.tables.write().await;
        if !tables.titles.contains_key(&data.id) {
            return Err(AppError::not_found(format!(
                "Job title {} not found",
                data.id
            )));
        }
        check_title_links(
            &tables,
            Some(data.id),
            data.job_description_id,
            data.portal_id,
        )?;

        let title = tables
            .titles
            .get_mut(&data.id)
            .ok_or_else(|| AppError::not_found(format!("Job title {} not found", data.id)))?;
        if let Some(value) = &data.title {
            title.title = value.clone();
        }
        if let Some(description_id) = data.job_description_id {
            title.job_description_id = description_id;
        }
        if let Some(portal_id) = data.portal_id {
            title.portal_id = portal_id;
        }
        Ok(title.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.tables.write().await.remove_title(id))
    }
}
