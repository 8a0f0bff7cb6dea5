//! Owner-scoped CRUD for job titles, plus the applicants per title.

use std::sync::Arc;

use tracing::{debug, info, warn};

use jobboard_core::error::{AppError, ErrorKind};
use jobboard_core::result::AppResult;
use jobboard_database::store::{
    ApplicantStore, JobDescriptionStore, JobTitleStore, PortalStore, UserStore,
};
use jobboard_entity::applicant::Applicant;
use jobboard_entity::job::{CreateJobTitle, JobTitle, UpdateJobTitle};

use crate::context::RequestContext;
use crate::validation::{FieldErrors, NOT_FOUND, WriteMode, invalid_pk, present};

/// Message reported when a description already backs another title.
pub const DESCRIPTION_TAKEN: &str = "job title with this job description already exists.";

/// Writable job title fields.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct JobTitleInput {
    /// Title text.
    pub title: Option<String>,
    /// Portal id.
    pub portal: Option<i64>,
    /// Job description id.
    pub job_description: Option<i64>,
}

/// Service for the caller's job titles.
#[derive(Debug, Clone)]
pub struct JobTitleService {
    titles: Arc<dyn JobTitleStore>,
    portals: Arc<dyn PortalStore>,
    descriptions: Arc<dyn JobDescriptionStore>,
    applicants: Arc<dyn ApplicantStore>,
    users: Arc<dyn UserStore>,
}

impl JobTitleService {
    /// Creates a new job title service.
    pub fn new(
        titles: Arc<dyn JobTitleStore>,
        portals: Arc<dyn PortalStore>,
        descriptions: Arc<dyn JobDescriptionStore>,
        applicants: Arc<dyn ApplicantStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            titles,
            portals,
            descriptions,
            applicants,
            users,
        }
    }

    /// Lists the caller's titles, newest first.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<JobTitle>> {
        let titles = self.titles.find_by_owner(ctx.user_id).await?;
        debug!(user_id = ctx.user_id, count = titles.len(), "Listed job titles");
        Ok(titles)
    }

    /// Gets one of the caller's titles.
    pub async fn get(&self, ctx: &RequestContext, id: i64) -> AppResult<JobTitle> {
        self.titles
            .find_by_id(id)
            .await?
            .filter(|t| ctx.owns(t.user_id))
            .ok_or_else(|| AppError::not_found(NOT_FOUND))
    }

    /// Creates a title owned by the caller.
    pub async fn create(&self, ctx: &RequestContext, input: JobTitleInput) -> AppResult<JobTitle> {
        self.check(&input, None, WriteMode::Full).await?;
        let data = CreateJobTitle {
            user_id: ctx.user_id,
            title: present("title", input.title)?,
            job_description_id: present("job_description", input.job_description)?,
            portal_id: present("portal", input.portal)?,
        };

        let title = self.titles.create(&data).await.map_err(description_taken)?;
        info!(job_title_id = title.id, user_id = ctx.user_id, "Job title created");
        Ok(title)
    }

    /// Updates one of the caller's titles. The owner never changes.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        input: JobTitleInput,
        mode: WriteMode,
    ) -> AppResult<JobTitle> {
        let existing = self.get(ctx, id).await?;
        self.check(&input, Some(existing.id), mode).await?;

        let title = self
            .titles
            .update(&UpdateJobTitle {
                id: existing.id,
                title: input.title,
                job_description_id: input.job_description,
                portal_id: input.portal,
            })
            .await
            .map_err(description_taken)?;
        debug!(job_title_id = title.id, "Job title updated");
        Ok(title)
    }

    /// Deletes one of the caller's titles and the profiles that applied for it.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        let existing = self.get(ctx, id).await?;
        self.titles.delete(existing.id).await?;
        info!(job_title_id = id, user_id = ctx.user_id, "Job title deleted");
        Ok(())
    }

    /// Lists the applicants for one of the caller's titles.
    pub async fn applicants(&self, ctx: &RequestContext, id: i64) -> AppResult<Vec<Applicant>> {
        let title = self.get(ctx, id).await?;
        let profiles = self.applicants.find_by_job_title(title.id).await?;

        let mut applicants = Vec::with_capacity(profiles.len());
        for profile in profiles {
            match self.users.find_by_id(profile.user_id).await? {
                Some(user) => applicants.push(Applicant { user, profile }),
                None => warn!(user_id = profile.user_id, "Applicant profile without user"),
            }
        }
        Ok(applicants)
    }

    /// Field presence, reference existence, and description uniqueness.
    async fn check(
        &self,
        input: &JobTitleInput,
        title_id: Option<i64>,
        mode: WriteMode,
    ) -> AppResult<()> {
        let mut errors = FieldErrors::new();
        errors.require("title", &input.title, mode);
        errors.require("portal", &input.portal, mode);
        errors.require("job_description", &input.job_description, mode);

        if let Some(portal_id) = input.portal {
            if self.portals.find_by_id(portal_id).await?.is_none() {
                errors.add("portal", invalid_pk(portal_id));
            }
        }
        if let Some(description_id) = input.job_description {
            if self.descriptions.find_by_id(description_id).await?.is_none() {
                errors.add("job_description", invalid_pk(description_id));
            } else if let Some(other) = self.titles.find_by_job_description(description_id).await? {
                if Some(other.id) != title_id {
                    errors.add("job_description", DESCRIPTION_TAKEN);
                }
            }
        }
        errors.into_result()
    }
}

fn description_taken(e: AppError) -> AppError {
    if e.is(ErrorKind::Conflict) {
        AppError::field("job_description", DESCRIPTION_TAKEN)
    } else {
        e
    }
}
