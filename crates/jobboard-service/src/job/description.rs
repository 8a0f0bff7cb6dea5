//! Owner-scoped CRUD for job descriptions.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use jobboard_core::error::AppError;
use jobboard_core::result::AppResult;
use jobboard_database::store::JobDescriptionStore;
use jobboard_entity::job::{CreateJobDescription, JobDescription, UpdateJobDescription};

use crate::context::RequestContext;
use crate::validation::{FieldErrors, NOT_FOUND, WriteMode, present};

/// Writable job description fields.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct JobDescriptionInput {
    /// Role name.
    pub role: Option<String>,
    /// Body text.
    pub description_text: Option<String>,
    /// Publication time; optional even on a full write.
    pub published_date: Option<DateTime<Utc>>,
}

/// Service for the caller's job descriptions.
#[derive(Debug, Clone)]
pub struct JobDescriptionService {
    descriptions: Arc<dyn JobDescriptionStore>,
}

impl JobDescriptionService {
    /// Creates a new job description service.
    pub fn new(descriptions: Arc<dyn JobDescriptionStore>) -> Self {
        Self { descriptions }
    }

    /// Lists the caller's descriptions, newest first.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<JobDescription>> {
        self.descriptions.find_by_owner(ctx.user_id).await
    }

    /// Gets one of the caller's descriptions.
    pub async fn get(&self, ctx: &RequestContext, id: i64) -> AppResult<JobDescription> {
        self.descriptions
            .find_by_id(id)
            .await?
            .filter(|d| ctx.owns(d.user_id))
            .ok_or_else(|| AppError::not_found(NOT_FOUND))
    }

    /// Creates a description owned by the caller.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: JobDescriptionInput,
    ) -> AppResult<JobDescription> {
        check(&input, WriteMode::Full)?;
        let data = CreateJobDescription {
            user_id: ctx.user_id,
            role: present("role", input.role)?,
            description_text: present("description_text", input.description_text)?,
            published_date: input.published_date,
        };

        let description = self.descriptions.create(&data).await?;
        info!(
            job_description_id = description.id,
            user_id = ctx.user_id,
            "Job description created"
        );
        Ok(description)
    }

    /// Updates one of the caller's descriptions.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        input: JobDescriptionInput,
        mode: WriteMode,
    ) -> AppResult<JobDescription> {
        let existing = self.get(ctx, id).await?;
        check(&input, mode)?;

        let description = self
            .descriptions
            .update(&UpdateJobDescription {
                id: existing.id,
                role: input.role,
                description_text: input.description_text,
                published_date: input.published_date,
            })
            .await?;
        debug!(job_description_id = description.id, "Job description updated");
        Ok(description)
    }

    /// Deletes one of the caller's descriptions and the title it backs.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        let existing = self.get(ctx, id).await?;
        self.descriptions.delete(existing.id).await?;
        info!(job_description_id = id, user_id = ctx.user_id, "Job description deleted");
        Ok(())
    }
}

fn check(input: &JobDescriptionInput, mode: WriteMode) -> AppResult<()> {
    let mut errors = FieldErrors::new();
    errors.require("role", &input.role, mode);
    errors.require("description_text", &input.description_text, mode);
    errors.into_result()
}
