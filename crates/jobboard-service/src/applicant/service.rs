//! CRUD over the applicant profile attached to the caller's account.
//!
//! A profile shares its identifier with the user it extends, so the only
//! row a caller can ever see here is the one whose id equals their own.

use std::sync::Arc;

use tracing::{debug, info};

use jobboard_core::error::{AppError, ErrorKind};
use jobboard_core::result::AppResult;
use jobboard_database::store::{ApplicantStore, JobTitleStore, UserStore};
use jobboard_entity::applicant::{Applicant, CreateApplicantProfile, UpdateApplicantProfile};

use crate::context::RequestContext;
use crate::validation::{FieldErrors, NOT_FOUND, WriteMode, invalid_pk, present};

const ALREADY_APPLICANT: &str = "applicant with this user already exists.";

/// Writable applicant fields.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ApplicantInput {
    /// Candidate flag; defaults to `true` on create.
    pub is_applicant: Option<bool>,
    /// Job title id applied for.
    pub applied_for: Option<i64>,
    /// Cover letter.
    pub cover_letter: Option<String>,
}

/// Service for the caller's applicant profile.
#[derive(Debug, Clone)]
pub struct ApplicantService {
    applicants: Arc<dyn ApplicantStore>,
    titles: Arc<dyn JobTitleStore>,
    users: Arc<dyn UserStore>,
}

impl ApplicantService {
    /// Creates a new applicant service.
    pub fn new(
        applicants: Arc<dyn ApplicantStore>,
        titles: Arc<dyn JobTitleStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            applicants,
            titles,
            users,
        }
    }

    /// Lists the caller's profile: zero or one entries.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<Applicant>> {
        match self.get(ctx, ctx.user_id).await {
            Ok(applicant) => Ok(vec![applicant]),
            Err(e) if e.is(ErrorKind::NotFound) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    /// Gets the profile `id`, which must be the caller's own.
    pub async fn get(&self, ctx: &RequestContext, id: i64) -> AppResult<Applicant> {
        if !ctx.owns(id) {
            return Err(AppError::not_found(NOT_FOUND));
        }
        let profile = self
            .applicants
            .find_by_user(id)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND))?;
        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND))?;
        Ok(Applicant { user, profile })
    }

    /// Attaches a profile to the caller's account.
    pub async fn create(&self, ctx: &RequestContext, input: ApplicantInput) -> AppResult<Applicant> {
        self.check(&input, WriteMode::Full).await?;
        let data = CreateApplicantProfile {
            user_id: ctx.user_id,
            is_applicant: input.is_applicant.unwrap_or(true),
            applied_for_id: present("applied_for", input.applied_for)?,
            cover_letter: present("cover_letter", input.cover_letter)?,
        };

        self.applicants.create(&data).await.map_err(|e| {
            if e.is(ErrorKind::Conflict) {
                AppError::field("user", ALREADY_APPLICANT)
            } else {
                e
            }
        })?;
        info!(
            user_id = ctx.user_id,
            job_title_id = data.applied_for_id,
            "Applicant profile created"
        );
        self.get(ctx, ctx.user_id).await
    }

    /// Updates the caller's profile.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        input: ApplicantInput,
        mode: WriteMode,
    ) -> AppResult<Applicant> {
        let existing = self.get(ctx, id).await?;
        self.check(&input, mode).await?;

        self.applicants
            .update(&UpdateApplicantProfile {
                user_id: existing.profile.user_id,
                is_applicant: input.is_applicant,
                applied_for_id: input.applied_for,
                cover_letter: input.cover_letter,
            })
            .await?;
        debug!(user_id = id, "Applicant profile updated");
        self.get(ctx, id).await
    }

    /// Removes the caller's profile. The account itself is kept.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        let existing = self.get(ctx, id).await?;
        self.applicants.delete(existing.profile.user_id).await?;
        info!(user_id = id, "Applicant profile deleted");
        Ok(())
    }

    async fn check(&self, input: &ApplicantInput, mode: WriteMode) -> AppResult<()> {
        let mut errors = FieldErrors::new();
        errors.require("applied_for", &input.applied_for, mode);
        errors.require("cover_letter", &input.cover_letter, mode);
        if let Some(title_id) = input.applied_for {
            if self.titles.find_by_id(title_id).await?.is_none() {
                errors.add("applied_for", invalid_pk(title_id));
            }
        }
        errors.into_result()
    }
}
