//! Request DTOs with validation.
//!
//! Every field is optional at the JSON layer; presence rules depend on
//! the write mode (POST/PUT versus PATCH) and are applied by the services.
//! Resource payloads accept a `user` field for compatibility. It is never
//! used as the owner.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use jobboard_service::applicant::ApplicantInput;
use jobboard_service::job::{JobDescriptionInput, JobTitleInput};
use jobboard_service::portal::PortalInput;
use jobboard_service::user::ProfileChanges;

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed("This field may not be blank.")));
    }
    Ok(())
}

/// Sign-up request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Email.
    #[validate(
        email(message = "Enter a valid email address."),
        length(min = 5, max = 254, message = "Ensure this field has between 5 and 254 characters.")
    )]
    pub email: Option<String>,
    /// Password; the minimum length is checked against configuration.
    #[validate(custom(function = "not_blank"))]
    pub password: Option<String>,
    /// Display name.
    #[validate(length(min = 1, max = 251, message = "Ensure this field has between 1 and 251 characters."))]
    pub name: Option<String>,
}

/// Token request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ObtainTokenRequest {
    /// Email.
    #[validate(email(message = "Enter a valid email address."))]
    pub email: Option<String>,
    /// Password, taken verbatim; only the empty string is blank.
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub password: Option<String>,
}

/// `/me` update body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateMeRequest {
    /// New email.
    #[validate(
        email(message = "Enter a valid email address."),
        length(max = 254, message = "Ensure this field has no more than 254 characters.")
    )]
    pub email: Option<String>,
    /// New display name.
    #[validate(length(min = 1, max = 251, message = "Ensure this field has between 1 and 251 characters."))]
    pub name: Option<String>,
    /// New password.
    #[validate(custom(function = "not_blank"))]
    pub password: Option<String>,
}

impl From<UpdateMeRequest> for ProfileChanges {
    fn from(req: UpdateMeRequest) -> Self {
        Self {
            email: req.email,
            name: req.name,
            password: req.password,
        }
    }
}

/// Portal create/update body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PortalRequest {
    /// Portal name.
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "Ensure this field has no more than 100 characters.")
    )]
    pub name: Option<String>,
    /// Description.
    #[validate(length(max = 250, message = "Ensure this field has no more than 250 characters."))]
    pub description: Option<String>,
    /// Ignored owner field.
    pub user: Option<serde_json::Value>,
}

impl From<PortalRequest> for PortalInput {
    fn from(req: PortalRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

/// Job description create/update body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct JobDescriptionRequest {
    /// Role name.
    #[validate(
        custom(function = "not_blank"),
        length(max = 50, message = "Ensure this field has no more than 50 characters.")
    )]
    pub role: Option<String>,
    /// Body text.
    #[validate(length(max = 250, message = "Ensure this field has no more than 250 characters."))]
    pub description_text: Option<String>,
    /// Publication time.
    pub published_date: Option<DateTime<Utc>>,
    /// Ignored owner field.
    pub user: Option<serde_json::Value>,
}

impl From<JobDescriptionRequest> for JobDescriptionInput {
    fn from(req: JobDescriptionRequest) -> Self {
        Self {
            role: req.role,
            description_text: req.description_text,
            published_date: req.published_date,
        }
    }
}

/// Job title create/update body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct JobTitleRequest {
    /// Title.
    #[validate(
        custom(function = "not_blank"),
        length(max = 25, message = "Ensure this field has no more than 25 characters.")
    )]
    pub title: Option<String>,
    /// Portal id.
    pub portal: Option<i64>,
    /// Job description id.
    pub job_description: Option<i64>,
    /// Ignored owner field.
    pub user: Option<serde_json::Value>,
}

impl From<JobTitleRequest> for JobTitleInput {
    fn from(req: JobTitleRequest) -> Self {
        Self {
            title: req.title,
            portal: req.portal,
            job_description: req.job_description,
        }
    }
}

/// Applicant profile create/update body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ApplicantRequest {
    /// Candidate flag.
    pub is_applicant: Option<bool>,
    /// Job title id.
    pub applied_for: Option<i64>,
    /// Cover letter.
    #[validate(length(max = 150, message = "Ensure this field has no more than 150 characters."))]
    pub cover_letter: Option<String>,
    /// Ignored owner field.
    pub user: Option<serde_json::Value>,
}

impl From<ApplicantRequest> for ApplicantInput {
    fn from(req: ApplicantRequest) -> Self {
        Self {
            is_applicant: req.is_applicant,
            applied_for: req.applied_for,
            cover_letter: req.cover_letter,
        }
    }
}
