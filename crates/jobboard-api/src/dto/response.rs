//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use jobboard_entity::applicant::Applicant;
use jobboard_entity::job::{JobDescription, JobTitle};
use jobboard_entity::portal::Portal;
use jobboard_entity::token::AuthToken;
use jobboard_entity::user::User;

/// Public account fields. The password is write-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// Email.
    pub email: String,
    /// Display name.
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            email: user.email,
            name: user.name,
        }
    }
}

/// Token response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Opaque key for `Authorization: Token <key>`.
    pub token: String,
}

impl From<AuthToken> for TokenResponse {
    fn from(token: AuthToken) -> Self {
        Self { token: token.key }
    }
}

/// Portal representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl From<Portal> for PortalResponse {
    fn from(portal: Portal) -> Self {
        Self {
            id: portal.id,
            name: portal.name,
            description: portal.description,
        }
    }
}

/// Job description representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDescriptionResponse {
    pub id: i64,
    pub role: String,
    pub description_text: String,
    pub published_date: DateTime<Utc>,
}

impl From<JobDescription> for JobDescriptionResponse {
    fn from(description: JobDescription) -> Self {
        Self {
            id: description.id,
            role: description.role,
            description_text: description.description_text,
            published_date: description.published_date,
        }
    }
}

/// Job title list representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobTitleSummary {
    /// Job title ID.
    pub id: i64,
    /// Title text.
    pub title: String,
}

impl From<&JobTitle> for JobTitleSummary {
    fn from(title: &JobTitle) -> Self {
        Self {
            id: title.id,
            title: title.title.clone(),
        }
    }
}

/// Job title detail representation: the summary plus its two references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobTitleDetail {
    #[serde(flatten)]
    pub summary: JobTitleSummary,
    /// Backing job description ID.
    pub job_description: i64,
    /// Portal ID.
    pub portal: i64,
}

impl From<JobTitle> for JobTitleDetail {
    fn from(title: JobTitle) -> Self {
        Self {
            summary: JobTitleSummary::from(&title),
            job_description: title.job_description_id,
            portal: title.portal_id,
        }
    }
}

/// Applicant representation; `id` is the user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantResponse {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub is_applicant: bool,
    pub applied_for: i64,
    pub cover_letter: String,
}

impl From<Applicant> for ApplicantResponse {
    fn from(applicant: Applicant) -> Self {
        Self {
            id: applicant.user.id,
            email: applicant.user.email,
            name: applicant.user.name,
            is_applicant: applicant.profile.is_applicant,
            applied_for: applicant.profile.applied_for_id,
            cover_letter: applicant.profile.cover_letter,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Active store provider and its reachability.
    pub database: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title() -> JobTitle {
        JobTitle {
            id: 7,
            user_id: 1,
            title: "Developer".to_string(),
            last_updated: Utc::now(),
            job_description_id: 3,
            portal_id: 4,
        }
    }

    #[test]
    fn test_summary_fields() {
        let json = serde_json::to_value(JobTitleSummary::from(&title())).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "title": "Developer"}));
    }

    #[test]
    fn test_detail_extends_summary() {
        let json = serde_json::to_value(JobTitleDetail::from(title())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "title": "Developer",
                "job_description": 3,
                "portal": 4,
            })
        );
    }
}
