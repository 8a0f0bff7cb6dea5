//! Applicant profile entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::user::User;

/// Candidacy data attached to a user, keyed by that user's id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicantProfile {
    /// The applicant's user id (also the primary key).
    pub user_id: i64,
    /// Marks the account as a candidate.
    pub is_applicant: bool,
    /// The job title applied for.
    pub applied_for_id: i64,
    /// Cover letter (at most 150 characters).
    pub cover_letter: String,
}

/// A user together with their applicant profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Applicant {
    /// The account.
    pub user: User,
    /// The candidacy data.
    pub profile: ApplicantProfile,
}

/// Data required to create an applicant profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateApplicantProfile {
    /// The applicant's user id.
    pub user_id: i64,
    /// Candidate flag.
    pub is_applicant: bool,
    /// Job title applied for.
    pub applied_for_id: i64,
    /// Cover letter.
    pub cover_letter: String,
}

/// Data for updating an applicant profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateApplicantProfile {
    /// The applicant's user id.
    pub user_id: i64,
    /// New candidate flag.
    pub is_applicant: Option<bool>,
    /// New job title.
    pub applied_for_id: Option<i64>,
    /// New cover letter.
    pub cover_letter: Option<String>,
}
