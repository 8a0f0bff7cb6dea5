//! Job title entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A posting combining one job description with one portal.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobTitle {
    /// Primary key.
    pub id: i64,
    /// Owner.
    pub user_id: i64,
    /// Title (at most 25 characters).
    pub title: String,
    /// Set when the title is created.
    pub last_updated: DateTime<Utc>,
    /// Backing description; unique across titles.
    pub job_description_id: i64,
    /// Portal the posting is listed on.
    pub portal_id: i64,
}

/// Data required to create a job title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJobTitle {
    /// Owner.
    pub user_id: i64,
    /// Title.
    pub title: String,
    /// Backing description.
    pub job_description_id: i64,
    /// Portal.
    pub portal_id: i64,
}

/// Data for updating a job title. The owner is not updatable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateJobTitle {
    /// The title ID to update.
    pub id: i64,
    /// New title.
    pub title: Option<String>,
    /// New backing description.
    pub job_description_id: Option<i64>,
    /// New portal.
    pub portal_id: Option<i64>,
}
