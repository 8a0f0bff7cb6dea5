//! Job description entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Free-text role description authored by a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobDescription {
    /// Primary key.
    pub id: i64,
    /// Owner.
    pub user_id: i64,
    /// Role name (at most 50 characters).
    pub role: String,
    /// Body text (at most 250 characters).
    pub description_text: String,
    /// Publication time.
    pub published_date: DateTime<Utc>,
}

/// Data required to create a job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJobDescription {
    /// Owner.
    pub user_id: i64,
    /// Role name.
    pub role: String,
    /// Body text.
    pub description_text: String,
    /// Publication time; defaults to now.
    pub published_date: Option<DateTime<Utc>>,
}

/// Data for updating a job description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateJobDescription {
    /// The description ID to update.
    pub id: i64,
    /// New role.
    pub role: Option<String>,
    /// New body text.
    pub description_text: Option<String>,
    /// New publication time.
    pub published_date: Option<DateTime<Utc>>,
}
