//! Job portal entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An external job-listing site a user tracks postings against.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Portal {
    /// Primary key.
    pub id: i64,
    /// Owner.
    pub user_id: i64,
    /// Globally unique name (at most 100 characters).
    pub name: String,
    /// Free text (at most 250 characters).
    pub description: String,
}

/// Data required to create a portal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePortal {
    /// Owner.
    pub user_id: i64,
    /// Portal name.
    pub name: String,
    /// Portal description.
    pub description: String,
}

/// Data for updating a portal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePortal {
    /// The portal ID to update.
    pub id: i64,
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
}
