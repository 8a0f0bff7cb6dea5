//! Opaque authentication token entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A bearer token bound to exactly one user.
///
/// Issued once per user on first successful credential check and reused
/// on every later one.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuthToken {
    /// Hex-encoded random key; the primary key.
    pub key: String,
    /// The owning user.
    pub user_id: i64,
    /// When the token was issued.
    pub created_at: DateTime<Utc>,
}
