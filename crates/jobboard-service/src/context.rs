//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use jobboard_entity::user::User;

/// Context for the current authenticated request.
///
/// Built by the API layer once the token has been resolved and passed into
/// service methods so that every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID; the owner of anything they create.
    pub user_id: i64,
    /// The user's email at the time of the request.
    pub email: String,
    /// Staff flag.
    pub is_staff: bool,
    /// Superuser flag.
    pub is_superuser: bool,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a context for an authenticated user.
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            is_staff: user.is_staff,
            is_superuser: user.is_superuser,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the caller owns a row with the given owner id.
    pub fn owns(&self, owner_id: i64) -> bool {
        self.user_id == owner_id
    }
}
