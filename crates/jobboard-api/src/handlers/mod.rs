//! Route handlers organized by domain.

pub mod applicant;
pub mod health;
pub mod job_description;
pub mod job_title;
pub mod portal;
pub mod user;

/// Logs an owner field that a resource payload carried; it has no effect.
pub(crate) fn ignore_owner_field(resource: &str, user: Option<&serde_json::Value>) {
    if let Some(value) = user {
        tracing::debug!(resource, user = %value, "Ignoring owner field in payload");
    }
}
