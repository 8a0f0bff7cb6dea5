//! PostgreSQL implementations of the store traits.

pub mod applicant;
pub mod job_description;
pub mod job_title;
pub mod portal;
pub mod token;
pub mod user;

pub use applicant::ApplicantRepository;
pub use job_description::JobDescriptionRepository;
pub use job_title::JobTitleRepository;
pub use portal::PortalRepository;
pub use token::TokenRepository;
pub use user::UserRepository;

use jobboard_core::error::{AppError, ErrorKind};

/// Map a failed write, turning dangling references into validation errors.
fn write_error(e: sqlx::Error, context: &str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
            AppError::validation(format!("{context}: referenced object does not exist"))
        }
        _ => AppError::with_source(ErrorKind::Database, context.to_string(), e),
    }
}
