//! Store traits implemented by every persistence backend.
//!
//! Each trait covers one table. Writes that would break a uniqueness rule
//! fail with [`ErrorKind::Conflict`](jobboard_core::ErrorKind::Conflict);
//! writes referencing a missing row fail with a validation error.
//! Owner-scoped listings are ordered by descending id.

use std::fmt::Debug;

use async_trait::async_trait;

use jobboard_core::result::AppResult;
use jobboard_entity::applicant::{ApplicantProfile, CreateApplicantProfile, UpdateApplicantProfile};
use jobboard_entity::job::{
    CreateJobDescription, CreateJobTitle, JobDescription, JobTitle, UpdateJobDescription,
    UpdateJobTitle,
};
use jobboard_entity::portal::{CreatePortal, Portal, UpdatePortal};
use jobboard_entity::token::AuthToken;
use jobboard_entity::user::{CreateUser, UpdateUser, User};

/// User accounts.
#[async_trait]
pub trait UserStore: Send + Sync + Debug + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Find a user by exact (already normalized) email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List every user, oldest first.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Insert a user. Conflict if the email is taken.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Apply the `Some` fields of `data`. Not-found if the user is gone.
    async fn update(&self, data: &UpdateUser) -> AppResult<User>;

    /// Delete a user and everything they own. Returns `false` if absent.
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// Authentication tokens, at most one per user.
#[async_trait]
pub trait TokenStore: Send + Sync + Debug + 'static {
    /// Find a token by its key.
    async fn find_by_key(&self, key: &str) -> AppResult<Option<AuthToken>>;

    /// Find the token issued to a user.
    async fn find_by_user(&self, user_id: i64) -> AppResult<Option<AuthToken>>;

    /// Insert a token. Conflict if the user already has one or the key is taken.
    async fn create(&self, user_id: i64, key: &str) -> AppResult<AuthToken>;
}

/// Job portals.
#[async_trait]
pub trait PortalStore: Send + Sync + Debug + 'static {
    /// Find a portal by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Portal>>;

    /// List the portals owned by `user_id`.
    async fn find_by_owner(&self, user_id: i64) -> AppResult<Vec<Portal>>;

    /// Insert a portal. Conflict if the name is taken.
    async fn create(&self, data: &CreatePortal) -> AppResult<Portal>;

    /// Apply the `Some` fields of `data`.
    async fn update(&self, data: &UpdatePortal) -> AppResult<Portal>;

    /// Delete a portal and the titles listed on it.
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// Job descriptions.
#[async_trait]
pub trait JobDescriptionStore: Send + Sync + Debug + 'static {
    /// Find a description by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<JobDescription>>;

    /// List the descriptions owned by `user_id`.
    async fn find_by_owner(&self, user_id: i64) -> AppResult<Vec<JobDescription>>;

    /// Insert a description.
    async fn create(&self, data: &CreateJobDescription) -> AppResult<JobDescription>;

    /// Apply the `Some` fields of `data`.
    async fn update(&self, data: &UpdateJobDescription) -> AppResult<JobDescription>;

    /// Delete a description and the title it backs.
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// Job titles.
#[async_trait]
pub trait JobTitleStore: Send + Sync + Debug + 'static {
    /// Find a title by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<JobTitle>>;

    /// List the titles owned by `user_id`.
    async fn find_by_owner(&self, user_id: i64) -> AppResult<Vec<JobTitle>>;

    /// Find the title backed by a description, if any.
    async fn find_by_job_description(&self, job_description_id: i64)
    -> AppResult<Option<JobTitle>>;

    /// Insert a title. Conflict if the description already backs one.
    async fn create(&self, data: &CreateJobTitle) -> AppResult<JobTitle>;

    /// Apply the `Some` fields of `data`.
    async fn update(&self, data: &UpdateJobTitle) -> AppResult<JobTitle>;

    /// Delete a title and the applicant profiles pointing at it.
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// Applicant profiles, keyed by user id.
#[async_trait]
pub trait ApplicantStore: Send + Sync + Debug + 'static {
    /// Find the profile attached to a user.
    async fn find_by_user(&self, user_id: i64) -> AppResult<Option<ApplicantProfile>>;

    /// List profiles that applied for a job title.
    async fn find_by_job_title(&self, job_title_id: i64) -> AppResult<Vec<ApplicantProfile>>;

    /// Insert a profile. Conflict if the user already has one.
    async fn create(&self, data: &CreateApplicantProfile) -> AppResult<ApplicantProfile>;

    /// Apply the `Some` fields of `data`.
    async fn update(&self, data: &UpdateApplicantProfile) -> AppResult<ApplicantProfile>;

    /// Delete a profile. The user row is kept.
    async fn delete(&self, user_id: i64) -> AppResult<bool>;
}
