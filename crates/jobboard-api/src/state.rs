//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use jobboard_auth::password::{PasswordHasher, PasswordValidator};
use jobboard_auth::token::{TokenAuthenticator, TokenGenerator};
use jobboard_core::config::AppConfig;
use jobboard_core::result::AppResult;
use jobboard_database::Database;
use jobboard_service::applicant::ApplicantService;
use jobboard_service::auth::TokenService;
use jobboard_service::job::{JobDescriptionService, JobTitleService};
use jobboard_service::portal::PortalService;
use jobboard_service::user::{UserManager, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Store bundle (PostgreSQL or in-memory)
    pub db: Database,

    // ── Auth ─────────────────────────────────────────────────
    /// Resolves `Authorization: Token` keys to users
    pub authenticator: Arc<TokenAuthenticator>,

    // ── Services ─────────────────────────────────────────────
    /// Sign-up and profile service
    pub user_service: Arc<UserService>,
    /// Token issuance
    pub token_service: Arc<TokenService>,
    /// Portal CRUD
    pub portal_service: Arc<PortalService>,
    /// Job description CRUD
    pub job_description_service: Arc<JobDescriptionService>,
    /// Job title CRUD
    pub job_title_service: Arc<JobTitleService>,
    /// Applicant profile CRUD
    pub applicant_service: Arc<ApplicantService>,
}

impl AppState {
    /// Wires every service on top of an opened store.
    pub fn new(config: AppConfig, db: Database) -> AppResult<Self> {
        let password_hasher = Arc::new(PasswordHasher::new(&config.auth)?);
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));
        let token_generator = TokenGenerator::new(&config.auth);

        let authenticator = Arc::new(TokenAuthenticator::new(
            Arc::clone(&db.tokens),
            Arc::clone(&db.users),
        ));

        let user_manager = Arc::new(UserManager::new(
            Arc::clone(&db.users),
            Arc::clone(&password_hasher),
        ));
        let user_service = Arc::new(UserService::new(
            Arc::clone(&db.users),
            user_manager,
            Arc::clone(&password_hasher),
            password_validator,
        ));
        let token_service = Arc::new(TokenService::new(
            Arc::clone(&db.users),
            Arc::clone(&db.tokens),
            password_hasher,
            token_generator,
        ));
        let portal_service = Arc::new(PortalService::new(Arc::clone(&db.portals)));
        let job_description_service =
            Arc::new(JobDescriptionService::new(Arc::clone(&db.job_descriptions)));
        let job_title_service = Arc::new(JobTitleService::new(
            Arc::clone(&db.job_titles),
            Arc::clone(&db.portals),
            Arc::clone(&db.job_descriptions),
            Arc::clone(&db.applicants),
            Arc::clone(&db.users),
        ));
        let applicant_service = Arc::new(ApplicantService::new(
            Arc::clone(&db.applicants),
            Arc::clone(&db.job_titles),
            Arc::clone(&db.users),
        ));

        Ok(Self {
            config: Arc::new(config),
            db,
            authenticator,
            user_service,
            token_service,
            portal_service,
            job_description_service,
            job_title_service,
            applicant_service,
        })
    }
}
