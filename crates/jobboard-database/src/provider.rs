//! Store bundle that dispatches to the configured backend.

use std::sync::Arc;

use tracing::info;

use jobboard_core::config::DatabaseConfig;
use jobboard_core::error::AppError;
use jobboard_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::repositories::{
    ApplicantRepository, JobDescriptionRepository, JobTitleRepository, PortalRepository,
    TokenRepository, UserRepository,
};
use crate::store::{
    ApplicantStore, JobDescriptionStore, JobTitleStore, PortalStore, TokenStore, UserStore,
};

/// Every store the services need, backed by one provider.
///
/// The provider is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct Database {
    /// User accounts.
    pub users: Arc<dyn UserStore>,
    /// Authentication tokens.
    pub tokens: Arc<dyn TokenStore>,
    /// Job portals.
    pub portals: Arc<dyn PortalStore>,
    /// Job descriptions.
    pub job_descriptions: Arc<dyn JobDescriptionStore>,
    /// Job titles.
    pub job_titles: Arc<dyn JobTitleStore>,
    /// Applicant profiles.
    pub applicants: Arc<dyn ApplicantStore>,
    /// Present only for the PostgreSQL provider.
    pool: Option<DatabasePool>,
}

impl Database {
    /// Open the store named by `config.provider`.
    pub async fn open(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL store");
                let pool = DatabasePool::connect(config).await?;
                if config.auto_migrate {
                    run_migrations(pool.pool()).await?;
                }
                Ok(Self::from_pool(pool))
            }
            "memory" => {
                info!("Initializing in-memory store");
                Ok(Self::in_memory())
            }
            other => Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: postgres, memory"
            ))),
        }
    }

    /// Build the store bundle on an existing PostgreSQL pool.
    pub fn from_pool(pool: DatabasePool) -> Self {
        let pg = pool.pool().clone();
        Self {
            users: Arc::new(UserRepository::new(pg.clone())),
            tokens: Arc::new(TokenRepository::new(pg.clone())),
            portals: Arc::new(PortalRepository::new(pg.clone())),
            job_descriptions: Arc::new(JobDescriptionRepository::new(pg.clone())),
            job_titles: Arc::new(JobTitleRepository::new(pg.clone())),
            applicants: Arc::new(ApplicantRepository::new(pg)),
            pool: Some(pool),
        }
    }

    /// Build a fresh, empty in-memory store bundle.
    pub fn in_memory() -> Self {
        let store = MemoryStore::new();
        Self {
            users: Arc::new(store.clone()),
            tokens: Arc::new(store.clone()),
            portals: Arc::new(store.clone()),
            job_descriptions: Arc::new(store.clone()),
            job_titles: Arc::new(store.clone()),
            applicants: Arc::new(store),
            pool: None,
        }
    }

    /// Name of the active provider.
    pub fn provider(&self) -> &'static str {
        if self.pool.is_some() { "postgres" } else { "memory" }
    }

    /// The PostgreSQL pool, when that provider is active.
    pub fn pool(&self) -> Option<&DatabasePool> {
        self.pool.as_ref()
    }

    /// Check that the backend is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
