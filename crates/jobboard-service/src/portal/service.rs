//! Owner-scoped CRUD for job portals.

use std::sync::Arc;

use tracing::{debug, info};

use jobboard_core::error::{AppError, ErrorKind};
use jobboard_core::result::AppResult;
use jobboard_database::store::PortalStore;
use jobboard_entity::portal::{CreatePortal, Portal, UpdatePortal};

use crate::context::RequestContext;
use crate::validation::{FieldErrors, NOT_FOUND, WriteMode, present};

const NAME_TAKEN: &str = "portal with this name already exists.";

/// Writable portal fields.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct PortalInput {
    /// Portal name, unique across all owners.
    pub name: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
}

impl PortalInput {
    fn check(&self, mode: WriteMode) -> AppResult<()> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, mode);
        errors.require("description", &self.description, mode);
        errors.into_result()
    }
}

/// Service for the caller's portals.
#[derive(Debug, Clone)]
pub struct PortalService {
    portals: Arc<dyn PortalStore>,
}

impl PortalService {
    /// Creates a new portal service.
    pub fn new(portals: Arc<dyn PortalStore>) -> Self {
        Self { portals }
    }

    /// Lists the caller's portals, newest first.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<Portal>> {
        self.portals.find_by_owner(ctx.user_id).await
    }

    /// Gets one of the caller's portals.
    pub async fn get(&self, ctx: &RequestContext, id: i64) -> AppResult<Portal> {
        self.portals
            .find_by_id(id)
            .await?
            .filter(|p| ctx.owns(p.user_id))
            .ok_or_else(|| AppError::not_found(NOT_FOUND))
    }

    /// Creates a portal owned by the caller.
    pub async fn create(&self, ctx: &RequestContext, input: PortalInput) -> AppResult<Portal> {
        input.check(WriteMode::Full)?;
        let data = CreatePortal {
            user_id: ctx.user_id,
            name: present("name", input.name)?,
            description: present("description", input.description)?,
        };

        let portal = self.portals.create(&data).await.map_err(name_taken)?;
        info!(portal_id = portal.id, user_id = ctx.user_id, "Portal created");
        Ok(portal)
    }

    /// Updates one of the caller's portals.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        input: PortalInput,
        mode: WriteMode,
    ) -> AppResult<Portal> {
        let existing = self.get(ctx, id).await?;
        input.check(mode)?;

        let data = UpdatePortal {
            id: existing.id,
            name: input.name,
            description: input.description,
        };
        let portal = self.portals.update(&data).await.map_err(name_taken)?;
        debug!(portal_id = portal.id, "Portal updated");
        Ok(portal)
    }

    /// Deletes one of the caller's portals and the titles listed on it.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        let existing = self.get(ctx, id).await?;
        self.portals.delete(existing.id).await?;
        info!(portal_id = id, user_id = ctx.user_id, "Portal deleted");
        Ok(())
    }
}

fn name_taken(e: AppError) -> AppError {
    if e.is(ErrorKind::Conflict) {
        AppError::field("name", NAME_TAKEN)
    } else {
        e
    }
}
