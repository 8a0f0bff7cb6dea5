//! Portal handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use jobboard_service::WriteMode;

use super::ignore_owner_field;
use crate::dto::request::PortalRequest;
use crate::dto::response::PortalResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson, parse_id};
use crate::state::AppState;

/// GET /api/job/portals/
pub async fn list_portals(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<PortalResponse>>, ApiError> {
    let portals = state.portal_service.list(&auth).await?;
    Ok(Json(portals.into_iter().map(Into::into).collect()))
}

/// POST /api/job/portals/
pub async fn create_portal(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<PortalRequest>,
) -> Result<(StatusCode, Json<PortalResponse>), ApiError> {
    ignore_owner_field("portal", req.user.as_ref());
    let portal = state.portal_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(portal.into())))
}

/// GET /api/job/portals/{id}/
pub async fn get_portal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<PortalResponse>, ApiError> {
    let portal = state.portal_service.get(&auth, parse_id(&id)?).await?;
    Ok(Json(portal.into()))
}

/// PUT /api/job/portals/{id}/
pub async fn put_portal(
    state: State<AppState>,
    auth: AuthUser,
    id: Path<String>,
    body: ValidatedJson<PortalRequest>,
) -> Result<Json<PortalResponse>, ApiError> {
    update(state, auth, id, body, WriteMode::Full).await
}

/// PATCH /api/job/portals/{id}/
pub async fn patch_portal(
    state: State<AppState>,
    auth: AuthUser,
    id: Path<String>,
    body: ValidatedJson<PortalRequest>,
) -> Result<Json<PortalResponse>, ApiError> {
    update(state, auth, id, body, WriteMode::Partial).await
}

async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<PortalRequest>,
    mode: WriteMode,
) -> Result<Json<PortalResponse>, ApiError> {
    ignore_owner_field("portal", req.user.as_ref());
    let portal = state
        .portal_service
        .update(&auth, parse_id(&id)?, req.into(), mode)
        .await?;
    Ok(Json(portal.into()))
}

/// DELETE /api/job/portals/{id}/
pub async fn delete_portal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.portal_service.delete(&auth, parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
