//! Job description handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use jobboard_service::WriteMode;

use super::ignore_owner_field;
use crate::dto::request::JobDescriptionRequest;
use crate::dto::response::JobDescriptionResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson, parse_id};
use crate::state::AppState;

/// GET /api/job/descriptions/
pub async fn list_descriptions(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<JobDescriptionResponse>>, ApiError> {
    let descriptions = state.job_description_service.list(&auth).await?;
    Ok(Json(descriptions.into_iter().map(Into::into).collect()))
}

/// POST /api/job/descriptions/
pub async fn create_description(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<JobDescriptionRequest>,
) -> Result<(StatusCode, Json<JobDescriptionResponse>), ApiError> {
    ignore_owner_field("job_description", req.user.as_ref());
    let description = state
        .job_description_service
        .create(&auth, req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(description.into())))
}

/// GET /api/job/descriptions/{id}/
pub async fn get_description(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<JobDescriptionResponse>, ApiError> {
    let description = state
        .job_description_service
        .get(&auth, parse_id(&id)?)
        .await?;
    Ok(Json(description.into()))
}

/// PUT /api/job/descriptions/{id}/
pub async fn put_description(
    state: State<AppState>,
    auth: AuthUser,
    id: Path<String>,
    body: ValidatedJson<JobDescriptionRequest>,
) -> Result<Json<JobDescriptionResponse>, ApiError> {
    update(state, auth, id, body, WriteMode::Full).await
}

/// PATCH /api/job/descriptions/{id}/
pub async fn patch_description(
    state: State<AppState>,
    auth: AuthUser,
    id: Path<String>,
    body: ValidatedJson<JobDescriptionRequest>,
) -> Result<Json<JobDescriptionResponse>, ApiError> {
    update(state, auth, id, body, WriteMode::Partial).await
}

async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<JobDescriptionRequest>,
    mode: WriteMode,
) -> Result<Json<JobDescriptionResponse>, ApiError> {
    ignore_owner_field("job_description", req.user.as_ref());
    let description = state
        .job_description_service
        .update(&auth, parse_id(&id)?, req.into(), mode)
        .await?;
    Ok(Json(description.into()))
}

/// DELETE /api/job/descriptions/{id}/
pub async fn delete_description(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .job_description_service
        .delete(&auth, parse_id(&id)?)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
