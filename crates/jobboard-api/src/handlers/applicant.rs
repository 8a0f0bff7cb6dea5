//! Applicant profile handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use jobboard_service::WriteMode;

use super::ignore_owner_field;
use crate::dto::request::ApplicantRequest;
use crate::dto::response::ApplicantResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson, parse_id};
use crate::state::AppState;

/// GET /api/job/applicants/
pub async fn list_applicants(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<ApplicantResponse>>, ApiError> {
    let applicants = state.applicant_service.list(&auth).await?;
    Ok(Json(applicants.into_iter().map(Into::into).collect()))
}

/// POST /api/job/applicants/
pub async fn create_applicant(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<ApplicantRequest>,
) -> Result<(StatusCode, Json<ApplicantResponse>), ApiError> {
    ignore_owner_field("applicant", req.user.as_ref());
    let applicant = state.applicant_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(applicant.into())))
}

/// GET /api/job/applicants/{id}/
pub async fn get_applicant(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApplicantResponse>, ApiError> {
    let applicant = state.applicant_service.get(&auth, parse_id(&id)?).await?;
    Ok(Json(applicant.into()))
}

/// PUT /api/job/applicants/{id}/
pub async fn put_applicant(
    state: State<AppState>,
    auth: AuthUser,
    id: Path<String>,
    body: ValidatedJson<ApplicantRequest>,
) -> Result<Json<ApplicantResponse>, ApiError> {
    update(state, auth, id, body, WriteMode::Full).await
}

/// PATCH /api/job/applicants/{id}/
pub async fn patch_applicant(
    state: State<AppState>,
    auth: AuthUser,
    id: Path<String>,
    body: ValidatedJson<ApplicantRequest>,
) -> Result<Json<ApplicantResponse>, ApiError> {
    update(state, auth, id, body, WriteMode::Partial).await
}

async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<ApplicantRequest>,
    mode: WriteMode,
) -> Result<Json<ApplicantResponse>, ApiError> {
    ignore_owner_field("applicant", req.user.as_ref());
    let applicant = state
        .applicant_service
        .update(&auth, parse_id(&id)?, req.into(), mode)
        .await?;
    Ok(Json(applicant.into()))
}

/// DELETE /api/job/applicants/{id}/
pub async fn delete_applicant(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.applicant_service.delete(&auth, parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
