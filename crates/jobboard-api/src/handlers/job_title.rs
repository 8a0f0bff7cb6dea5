//! Job title handlers.
//!
//! Listings use the summary representation; every other response uses
//! the detail representation.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use jobboard_service::WriteMode;

use super::ignore_owner_field;
use crate::dto::request::JobTitleRequest;
use crate::dto::response::{ApplicantResponse, JobTitleDetail, JobTitleSummary};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson, parse_id};
use crate::state::AppState;

/// GET /api/job/jobtitles/
pub async fn list_job_titles(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<JobTitleSummary>>, ApiError> {
    let titles = state.job_title_service.list(&auth).await?;
    Ok(Json(titles.iter().map(JobTitleSummary::from).collect()))
}

/// POST /api/job/jobtitles/
pub async fn create_job_title(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<JobTitleRequest>,
) -> Result<(StatusCode, Json<JobTitleDetail>), ApiError> {
    ignore_owner_field("job_title", req.user.as_ref());
    let title = state.job_title_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(title.into())))
}

/// GET /api/job/jobtitles/{id}/
pub async fn get_job_title(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<JobTitleDetail>, ApiError> {
    let title = state.job_title_service.get(&auth, parse_id(&id)?).await?;
    Ok(Json(title.into()))
}

/// PUT /api/job/jobtitles/{id}/
pub async fn put_job_title(
    state: State<AppState>,
    auth: AuthUser,
    id: Path<String>,
    body: ValidatedJson<JobTitleRequest>,
) -> Result<Json<JobTitleDetail>, ApiError> {
    update(state, auth, id, body, WriteMode::Full).await
}

/// PATCH /api/job/jobtitles/{id}/
pub async fn patch_job_title(
    state: State<AppState>,
    auth: AuthUser,
    id: Path<String>,
    body: ValidatedJson<JobTitleRequest>,
) -> Result<Json<JobTitleDetail>, ApiError> {
    update(state, auth, id, body, WriteMode::Partial).await
}

async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<JobTitleRequest>,
    mode: WriteMode,
) -> Result<Json<JobTitleDetail>, ApiError> {
    ignore_owner_field("job_title", req.user.as_ref());
    let title = state
        .job_title_service
        .update(&auth, parse_id(&id)?, req.into(), mode)
        .await?;
    Ok(Json(title.into()))
}

/// DELETE /api/job/jobtitles/{id}/
pub async fn delete_job_title(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.job_title_service.delete(&auth, parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/job/jobtitles/{id}/applicants/
pub async fn list_title_applicants(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Vec<ApplicantResponse>>, ApiError> {
    let applicants = state
        .job_title_service
        .applicants(&auth, parse_id(&id)?)
        .await?;
    Ok(Json(applicants.into_iter().map(Into::into).collect()))
}
