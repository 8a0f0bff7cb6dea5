//! Sign-up, token issuance, and `/me` handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use jobboard_core::error::AppError;
use jobboard_service::WriteMode;
use jobboard_service::auth::ObtainToken;
use jobboard_service::user::RegisterUser;
use jobboard_service::validation::FieldErrors;

use crate::dto::request::{CreateUserRequest, ObtainTokenRequest, UpdateMeRequest};
use crate::dto::response::{TokenResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/user/create/
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let mut errors = FieldErrors::new();
    errors.require("email", &req.email, WriteMode::Full);
    errors.require("password", &req.password, WriteMode::Full);
    errors.require("name", &req.name, WriteMode::Full);
    errors.into_result()?;

    let (Some(email), Some(password), Some(name)) = (req.email, req.password, req.name) else {
        return Err(AppError::validation("Missing required fields").into());
    };

    let user = state
        .user_service
        .register(RegisterUser {
            email,
            password,
            name,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /api/user/token/
pub async fn obtain_token(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ObtainTokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let mut errors = FieldErrors::new();
    errors.require("email", &req.email, WriteMode::Full);
    errors.require("password", &req.password, WriteMode::Full);
    errors.into_result()?;

    let (Some(email), Some(password)) = (req.email, req.password) else {
        return Err(AppError::validation("Missing required fields").into());
    };

    let token = state
        .token_service
        .obtain(ObtainToken { email, password })
        .await?;

    Ok(Json(token.into()))
}

/// GET /api/user/me/
pub async fn get_me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service.get_profile(&auth).await?;
    Ok(Json(user.into()))
}

/// PUT /api/user/me/
pub async fn put_me(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateMeRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .user_service
        .update_profile(&auth, req.into(), WriteMode::Full)
        .await?;
    Ok(Json(user.into()))
}

/// PATCH /api/user/me/
pub async fn patch_me(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateMeRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .user_service
        .update_profile(&auth, req.into(), WriteMode::Partial)
        .await?;
    Ok(Json(user.into()))
}

/// POST /api/user/me/ is not allowed, but only an authenticated caller learns that.
pub async fn post_me(_auth: AuthUser) -> ApiError {
    AppError::method_not_allowed("POST").into()
}
