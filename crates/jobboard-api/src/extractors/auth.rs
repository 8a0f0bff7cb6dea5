//! `AuthUser` extractor: resolves `Authorization: Token <key>` to a request context.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use jobboard_auth::token::parse_authorization;
use jobboard_core::error::AppError;
use jobboard_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let raw = match parts.headers.get(header::AUTHORIZATION) {
            Some(value) => Some(value.to_str().map_err(|_| {
                AppError::authentication(
                    "Invalid token header. Token string should not contain invalid characters.",
                )
            })?),
            None => None,
        };

        let key = parse_authorization(raw)?.ok_or_else(|| {
            AppError::authentication("Authentication credentials were not provided.")
        })?;

        let user = state.authenticator.authenticate(key).await?;
        Ok(AuthUser(RequestContext::for_user(&user)))
    }
}
