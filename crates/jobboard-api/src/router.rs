//! Route definitions for the job board HTTP API.
//!
//! Routes are grouped by domain and mounted under `/api`. Paths keep their
//! trailing slash.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.request_body_limit_bytes;
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    let api_routes = Router::new()
        .merge(user_routes())
        .merge(job_title_routes())
        .merge(portal_routes())
        .merge(job_description_routes())
        .merge(applicant_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Sign-up, token, and self-service endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user/create/", post(handlers::user::create_user))
        .route("/user/token/", post(handlers::user::obtain_token))
        .route(
            "/user/me/",
            get(handlers::user::get_me)
                .put(handlers::user::put_me)
                .patch(handlers::user::patch_me)
                .post(handlers::user::post_me),
        )
}

/// Job title CRUD and per-title applicants
fn job_title_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/job/jobtitles/",
            get(handlers::job_title::list_job_titles).post(handlers::job_title::create_job_title),
        )
        .route(
            "/job/jobtitles/{id}/",
            get(handlers::job_title::get_job_title)
                .put(handlers::job_title::put_job_title)
                .patch(handlers::job_title::patch_job_title)
                .delete(handlers::job_title::delete_job_title),
        )
        .route(
            "/job/jobtitles/{id}/applicants/",
            get(handlers::job_title::list_title_applicants),
        )
}

/// Portal CRUD
fn portal_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/job/portals/",
            get(handlers::portal::list_portals).post(handlers::portal::create_portal),
        )
        .route(
            "/job/portals/{id}/",
            get(handlers::portal::get_portal)
                .put(handlers::portal::put_portal)
                .patch(handlers::portal::patch_portal)
                .delete(handlers::portal::delete_portal),
        )
}

/// Job description CRUD
fn job_description_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/job/descriptions/",
            get(handlers::job_description::list_descriptions)
                .post(handlers::job_description::create_description),
        )
        .route(
            "/job/descriptions/{id}/",
            get(handlers::job_description::get_description)
                .put(handlers::job_description::put_description)
                .patch(handlers::job_description::patch_description)
                .delete(handlers::job_description::delete_description),
        )
}

/// Applicant profile CRUD
fn applicant_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/job/applicants/",
            get(handlers::applicant::list_applicants).post(handlers::applicant::create_applicant),
        )
        .route(
            "/job/applicants/{id}/",
            get(handlers::applicant::get_applicant)
                .put(handlers::applicant::put_applicant)
                .patch(handlers::applicant::patch_applicant)
                .delete(handlers::applicant::delete_applicant),
        )
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
