//! HTTP handlers and router assembly

pub mod admin;
pub mod contacts;
pub mod enrollment;
pub mod registrations;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, patch, post};
use axum::{middleware as axum_middleware, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::middleware::{log_requests, require_admin};
use crate::state::AppState;

/// Room for two capped document uploads plus the text parts.
const CANDIDATE_BODY_LIMIT: usize = 12 * 1024 * 1024;

/// Assemble the full application router.
pub fn build_router(state: AppState) -> Router {
    // The frontend is served from another origin; answer preflight for all.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let admin_routes = Router::new()
        .route("/dashboard", get(admin::dashboard))
        .route("/candidates", get(admin::list_candidates))
        .route("/candidates/:id/hall-ticket", patch(admin::issue_hall_ticket))
        .route("/sms", post(admin::broadcast_sms))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_admin,
        ));

    Router::new()
        .route(
            "/api/contacts",
            post(contacts::create_contact).get(contacts::list_contacts),
        )
        .route(
            "/api/registrations",
            post(registrations::create_registration).get(registrations::list_registrations),
        )
        .route("/api/registrations/:id", get(registrations::get_registration))
        .route("/api/schools/register", post(enrollment::register_school))
        .route("/api/schools", get(enrollment::list_schools))
        .route("/api/mentors/register", post(enrollment::register_mentor))
        .route("/api/mentors", get(enrollment::list_mentors))
        .route(
            "/api/candidates/register",
            post(enrollment::register_candidate),
        )
        .route("/api/admin/login", post(admin::login))
        .nest("/api/admin", admin_routes)
        .layer(DefaultBodyLimit::max(CANDIDATE_BODY_LIMIT))
        .layer(axum_middleware::from_fn(log_requests))
        .layer(cors)
        .with_state(state)
}
