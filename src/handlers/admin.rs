//! Admin handlers: login, dashboard, candidates, hall tickets, SMS

use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::models::LoginRequest;
use crate::services::Claims;
use crate::state::AppState;
use crate::utils::errors::Result;
use crate::utils::logging::log_admin_action;

/// `POST /api/admin/login`
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<Value>> {
    let (token, user) = state
        .services
        .auth_service
        .login(&request.username, &request.password)
        .await?;

    Ok(Json(json!({ "token": token, "user": user })))
}

/// `GET /api/admin/dashboard`
pub async fn dashboard(State(state): State<AppState>) -> Result<Json<Value>> {
    let dashboard = state.services.admin_service.dashboard().await?;
    Ok(Json(dashboard))
}

/// `GET /api/admin/candidates`
pub async fn list_candidates(State(state): State<AppState>) -> Result<Json<Value>> {
    let candidates = state.services.admin_service.list_candidates().await?;
    Ok(Json(json!(candidates)))
}

/// `PATCH /api/admin/candidates/:id/hall-ticket`
pub async fn issue_hall_ticket(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let candidate = state.services.admin_service.issue_hall_ticket(&id).await?;
    log_admin_action(&claims.sub, "issue_hall_ticket", Some(&candidate.id), None);

    Ok(Json(json!({
        "message": "Hall ticket issued",
        "candidate": candidate,
    })))
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmsBroadcastRequest {
    pub message: String,
    pub recipients: Vec<String>,
}

/// `POST /api/admin/sms`
pub async fn broadcast_sms(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<SmsBroadcastRequest>,
) -> Result<Json<Value>> {
    let report = state
        .services
        .sms_service
        .broadcast(&request.message, &request.recipients)
        .await?;
    log_admin_action(
        &claims.sub,
        "sms_broadcast",
        None,
        Some(&format!("{} recipients", report.requested)),
    );

    Ok(Json(json!({
        "message": "Broadcast dispatched",
        "report": report,
    })))
}
