//! Exam registration handlers

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::models::CreateRegistrationRequest;
use crate::state::AppState;
use crate::utils::errors::Result;

/// `POST /api/registrations`
pub async fn create_registration(
    State(state): State<AppState>,
    Json(request): Json<CreateRegistrationRequest>,
) -> Result<Json<Value>> {
    let registration = state.services.registration_service.submit(request).await?;

    Ok(Json(json!({
        "message": "Registration received. Keep your registration id for future reference.",
        "registration": registration,
    })))
}

/// `GET /api/registrations`
pub async fn list_registrations(State(state): State<AppState>) -> Result<Json<Value>> {
    let registrations = state.services.registration_service.list().await?;
    Ok(Json(json!(registrations)))
}

/// `GET /api/registrations/:id`
pub async fn get_registration(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let registration = state.services.registration_service.get(&id).await?;
    Ok(Json(json!(registration)))
}
