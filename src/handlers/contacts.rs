//! Contact form handlers

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::models::CreateContactRequest;
use crate::state::AppState;
use crate::utils::errors::Result;

/// `POST /api/contacts`
pub async fn create_contact(
    State(state): State<AppState>,
    Json(request): Json<CreateContactRequest>,
) -> Result<Json<Value>> {
    let contact = state.services.contact_service.submit(request).await?;

    Ok(Json(json!({
        "message": "Thank you for reaching out. We will get back to you soon.",
        "contact": contact,
    })))
}

/// `GET /api/contacts`
pub async fn list_contacts(State(state): State<AppState>) -> Result<Json<Value>> {
    let contacts = state.services.contact_service.list().await?;
    Ok(Json(json!(contacts)))
}
