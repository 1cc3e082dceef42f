//! Enrollment pipeline handlers (school → mentor → candidate)

use std::collections::HashMap;

use axum::extract::{Multipart, State};
use axum::Json;
use serde_json::{json, Value};

use crate::models::{
    RegisterCandidateRequest, RegisterMentorRequest, RegisterSchoolRequest, UploadedDocument,
};
use crate::state::AppState;
use crate::utils::errors::{AppError, Result};

/// `POST /api/schools/register`
pub async fn register_school(
    State(state): State<AppState>,
    Json(request): Json<RegisterSchoolRequest>,
) -> Result<Json<Value>> {
    let school = state.services.enrollment_service.register_school(request).await?;

    Ok(Json(json!({
        "message": "School registered. Share the school code with your mentors.",
        "school": school,
    })))
}

/// `GET /api/schools`
pub async fn list_schools(State(state): State<AppState>) -> Result<Json<Value>> {
    let schools = state.services.enrollment_service.list_schools().await?;
    Ok(Json(json!(schools)))
}

/// `POST /api/mentors/register`
pub async fn register_mentor(
    State(state): State<AppState>,
    Json(request): Json<RegisterMentorRequest>,
) -> Result<Json<Value>> {
    let mentor = state.services.enrollment_service.register_mentor(request).await?;

    Ok(Json(json!({
        "message": "Mentor registered. Share the mentor code with your candidates.",
        "mentor": mentor,
    })))
}

/// `GET /api/mentors`
pub async fn list_mentors(State(state): State<AppState>) -> Result<Json<Value>> {
    let mentors = state.services.enrollment_service.list_mentors().await?;
    Ok(Json(json!(mentors)))
}

/// `POST /api/candidates/register`
///
/// Multipart: text parts carry the candidate fields, file parts `photo`
/// and `signature` carry the documents.
pub async fn register_candidate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>> {
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut photo: Option<UploadedDocument> = None;
    let mut signature: Option<UploadedDocument> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "photo" | "signature" => {
                let filename = field.file_name().unwrap_or("upload.bin").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Upload(e.to_string()))?;
                let doc = UploadedDocument {
                    filename,
                    bytes: bytes.to_vec(),
                };
                if name == "photo" {
                    photo = Some(doc);
                } else {
                    signature = Some(doc);
                }
            }
            _ => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Upload(e.to_string()))?;
                fields.insert(name, value);
            }
        }
    }

    // Missing text parts become empty strings and fail field validation,
    // so the caller gets the full violation list in one response.
    let mut take = |key: &str| fields.remove(key).unwrap_or_default();
    let request = RegisterCandidateRequest {
        mentor_code: take("mentor_code"),
        student_name: take("student_name"),
        date_of_birth: take("date_of_birth"),
        gender: take("gender"),
        email: take("email"),
        phone: take("phone"),
        parent_name: take("parent_name"),
        address: take("address"),
        city: take("city"),
        state: take("state"),
        pin: take("pin"),
        grade_level: take("grade_level"),
        school_name: take("school_name"),
    };

    let candidate = state
        .services
        .enrollment_service
        .register_candidate(request, photo, signature)
        .await?;

    Ok(Json(json!({
        "message": "Candidate registered. Note your candidate code and seat number.",
        "candidate": candidate,
    })))
}
