//! Candidate registration model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Candidate {
    pub id: String,
    pub candidate_code: String,
    pub seat_number: String,
    /// Mentor code issued at the previous stage, held by value.
    pub mentor_code: String,
    pub student_name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub email: String,
    pub phone: String,
    pub parent_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pin: String,
    pub grade_level: String,
    pub school_name: String,
    pub photo_path: String,
    pub signature_path: String,
    pub payment_status: String,
    pub hall_ticket_issued: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterCandidateRequest {
    pub mentor_code: String,
    pub student_name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub email: String,
    pub phone: String,
    pub parent_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pin: String,
    pub grade_level: String,
    pub school_name: String,
}

/// An uploaded document (photo or signature) held in memory between the
/// multipart parse and the write to the upload directory.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}
