//! Exam registration model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Exam types offered by the program.
pub const EXAM_TYPES: &[&str] = &["mains", "advance"];

/// Payment lifecycle values. Transitions happen outside this service.
pub const PAYMENT_PENDING: &str = "pending";
pub const PAYMENT_PAID: &str = "paid";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExamRegistration {
    pub id: String,
    pub student_name: String,
    pub email: String,
    pub phone: String,
    pub grade_level: String,
    pub school_name: String,
    pub parent_name: String,
    pub parent_phone: String,
    pub address: String,
    pub exam_type: String,
    pub payment_status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRegistrationRequest {
    pub student_name: String,
    pub email: String,
    pub phone: String,
    pub grade_level: String,
    pub school_name: String,
    pub parent_name: String,
    pub parent_phone: String,
    pub address: String,
    pub exam_type: String,
}
