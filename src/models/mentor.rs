//! Mentor registration model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Mentor {
    pub id: String,
    pub mentor_code: String,
    /// School code issued at the previous stage, held by value.
    pub school_code: String,
    pub full_name: String,
    pub email: String,
    pub contact: String,
    pub qualification: String,
    pub designation: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterMentorRequest {
    pub school_code: String,
    pub full_name: String,
    pub email: String,
    pub contact: String,
    pub qualification: String,
    pub designation: String,
}
