//! School registration model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct School {
    pub id: String,
    pub school_code: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pin: String,
    pub contact: String,
    pub email: String,
    pub principal_name: String,
    pub principal_contact: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterSchoolRequest {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pin: String,
    pub contact: String,
    pub email: String,
    pub principal_name: String,
    pub principal_contact: String,
}
