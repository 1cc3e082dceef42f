//! Exam registration service
//!
//! Handles direct exam-registration submissions (the single-form flow, as
//! opposed to the staged school/mentor/candidate pipeline).

use std::sync::Arc;

use tracing::{debug, info};

use crate::models::registration::EXAM_TYPES;
use crate::models::{CreateRegistrationRequest, ExamRegistration};
use crate::storage::Storage;
use crate::utils::errors::{AppError, Result};
use crate::utils::validation::Validator;

#[derive(Clone)]
pub struct RegistrationService {
    storage: Arc<dyn Storage>,
}

impl RegistrationService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Validate and persist an exam registration. Payment status starts at
    /// `pending`; it is flipped outside this service.
    pub async fn submit(&self, request: CreateRegistrationRequest) -> Result<ExamRegistration> {
        debug!(student = %request.student_name, "Validating exam registration");

        let mut v = Validator::new();
        v.min_len("student_name", &request.student_name, 2)
            .email("email", &request.email)
            .digits("phone", &request.phone, 10)
            .require("grade_level", &request.grade_level)
            .min_len("school_name", &request.school_name, 2)
            .min_len("parent_name", &request.parent_name, 2)
            .digits("parent_phone", &request.parent_phone, 10)
            .min_len("address", &request.address, 10)
            .one_of("exam_type", &request.exam_type, EXAM_TYPES);
        v.finish()?;

        let registration = self.storage.create_registration(request).await?;
        info!(
            registration_id = %registration.id,
            exam_type = %registration.exam_type,
            "Exam registration stored"
        );

        Ok(registration)
    }

    /// All registrations, most recent first.
    pub async fn list(&self) -> Result<Vec<ExamRegistration>> {
        self.storage.get_registrations().await
    }

    /// Look up one registration; absent ids are a `NotFound` error.
    pub async fn get(&self, id: &str) -> Result<ExamRegistration> {
        self.storage
            .get_registration_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Registration".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn valid_request() -> CreateRegistrationRequest {
        CreateRegistrationRequest {
            student_name: "Rohan Kumar".to_string(),
            email: "rohan@example.com".to_string(),
            phone: "9876543210".to_string(),
            grade_level: "10".to_string(),
            school_name: "Test School".to_string(),
            parent_name: "Suresh Kumar".to_string(),
            parent_phone: "9876543211".to_string(),
            address: "12 MG Road, Pune, Maharashtra".to_string(),
            exam_type: "mains".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submission_defaults_to_pending_payment() {
        let service = RegistrationService::new(Arc::new(MemoryStorage::new()));
        let registration = service.submit(valid_request()).await.unwrap();
        assert_eq!(registration.payment_status, "pending");
    }

    #[tokio::test]
    async fn test_unknown_exam_type_is_rejected() {
        let service = RegistrationService::new(Arc::new(MemoryStorage::new()));
        let request = CreateRegistrationRequest {
            exam_type: "finals".to_string(),
            ..valid_request()
        };
        assert!(service.submit(request).await.is_err());
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let service = RegistrationService::new(Arc::new(MemoryStorage::new()));
        let err = service.get("missing").await;
        assert!(matches!(err, Err(AppError::NotFound(_))));
    }
}
