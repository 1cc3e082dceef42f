//! Multi-stage enrollment pipeline
//!
//! Implements the school → mentor → candidate issuance flow. Each stage is a
//! single-record insert; the stages are linked only by the caller presenting
//! the code issued at the previous stage. A referenced parent code must
//! exist in storage, not merely look plausible. Codes are drawn at random
//! and checked against storage before use.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::models::registration::PAYMENT_PENDING;
use crate::models::{
    Candidate, Mentor, RegisterCandidateRequest, RegisterMentorRequest, RegisterSchoolRequest,
    School, UploadedDocument,
};
use crate::storage::Storage;
use crate::utils::codes::{
    self, generate_uuid, has_code_shape, CANDIDATE_PREFIX, MENTOR_PREFIX, SCHOOL_PREFIX,
};
use crate::utils::errors::{AppError, Result};
use crate::utils::helpers::{file_extension, sanitize_filename};
use crate::utils::validation::Validator;

/// Draws before code issuance gives up. At 36^6 suffixes per prefix this is
/// never expected to be exhausted.
const MAX_CODE_DRAWS: usize = 8;

const GENDERS: &[&str] = &["male", "female", "other"];

#[derive(Clone)]
pub struct EnrollmentService {
    storage: Arc<dyn Storage>,
    settings: Settings,
}

impl EnrollmentService {
    pub fn new(storage: Arc<dyn Storage>, settings: Settings) -> Self {
        Self { storage, settings }
    }

    /// Stage 1: register a school and issue its code.
    pub async fn register_school(&self, request: RegisterSchoolRequest) -> Result<School> {
        debug!(school = %request.name, "Validating school registration");

        let mut v = Validator::new();
        v.min_len("name", &request.name, 3)
            .min_len("address", &request.address, 5)
            .require("city", &request.city)
            .require("state", &request.state)
            .digits("pin", &request.pin, 6)
            .digits("contact", &request.contact, 10)
            .email("email", &request.email)
            .min_len("principal_name", &request.principal_name, 2)
            .digits("principal_contact", &request.principal_contact, 10);
        v.finish()?;

        let school_code = self.issue_school_code().await?;
        let school = School {
            id: generate_uuid(),
            school_code,
            name: request.name,
            address: request.address,
            city: request.city,
            state: request.state,
            pin: request.pin,
            contact: request.contact,
            email: request.email,
            principal_name: request.principal_name,
            principal_contact: request.principal_contact,
            created_at: Utc::now(),
        };

        let school = self.storage.create_school(school).await?;
        info!(school_code = %school.school_code, "School registered");

        Ok(school)
    }

    /// Stage 2: register a mentor against a previously issued school code.
    pub async fn register_mentor(&self, request: RegisterMentorRequest) -> Result<Mentor> {
        debug!(school_code = %request.school_code, "Validating mentor registration");

        let mut v = Validator::new();
        if !has_code_shape(&request.school_code, SCHOOL_PREFIX) {
            v.push("school_code", "Invalid school code format");
        }
        v.min_len("full_name", &request.full_name, 2)
            .email("email", &request.email)
            .digits("contact", &request.contact, 10)
            .require("qualification", &request.qualification)
            .require("designation", &request.designation);
        v.finish()?;

        // The referenced school must have been issued, not just look right.
        self.storage
            .get_school_by_code(&request.school_code)
            .await?
            .ok_or_else(|| AppError::NotFound("School code".to_string()))?;

        let mentor_code = self.issue_mentor_code().await?;
        let mentor = Mentor {
            id: generate_uuid(),
            mentor_code,
            school_code: request.school_code,
            full_name: request.full_name,
            email: request.email,
            contact: request.contact,
            qualification: request.qualification,
            designation: request.designation,
            created_at: Utc::now(),
        };

        let mentor = self.storage.create_mentor(mentor).await?;
        info!(
            mentor_code = %mentor.mentor_code,
            school_code = %mentor.school_code,
            "Mentor registered"
        );

        Ok(mentor)
    }

    /// Stage 3: register a candidate with both documents, issue the
    /// candidate code and seat number.
    ///
    /// The deadline is checked before anything else; after it, even a fully
    /// valid submission fails.
    pub async fn register_candidate(
        &self,
        request: RegisterCandidateRequest,
        photo: Option<UploadedDocument>,
        signature: Option<UploadedDocument>,
    ) -> Result<Candidate> {
        if Utc::now() > self.settings.registration.deadline {
            warn!(
                deadline = %self.settings.registration.deadline,
                "Candidate registration after deadline rejected"
            );
            return Err(AppError::DeadlineExceeded);
        }

        debug!(mentor_code = %request.mentor_code, "Validating candidate registration");

        let mut v = Validator::new();
        if !has_code_shape(&request.mentor_code, MENTOR_PREFIX) {
            v.push("mentor_code", "Invalid mentor code format");
        }
        v.min_len("student_name", &request.student_name, 2)
            .require("date_of_birth", &request.date_of_birth)
            .one_of("gender", &request.gender, GENDERS)
            .email("email", &request.email)
            .digits("phone", &request.phone, 10)
            .min_len("parent_name", &request.parent_name, 2)
            .min_len("address", &request.address, 5)
            .require("city", &request.city)
            .require("state", &request.state)
            .digits("pin", &request.pin, 6)
            .require("grade_level", &request.grade_level)
            .min_len("school_name", &request.school_name, 3);
        self.check_document(&mut v, "photo", photo.as_ref());
        self.check_document(&mut v, "signature", signature.as_ref());
        v.finish()?;

        // Both are Some once validation has passed.
        let photo = photo.ok_or_else(|| AppError::invalid("photo", "photo is required"))?;
        let signature =
            signature.ok_or_else(|| AppError::invalid("signature", "signature is required"))?;

        self.storage
            .get_mentor_by_code(&request.mentor_code)
            .await?
            .ok_or_else(|| AppError::NotFound("Mentor code".to_string()))?;

        let id = generate_uuid();
        let candidate_code = self.issue_candidate_code().await?;
        let seat_number = codes::seat_number(self.settings.registration.exam_year);

        let photo_path = self.save_document(&id, "photo", &photo).await?;
        let signature_path = self.save_document(&id, "signature", &signature).await?;

        let candidate = Candidate {
            id,
            candidate_code,
            seat_number,
            mentor_code: request.mentor_code,
            student_name: request.student_name,
            date_of_birth: request.date_of_birth,
            gender: request.gender,
            email: request.email,
            phone: request.phone,
            parent_name: request.parent_name,
            address: request.address,
            city: request.city,
            state: request.state,
            pin: request.pin,
            grade_level: request.grade_level,
            school_name: request.school_name,
            photo_path,
            signature_path,
            payment_status: PAYMENT_PENDING.to_string(),
            hall_ticket_issued: false,
            created_at: Utc::now(),
        };

        let candidate = self.storage.create_candidate(candidate).await?;
        info!(
            candidate_code = %candidate.candidate_code,
            seat_number = %candidate.seat_number,
            mentor_code = %candidate.mentor_code,
            "Candidate registered"
        );

        Ok(candidate)
    }

    /// All schools, most recent first.
    pub async fn list_schools(&self) -> Result<Vec<School>> {
        self.storage.get_schools().await
    }

    /// All mentors, most recent first.
    pub async fn list_mentors(&self) -> Result<Vec<Mentor>> {
        self.storage.get_mentors().await
    }

    fn check_document(&self, v: &mut Validator, field: &str, doc: Option<&UploadedDocument>) {
        let max = self.settings.uploads.max_file_bytes;
        match doc {
            None => {
                v.push(field, format!("{field} is required"));
            }
            Some(doc) if doc.bytes.is_empty() => {
                v.push(field, format!("{field} is empty"));
            }
            Some(doc) if doc.bytes.len() as u64 > max => {
                v.push(field, format!("{field} must not exceed {} bytes", max));
            }
            Some(_) => {}
        }
    }

    async fn issue_school_code(&self) -> Result<String> {
        for _ in 0..MAX_CODE_DRAWS {
            let code = codes::registration_code(SCHOOL_PREFIX);
            if self.storage.get_school_by_code(&code).await?.is_none() {
                return Ok(code);
            }
            warn!(code = %code, "School code collision, redrawing");
        }
        Err(AppError::Storage("school code space exhausted".to_string()))
    }

    async fn issue_mentor_code(&self) -> Result<String> {
        for _ in 0..MAX_CODE_DRAWS {
            let code = codes::registration_code(MENTOR_PREFIX);
            if self.storage.get_mentor_by_code(&code).await?.is_none() {
                return Ok(code);
            }
            warn!(code = %code, "Mentor code collision, redrawing");
        }
        Err(AppError::Storage("mentor code space exhausted".to_string()))
    }

    async fn issue_candidate_code(&self) -> Result<String> {
        for _ in 0..MAX_CODE_DRAWS {
            let code = codes::registration_code(CANDIDATE_PREFIX);
            if self.storage.get_candidate_by_code(&code).await?.is_none() {
                return Ok(code);
            }
            warn!(code = %code, "Candidate code collision, redrawing");
        }
        Err(AppError::Storage(
            "candidate code space exhausted".to_string(),
        ))
    }

    /// Persist an uploaded document under the configured upload directory
    /// and return its path.
    async fn save_document(
        &self,
        candidate_id: &str,
        label: &str,
        doc: &UploadedDocument,
    ) -> Result<String> {
        let dir = Path::new(&self.settings.uploads.dir);
        tokio::fs::create_dir_all(dir).await?;

        let ext = file_extension(&sanitize_filename(&doc.filename))
            .unwrap_or_else(|| "bin".to_string());
        let path = dir.join(format!("{candidate_id}_{label}.{ext}"));
        tokio::fs::write(&path, &doc.bytes).await?;

        debug!(path = %path.display(), size = doc.bytes.len(), "Document stored");
        Ok(path.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use chrono::Duration;

    fn service_with(settings: Settings) -> EnrollmentService {
        EnrollmentService::new(Arc::new(MemoryStorage::new()), settings)
    }

    fn school_request() -> RegisterSchoolRequest {
        RegisterSchoolRequest {
            name: "Test School".to_string(),
            address: "12 MG Road".to_string(),
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            pin: "411001".to_string(),
            contact: "9876543210".to_string(),
            email: "office@testschool.edu".to_string(),
            principal_name: "Dr. Mehta".to_string(),
            principal_contact: "9876543211".to_string(),
        }
    }

    #[tokio::test]
    async fn test_school_registration_issues_sch_code() {
        let service = service_with(Settings::default());
        let school = service.register_school(school_request()).await.unwrap();
        assert!(has_code_shape(&school.school_code, SCHOOL_PREFIX));
    }

    #[tokio::test]
    async fn test_repeated_school_submissions_get_distinct_codes() {
        let service = service_with(Settings::default());
        let first = service.register_school(school_request()).await.unwrap();
        let second = service.register_school(school_request()).await.unwrap();

        assert_ne!(first.school_code, second.school_code);
        assert_ne!(first.id, second.id);
        assert_eq!(service.list_schools().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_school_contact_collects_violations() {
        let service = service_with(Settings::default());
        let request = RegisterSchoolRequest {
            contact: "12345".to_string(),
            pin: "41100".to_string(),
            ..school_request()
        };

        match service.register_school(request).await {
            Err(AppError::Validation(violations)) => {
                let fields: Vec<&str> = violations.iter().map(|f| f.field.as_str()).collect();
                assert!(fields.contains(&"contact"));
                assert!(fields.contains(&"pin"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(service.list_schools().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mentor_with_dangling_school_code_is_rejected() {
        let service = service_with(Settings::default());
        let request = RegisterMentorRequest {
            school_code: "SCHZZZZZZ".to_string(),
            full_name: "Prof. Rao".to_string(),
            email: "rao@example.com".to_string(),
            contact: "9876543212".to_string(),
            qualification: "MSc Physics".to_string(),
            designation: "Senior Teacher".to_string(),
        };

        let err = service.register_mentor(request).await;
        assert!(matches!(err, Err(AppError::NotFound(_))));
        assert!(service.list_mentors().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_candidate_after_deadline_is_rejected() {
        let mut settings = Settings::default();
        settings.registration.deadline = Utc::now() - Duration::days(1);
        let service = service_with(settings);

        let request = RegisterCandidateRequest {
            mentor_code: "MENA1B2C3".to_string(),
            student_name: "Rohan Kumar".to_string(),
            date_of_birth: "2012-04-18".to_string(),
            gender: "male".to_string(),
            email: "rohan@example.com".to_string(),
            phone: "9876543213".to_string(),
            parent_name: "Suresh Kumar".to_string(),
            address: "12 MG Road".to_string(),
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            pin: "411001".to_string(),
            grade_level: "8".to_string(),
            school_name: "Test School".to_string(),
        };
        let doc = UploadedDocument {
            filename: "photo.jpg".to_string(),
            bytes: vec![1, 2, 3],
        };

        let err = service
            .register_candidate(request, Some(doc.clone()), Some(doc))
            .await;
        assert!(matches!(err, Err(AppError::DeadlineExceeded)));
    }

    #[tokio::test]
    async fn test_oversized_document_is_rejected() {
        let mut settings = Settings::default();
        settings.registration.deadline = Utc::now() + Duration::days(30);
        settings.uploads.max_file_bytes = 16;
        let service = service_with(settings);

        let request = RegisterCandidateRequest {
            mentor_code: "MENA1B2C3".to_string(),
            student_name: "Rohan Kumar".to_string(),
            date_of_birth: "2012-04-18".to_string(),
            gender: "male".to_string(),
            email: "rohan@example.com".to_string(),
            phone: "9876543213".to_string(),
            parent_name: "Suresh Kumar".to_string(),
            address: "12 MG Road".to_string(),
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            pin: "411001".to_string(),
            grade_level: "8".to_string(),
            school_name: "Test School".to_string(),
        };
        let small = UploadedDocument {
            filename: "sig.png".to_string(),
            bytes: vec![0; 8],
        };
        let big = UploadedDocument {
            filename: "photo.jpg".to_string(),
            bytes: vec![0; 64],
        };

        match service.register_candidate(request, Some(big), Some(small)).await {
            Err(AppError::Validation(violations)) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "photo");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
