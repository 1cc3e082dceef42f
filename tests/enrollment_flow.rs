//! End-to-end enrollment pipeline scenario
//!
//! Drives the three stages in order through the services, the way the
//! frontend does: register a school, feed its code to a mentor
//! registration, feed the mentor code to a candidate registration with
//! both documents attached.

mod helpers;

use std::sync::Arc;

use regex::Regex;
use sciquest::services::EnrollmentService;
use sciquest::storage::{MemoryStorage, Storage};
use sciquest::utils::errors::AppError;
use tempfile::TempDir;

fn setup() -> (EnrollmentService, Arc<MemoryStorage>, TempDir) {
    let dir = TempDir::new().expect("temp dir");
    let settings = helpers::test_settings(dir.path());
    let storage = Arc::new(MemoryStorage::new());
    let service = EnrollmentService::new(storage.clone(), settings);
    (service, storage, dir)
}

#[tokio::test]
async fn full_pipeline_links_codes_across_stages() {
    let (service, storage, _dir) = setup();

    // Stage 1: school
    let school = service
        .register_school(helpers::school_request())
        .await
        .expect("school registration");
    assert!(Regex::new(r"^SCH[A-Z0-9]+$").unwrap().is_match(&school.school_code));

    // Stage 2: mentor referencing the issued school code
    let mentor = service
        .register_mentor(helpers::mentor_request(&school.school_code))
        .await
        .expect("mentor registration");
    assert!(Regex::new(r"^MEN[A-Z0-9]+$").unwrap().is_match(&mentor.mentor_code));
    assert_eq!(mentor.school_code, school.school_code);

    // Stage 3: candidate referencing the issued mentor code
    let candidate = service
        .register_candidate(
            helpers::candidate_request(&mentor.mentor_code),
            Some(helpers::document("photo.jpg")),
            Some(helpers::document("signature.png")),
        )
        .await
        .expect("candidate registration");

    assert!(Regex::new(r"^CAN[A-Z0-9]+$").unwrap().is_match(&candidate.candidate_code));
    assert!(Regex::new(r"^\d{4}\d{5}$").unwrap().is_match(&candidate.seat_number));
    assert!(candidate.seat_number.starts_with("2026"));
    assert_eq!(candidate.mentor_code, mentor.mentor_code);
    assert_eq!(candidate.payment_status, "pending");
    assert!(!candidate.hall_ticket_issued);

    // Documents landed in the upload directory
    assert!(std::path::Path::new(&candidate.photo_path).exists());
    assert!(std::path::Path::new(&candidate.signature_path).exists());

    // And the record is retrievable through storage
    let stored = storage
        .get_candidate_by_id(&candidate.id)
        .await
        .unwrap()
        .expect("candidate stored");
    assert_eq!(stored.seat_number, candidate.seat_number);
}

#[tokio::test]
async fn duplicate_school_submissions_yield_distinct_records() {
    let (service, _storage, _dir) = setup();

    let first = service.register_school(helpers::school_request()).await.unwrap();
    let second = service.register_school(helpers::school_request()).await.unwrap();

    assert_ne!(first.school_code, second.school_code);
    assert_ne!(first.id, second.id);
    assert_eq!(service.list_schools().await.unwrap().len(), 2);
}

#[tokio::test]
async fn candidate_with_missing_signature_is_not_persisted() {
    let (service, storage, _dir) = setup();

    let school = service.register_school(helpers::school_request()).await.unwrap();
    let mentor = service
        .register_mentor(helpers::mentor_request(&school.school_code))
        .await
        .unwrap();

    let result = service
        .register_candidate(
            helpers::candidate_request(&mentor.mentor_code),
            Some(helpers::document("photo.jpg")),
            None,
        )
        .await;

    match result {
        Err(AppError::Validation(violations)) => {
            assert!(violations.iter().any(|v| v.field == "signature"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    assert!(storage.get_candidates().await.unwrap().is_empty());
}

#[tokio::test]
async fn candidate_with_dangling_mentor_code_is_rejected() {
    let (service, storage, _dir) = setup();

    let result = service
        .register_candidate(
            helpers::candidate_request("MENZZZZZZ"),
            Some(helpers::document("photo.jpg")),
            Some(helpers::document("signature.png")),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(storage.get_candidates().await.unwrap().is_empty());
}
