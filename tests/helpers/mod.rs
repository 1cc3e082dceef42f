//! Shared fixtures for integration tests
#![allow(dead_code)]

use std::path::Path;

use chrono::{Duration, Utc};
use sciquest::config::Settings;
use sciquest::models::{
    Candidate, Mentor, RegisterCandidateRequest, RegisterMentorRequest, RegisterSchoolRequest,
    School, UploadedDocument,
};
use sciquest::utils::codes::generate_uuid;

/// Settings for tests: in-memory storage, uploads under `dir`, deadline in
/// the future.
pub fn test_settings(dir: &Path) -> Settings {
    let mut settings = Settings::default();
    settings.uploads.dir = dir.to_string_lossy().into_owned();
    settings.registration.deadline = Utc::now() + Duration::days(30);
    settings
}

pub fn school_request() -> RegisterSchoolRequest {
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

pub fn mentor_request(school_code: &str) -> RegisterMentorRequest {
    RegisterMentorRequest {
        school_code: school_code.to_string(),
        full_name: "Prof. Rao".to_string(),
        email: "rao@testschool.edu".to_string(),
        contact: "9876543212".to_string(),
        qualification: "MSc Physics".to_string(),
        designation: "Senior Teacher".to_string(),
    }
}

pub fn candidate_request(mentor_code: &str) -> RegisterCandidateRequest {
    RegisterCandidateRequest {
        mentor_code: mentor_code.to_string(),
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
    }
}

pub fn document(name: &str) -> UploadedDocument {
    UploadedDocument {
        filename: name.to_string(),
        bytes: vec![0xFF, 0xD8, 0xFF, 0xE0],
    }
}

/// A fully assembled school record, for storage-level tests.
pub fn school_record(school_code: &str) -> School {
    School {
        id: generate_uuid(),
        school_code: school_code.to_string(),
        name: "Test School".to_string(),
        address: "12 MG Road".to_string(),
        city: "Pune".to_string(),
        state: "Maharashtra".to_string(),
        pin: "411001".to_string(),
        contact: "9876543210".to_string(),
        email: "office@testschool.edu".to_string(),
        principal_name: "Dr. Mehta".to_string(),
        principal_contact: "9876543211".to_string(),
        created_at: Utc::now(),
    }
}

/// A fully assembled mentor record, for storage-level tests.
pub fn mentor_record(mentor_code: &str, school_code: &str) -> Mentor {
    Mentor {
        id: generate_uuid(),
        mentor_code: mentor_code.to_string(),
        school_code: school_code.to_string(),
        full_name: "Prof. Rao".to_string(),
        email: "rao@testschool.edu".to_string(),
        contact: "9876543212".to_string(),
        qualification: "MSc Physics".to_string(),
        designation: "Senior Teacher".to_string(),
        created_at: Utc::now(),
    }
}

/// A fully assembled candidate record, for storage-level tests.
pub fn candidate_record(candidate_code: &str, mentor_code: &str) -> Candidate {
    Candidate {
        id: generate_uuid(),
        candidate_code: candidate_code.to_string(),
        seat_number: "202600042".to_string(),
        mentor_code: mentor_code.to_string(),
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
        photo_path: "uploads/test_photo.jpg".to_string(),
        signature_path: "uploads/test_signature.png".to_string(),
        payment_status: "pending".to_string(),
        hall_ticket_issued: false,
        created_at: Utc::now(),
    }
}
