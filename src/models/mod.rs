//! Data models for all entity kinds

pub mod candidate;
pub mod contact;
pub mod mentor;
pub mod registration;
pub mod school;
pub mod user;

pub use candidate::{Candidate, RegisterCandidateRequest, UploadedDocument};
pub use contact::{Contact, CreateContactRequest};
pub use mentor::{Mentor, RegisterMentorRequest};
pub use registration::{CreateRegistrationRequest, ExamRegistration};
pub use school::{RegisterSchoolRequest, School};
pub use user::{AdminUser, CreateUserRequest, LoginRequest};
