//! Storage adapter
//!
//! One capability contract over the three entity families (admin users,
//! public submissions, enrollment records), with two interchangeable
//! implementations: an in-memory map for development and tests, and a
//! Postgres-backed variant for production. The variant is selected once at
//! startup from configuration and injected into services as
//! `Arc<dyn Storage>`; both implementations are exercised by the shared
//! contract suite in `tests/storage_contract.rs`.
//!
//! Failure semantics are uniform: every operation returns `Result`, and a
//! storage failure on a list operation is an error, never an empty list.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{Settings, StorageBackend};
use crate::models::{
    AdminUser, Candidate, Contact, CreateContactRequest, CreateRegistrationRequest,
    CreateUserRequest, ExamRegistration, Mentor, School,
};
use crate::utils::errors::Result;

pub use memory::MemoryStorage;
pub use postgres::{create_pool, PgStorage};

/// Persistence contract for all entity kinds.
///
/// Create operations for public submissions stamp the id, creation
/// timestamp, and defaults server-side; enrollment records arrive fully
/// assembled because the issuance service draws their codes first.
#[async_trait]
pub trait Storage: Send + Sync {
    // Admin users
    async fn get_user(&self, id: &str) -> Result<Option<AdminUser>>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<AdminUser>>;
    /// Fails with a storage error if the username is already taken.
    async fn create_user(&self, request: CreateUserRequest) -> Result<AdminUser>;

    // Contacts
    async fn create_contact(&self, request: CreateContactRequest) -> Result<Contact>;
    /// All contacts, most recent first.
    async fn get_contacts(&self) -> Result<Vec<Contact>>;

    // Exam registrations
    async fn create_registration(&self, request: CreateRegistrationRequest)
        -> Result<ExamRegistration>;
    /// All registrations, most recent first.
    async fn get_registrations(&self) -> Result<Vec<ExamRegistration>>;
    async fn get_registration_by_id(&self, id: &str) -> Result<Option<ExamRegistration>>;

    // Schools
    async fn create_school(&self, school: School) -> Result<School>;
    async fn get_school_by_code(&self, code: &str) -> Result<Option<School>>;
    async fn get_schools(&self) -> Result<Vec<School>>;

    // Mentors
    async fn create_mentor(&self, mentor: Mentor) -> Result<Mentor>;
    async fn get_mentor_by_code(&self, code: &str) -> Result<Option<Mentor>>;
    async fn get_mentors(&self) -> Result<Vec<Mentor>>;

    // Candidates
    async fn create_candidate(&self, candidate: Candidate) -> Result<Candidate>;
    async fn get_candidate_by_id(&self, id: &str) -> Result<Option<Candidate>>;
    async fn get_candidate_by_code(&self, code: &str) -> Result<Option<Candidate>>;
    async fn get_candidates(&self) -> Result<Vec<Candidate>>;
    /// Flips the hall-ticket flag; fails with `NotFound` for an unknown id.
    async fn set_hall_ticket_issued(&self, id: &str) -> Result<Candidate>;
}

/// Build the storage variant selected by configuration.
pub async fn build_storage(settings: &Settings) -> Result<Arc<dyn Storage>> {
    match settings.storage.backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage backend");
            Ok(Arc::new(MemoryStorage::new()))
        }
        StorageBackend::Postgres => {
            tracing::info!("Using postgres storage backend");
            let pool = create_pool(&settings.database)?;
            postgres::run_migrations(&pool).await?;
            Ok(Arc::new(PgStorage::new(pool)))
        }
    }
}
