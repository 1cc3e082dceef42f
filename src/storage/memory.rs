//! In-memory storage implementation
//!
//! Backs development and tests. Records live in per-collection vectors in
//! insertion order; list operations return them newest first. Username
//! uniqueness is enforced here exactly as the database index enforces it in
//! the durable variant, so both pass the same contract suite.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::{
    AdminUser, Candidate, Contact, CreateContactRequest, CreateRegistrationRequest,
    CreateUserRequest, ExamRegistration, Mentor, School,
};
use crate::models::registration::PAYMENT_PENDING;
use crate::utils::codes::generate_uuid;
use crate::utils::errors::{AppError, Result};

#[derive(Debug, Default)]
pub struct MemoryStorage {
    users: RwLock<Vec<AdminUser>>,
    contacts: RwLock<Vec<Contact>>,
    registrations: RwLock<Vec<ExamRegistration>>,
    schools: RwLock<Vec<School>>,
    mentors: RwLock<Vec<Mentor>>,
    candidates: RwLock<Vec<Candidate>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first<T: Clone>(records: &[T]) -> Vec<T> {
    records.iter().rev().cloned().collect()
}

#[async_trait]
impl super::Storage for MemoryStorage {
    async fn get_user(&self, id: &str) -> Result<Option<AdminUser>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<AdminUser>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, request: CreateUserRequest) -> Result<AdminUser> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == request.username) {
            return Err(AppError::Storage(format!(
                "username already exists: {}",
                request.username
            )));
        }

        let user = AdminUser {
            id: generate_uuid(),
            username: request.username,
            password: request.password,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn create_contact(&self, request: CreateContactRequest) -> Result<Contact> {
        let contact = Contact {
            id: generate_uuid(),
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            grade_level: request.grade_level,
            message: request.message,
            created_at: Utc::now(),
        };
        self.contacts.write().await.push(contact.clone());
        Ok(contact)
    }

    async fn get_contacts(&self) -> Result<Vec<Contact>> {
        let contacts = self.contacts.read().await;
        Ok(newest_first(&contacts))
    }

    async fn create_registration(
        &self,
        request: CreateRegistrationRequest,
    ) -> Result<ExamRegistration> {
        let registration = ExamRegistration {
            id: generate_uuid(),
            student_name: request.student_name,
            email: request.email,
            phone: request.phone,
            grade_level: request.grade_level,
            school_name: request.school_name,
            parent_name: request.parent_name,
            parent_phone: request.parent_phone,
            address: request.address,
            exam_type: request.exam_type,
            payment_status: PAYMENT_PENDING.to_string(),
            created_at: Utc::now(),
        };
        self.registrations.write().await.push(registration.clone());
        Ok(registration)
    }

    async fn get_registrations(&self) -> Result<Vec<ExamRegistration>> {
        let registrations = self.registrations.read().await;
        Ok(newest_first(&registrations))
    }

    async fn get_registration_by_id(&self, id: &str) -> Result<Option<ExamRegistration>> {
        let registrations = self.registrations.read().await;
        Ok(registrations.iter().find(|r| r.id == id).cloned())
    }

    async fn create_school(&self, school: School) -> Result<School> {
        self.schools.write().await.push(school.clone());
        Ok(school)
    }

    async fn get_school_by_code(&self, code: &str) -> Result<Option<School>> {
        let schools = self.schools.read().await;
        Ok(schools.iter().find(|s| s.school_code == code).cloned())
    }

    async fn get_schools(&self) -> Result<Vec<School>> {
        let schools = self.schools.read().await;
        Ok(newest_first(&schools))
    }

    async fn create_mentor(&self, mentor: Mentor) -> Result<Mentor> {
        self.mentors.write().await.push(mentor.clone());
        Ok(mentor)
    }

    async fn get_mentor_by_code(&self, code: &str) -> Result<Option<Mentor>> {
        let mentors = self.mentors.read().await;
        Ok(mentors.iter().find(|m| m.mentor_code == code).cloned())
    }

    async fn get_mentors(&self) -> Result<Vec<Mentor>> {
        let mentors = self.mentors.read().await;
        Ok(newest_first(&mentors))
    }

    async fn create_candidate(&self, candidate: Candidate) -> Result<Candidate> {
        self.candidates.write().await.push(candidate.clone());
        Ok(candidate)
    }

    async fn get_candidate_by_id(&self, id: &str) -> Result<Option<Candidate>> {
        let candidates = self.candidates.read().await;
        Ok(candidates.iter().find(|c| c.id == id).cloned())
    }

    async fn get_candidate_by_code(&self, code: &str) -> Result<Option<Candidate>> {
        let candidates = self.candidates.read().await;
        Ok(candidates.iter().find(|c| c.candidate_code == code).cloned())
    }

    async fn get_candidates(&self) -> Result<Vec<Candidate>> {
        let candidates = self.candidates.read().await;
        Ok(newest_first(&candidates))
    }

    async fn set_hall_ticket_issued(&self, id: &str) -> Result<Candidate> {
        let mut candidates = self.candidates.write().await;
        match candidates.iter_mut().find(|c| c.id == id) {
            Some(candidate) => {
                candidate.hall_ticket_issued = true;
                Ok(candidate.clone())
            }
            None => Err(AppError::NotFound("Candidate".to_string())),
        }
    }
}
