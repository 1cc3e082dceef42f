//! Postgres storage implementation
//!
//! The durable variant. Each create touches exactly one row, so no
//! multi-statement transactions are needed; concurrency control is the
//! database's per-row atomicity. The pool connects lazily: construction
//! never blocks, and a request that arrives before the first connection is
//! established surfaces a storage error instead of queueing.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Pool, Postgres};
use std::time::Duration;

use crate::config::DatabaseConfig;
use crate::models::registration::PAYMENT_PENDING;
use crate::models::{
    AdminUser, Candidate, Contact, CreateContactRequest, CreateRegistrationRequest,
    CreateUserRequest, ExamRegistration, Mentor, School,
};
use crate::utils::codes::generate_uuid;
use crate::utils::errors::{AppError, Result};

pub type DatabasePool = Pool<Postgres>;

const CANDIDATE_COLUMNS: &str = "id, candidate_code, seat_number, mentor_code, student_name, \
     date_of_birth, gender, email, phone, parent_name, address, city, state, pin, grade_level, \
     school_name, photo_path, signature_path, payment_status, hall_ticket_issued, created_at";

/// Create a lazily-connecting database pool.
pub fn create_pool(config: &DatabaseConfig) -> Result<DatabasePool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(30))
        .idle_timeout(Some(Duration::from_secs(600)))
        .max_lifetime(Some(Duration::from_secs(1800)))
        .connect_lazy(&config.url)?;

    tracing::info!("Database connection pool created");
    Ok(pool)
}

/// Run database migrations
pub async fn run_migrations(pool: &DatabasePool) -> Result<()> {
    tracing::info!("Running database migrations...");

    sqlx::migrate!("./migrations").run(pool).await?;

    tracing::info!("Database migrations completed");
    Ok(())
}

/// Check database health
pub async fn health_check(pool: &DatabasePool) -> Result<()> {
    sqlx::query("SELECT 1").execute(pool).await?;

    Ok(())
}

#[derive(Debug, Clone)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl super::Storage for PgStorage {
    async fn get_user(&self, id: &str) -> Result<Option<AdminUser>> {
        let user = sqlx::query_as::<_, AdminUser>(
            "SELECT id, username, password, created_at FROM admin_users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<AdminUser>> {
        let user = sqlx::query_as::<_, AdminUser>(
            "SELECT id, username, password, created_at FROM admin_users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create_user(&self, request: CreateUserRequest) -> Result<AdminUser> {
        let result = sqlx::query_as::<_, AdminUser>(
            r#"
            INSERT INTO admin_users (id, username, password, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, password, created_at
            "#,
        )
        .bind(generate_uuid())
        .bind(&request.username)
        .bind(&request.password)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Err(AppError::Storage(
                format!("username already exists: {}", request.username),
            )),
            Err(e) => Err(e.into()),
        }
    }

    async fn create_contact(&self, request: CreateContactRequest) -> Result<Contact> {
        let contact = sqlx::query_as::<_, Contact>(
            r#"
            INSERT INTO contacts (id, first_name, last_name, email, grade_level, message, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, first_name, last_name, email, grade_level, message, created_at
            "#,
        )
        .bind(generate_uuid())
        .bind(request.first_name)
        .bind(request.last_name)
        .bind(request.email)
        .bind(request.grade_level)
        .bind(request.message)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(contact)
    }

    async fn get_contacts(&self) -> Result<Vec<Contact>> {
        let contacts = sqlx::query_as::<_, Contact>(
            "SELECT id, first_name, last_name, email, grade_level, message, created_at \
             FROM contacts ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(contacts)
    }

    async fn create_registration(
        &self,
        request: CreateRegistrationRequest,
    ) -> Result<ExamRegistration> {
        let registration = sqlx::query_as::<_, ExamRegistration>(
            r#"
            INSERT INTO exam_registrations
                (id, student_name, email, phone, grade_level, school_name, parent_name,
                 parent_phone, address, exam_type, payment_status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, student_name, email, phone, grade_level, school_name, parent_name,
                      parent_phone, address, exam_type, payment_status, created_at
            "#,
        )
        .bind(generate_uuid())
        .bind(request.student_name)
        .bind(request.email)
        .bind(request.phone)
        .bind(request.grade_level)
        .bind(request.school_name)
        .bind(request.parent_name)
        .bind(request.parent_phone)
        .bind(request.address)
        .bind(request.exam_type)
        .bind(PAYMENT_PENDING)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(registration)
    }

    async fn get_registrations(&self) -> Result<Vec<ExamRegistration>> {
        let registrations = sqlx::query_as::<_, ExamRegistration>(
            "SELECT id, student_name, email, phone, grade_level, school_name, parent_name, \
             parent_phone, address, exam_type, payment_status, created_at \
             FROM exam_registrations ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(registrations)
    }

    async fn get_registration_by_id(&self, id: &str) -> Result<Option<ExamRegistration>> {
        let registration = sqlx::query_as::<_, ExamRegistration>(
            "SELECT id, student_name, email, phone, grade_level, school_name, parent_name, \
             parent_phone, address, exam_type, payment_status, created_at \
             FROM exam_registrations WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(registration)
    }

    async fn create_school(&self, school: School) -> Result<School> {
        let school = sqlx::query_as::<_, School>(
            r#"
            INSERT INTO schools
                (id, school_code, name, address, city, state, pin, contact, email,
                 principal_name, principal_contact, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, school_code, name, address, city, state, pin, contact, email,
                      principal_name, principal_contact, created_at
            "#,
        )
        .bind(school.id)
        .bind(school.school_code)
        .bind(school.name)
        .bind(school.address)
        .bind(school.city)
        .bind(school.state)
        .bind(school.pin)
        .bind(school.contact)
        .bind(school.email)
        .bind(school.principal_name)
        .bind(school.principal_contact)
        .bind(school.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(school)
    }

    async fn get_school_by_code(&self, code: &str) -> Result<Option<School>> {
        let school = sqlx::query_as::<_, School>(
            "SELECT id, school_code, name, address, city, state, pin, contact, email, \
             principal_name, principal_contact, created_at FROM schools WHERE school_code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(school)
    }

    async fn get_schools(&self) -> Result<Vec<School>> {
        let schools = sqlx::query_as::<_, School>(
            "SELECT id, school_code, name, address, city, state, pin, contact, email, \
             principal_name, principal_contact, created_at \
             FROM schools ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(schools)
    }

    async fn create_mentor(&self, mentor: Mentor) -> Result<Mentor> {
        let mentor = sqlx::query_as::<_, Mentor>(
            r#"
            INSERT INTO mentors
                (id, mentor_code, school_code, full_name, email, contact, qualification,
                 designation, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, mentor_code, school_code, full_name, email, contact, qualification,
                      designation, created_at
            "#,
        )
        .bind(mentor.id)
        .bind(mentor.mentor_code)
        .bind(mentor.school_code)
        .bind(mentor.full_name)
        .bind(mentor.email)
        .bind(mentor.contact)
        .bind(mentor.qualification)
        .bind(mentor.designation)
        .bind(mentor.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(mentor)
    }

    async fn get_mentor_by_code(&self, code: &str) -> Result<Option<Mentor>> {
        let mentor = sqlx::query_as::<_, Mentor>(
            "SELECT id, mentor_code, school_code, full_name, email, contact, qualification, \
             designation, created_at FROM mentors WHERE mentor_code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(mentor)
    }

    async fn get_mentors(&self) -> Result<Vec<Mentor>> {
        let mentors = sqlx::query_as::<_, Mentor>(
            "SELECT id, mentor_code, school_code, full_name, email, contact, qualification, \
             designation, created_at FROM mentors ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(mentors)
    }

    async fn create_candidate(&self, candidate: Candidate) -> Result<Candidate> {
        let candidate = sqlx::query_as::<_, Candidate>(&format!(
            r#"
            INSERT INTO candidates
                (id, candidate_code, seat_number, mentor_code, student_name, date_of_birth,
                 gender, email, phone, parent_name, address, city, state, pin, grade_level,
                 school_name, photo_path, signature_path, payment_status, hall_ticket_issued,
                 created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                    $17, $18, $19, $20, $21)
            RETURNING {CANDIDATE_COLUMNS}
            "#
        ))
        .bind(candidate.id)
        .bind(candidate.candidate_code)
        .bind(candidate.seat_number)
        .bind(candidate.mentor_code)
        .bind(candidate.student_name)
        .bind(candidate.date_of_birth)
        .bind(candidate.gender)
        .bind(candidate.email)
        .bind(candidate.phone)
        .bind(candidate.parent_name)
        .bind(candidate.address)
        .bind(candidate.city)
        .bind(candidate.state)
        .bind(candidate.pin)
        .bind(candidate.grade_level)
        .bind(candidate.school_name)
        .bind(candidate.photo_path)
        .bind(candidate.signature_path)
        .bind(candidate.payment_status)
        .bind(candidate.hall_ticket_issued)
        .bind(candidate.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(candidate)
    }

    async fn get_candidate_by_id(&self, id: &str) -> Result<Option<Candidate>> {
        let candidate = sqlx::query_as::<_, Candidate>(&format!(
            "SELECT {CANDIDATE_COLUMNS} FROM candidates WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(candidate)
    }

    async fn get_candidate_by_code(&self, code: &str) -> Result<Option<Candidate>> {
        let candidate = sqlx::query_as::<_, Candidate>(&format!(
            "SELECT {CANDIDATE_COLUMNS} FROM candidates WHERE candidate_code = $1"
        ))
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(candidate)
    }

    async fn get_candidates(&self) -> Result<Vec<Candidate>> {
        let candidates = sqlx::query_as::<_, Candidate>(&format!(
            "SELECT {CANDIDATE_COLUMNS} FROM candidates ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(candidates)
    }

    async fn set_hall_ticket_issued(&self, id: &str) -> Result<Candidate> {
        let candidate = sqlx::query_as::<_, Candidate>(&format!(
            "UPDATE candidates SET hall_ticket_issued = TRUE WHERE id = $1 \
             RETURNING {CANDIDATE_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        candidate.ok_or_else(|| AppError::NotFound("Candidate".to_string()))
    }
}
