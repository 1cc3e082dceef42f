//! Services module
//!
//! This module contains business logic services

pub mod admin;
pub mod auth;
pub mod contact;
pub mod enrollment;
pub mod registration;
pub mod sms;

// Re-export commonly used services
pub use admin::AdminService;
pub use auth::{AuthService, Claims};
pub use contact::ContactService;
pub use enrollment::EnrollmentService;
pub use registration::RegistrationService;
pub use sms::{SmsDispatchReport, SmsService};

use std::sync::Arc;

use crate::config::Settings;
use crate::storage::Storage;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub contact_service: ContactService,
    pub registration_service: RegistrationService,
    pub enrollment_service: EnrollmentService,
    pub auth_service: AuthService,
    pub admin_service: AdminService,
    pub sms_service: SmsService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: Settings, storage: Arc<dyn Storage>) -> Result<Self> {
        let contact_service = ContactService::new(storage.clone());
        let registration_service = RegistrationService::new(storage.clone());
        let enrollment_service = EnrollmentService::new(storage.clone(), settings.clone());
        let auth_service = AuthService::new(storage.clone(), settings.clone());
        let admin_service = AdminService::new(storage);
        let sms_service = SmsService::new(settings)?;

        Ok(Self {
            contact_service,
            registration_service,
            enrollment_service,
            auth_service,
            admin_service,
            sms_service,
        })
    }
}
