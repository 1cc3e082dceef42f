//! Contact submission service
//!
//! Validates public contact-form submissions and persists them through the
//! storage adapter. Validation collects every violated field before the
//! request is rejected, so nothing is persisted on a partial failure.

use std::sync::Arc;

use tracing::{debug, info};

use crate::models::{Contact, CreateContactRequest};
use crate::storage::Storage;
use crate::utils::errors::Result;
use crate::utils::validation::Validator;

#[derive(Clone)]
pub struct ContactService {
    storage: Arc<dyn Storage>,
}

impl ContactService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Validate and persist a contact submission.
    pub async fn submit(&self, request: CreateContactRequest) -> Result<Contact> {
        debug!(email = %request.email, "Validating contact submission");

        let mut v = Validator::new();
        v.min_len("first_name", &request.first_name, 2)
            .min_len("last_name", &request.last_name, 2)
            .email("email", &request.email)
            .require("grade_level", &request.grade_level)
            .min_len("message", &request.message, 10);
        v.finish()?;

        let contact = self.storage.create_contact(request).await?;
        info!(contact_id = %contact.id, "Contact submission stored");

        Ok(contact)
    }

    /// All contacts, most recent first.
    pub async fn list(&self) -> Result<Vec<Contact>> {
        self.storage.get_contacts().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::utils::errors::AppError;

    fn valid_request() -> CreateContactRequest {
        CreateContactRequest {
            first_name: "Asha".to_string(),
            last_name: "Patil".to_string(),
            email: "asha@example.com".to_string(),
            grade_level: "9".to_string(),
            message: "Interested in the mains exam.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_valid_submission_is_stored() {
        let service = ContactService::new(Arc::new(MemoryStorage::new()));
        let contact = service.submit(valid_request()).await.unwrap();
        assert!(!contact.id.is_empty());

        let all = service.list().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_submission_is_not_persisted() {
        let service = ContactService::new(Arc::new(MemoryStorage::new()));
        let request = CreateContactRequest {
            email: "bad".to_string(),
            message: "short".to_string(),
            ..valid_request()
        };

        match service.submit(request).await {
            Err(AppError::Validation(violations)) => {
                assert_eq!(violations.len(), 2);
            }
            other => panic!("expected validation error, got {other:?}"),
        }

        assert!(service.list().await.unwrap().is_empty());
    }
}
