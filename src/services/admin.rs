//! Admin operations service
//!
//! Dashboard aggregates, candidate listing, and hall-ticket issuance.

use std::sync::Arc;

use tracing::info;

use crate::models::registration::PAYMENT_PAID;
use crate::models::Candidate;
use crate::storage::Storage;
use crate::utils::errors::{AppError, Result};

#[derive(Clone)]
pub struct AdminService {
    storage: Arc<dyn Storage>,
}

impl AdminService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Aggregate counts for the admin dashboard.
    pub async fn dashboard(&self) -> Result<serde_json::Value> {
        let schools = self.storage.get_schools().await?;
        let mentors = self.storage.get_mentors().await?;
        let candidates = self.storage.get_candidates().await?;
        let contacts = self.storage.get_contacts().await?;
        let registrations = self.storage.get_registrations().await?;

        let paid_candidates = candidates
            .iter()
            .filter(|c| c.payment_status == PAYMENT_PAID)
            .count();
        let hall_tickets_issued = candidates.iter().filter(|c| c.hall_ticket_issued).count();

        let dashboard = serde_json::json!({
            "schools": schools.len(),
            "mentors": mentors.len(),
            "candidates": {
                "total": candidates.len(),
                "paid": paid_candidates,
                "pending_payment": candidates.len() - paid_candidates,
                "hall_tickets_issued": hall_tickets_issued,
            },
            "contacts": contacts.len(),
            "exam_registrations": registrations.len(),
        });

        Ok(dashboard)
    }

    /// All candidates, most recent first.
    pub async fn list_candidates(&self) -> Result<Vec<Candidate>> {
        self.storage.get_candidates().await
    }

    /// Mark a candidate's hall ticket as issued. Requires confirmed payment.
    pub async fn issue_hall_ticket(&self, candidate_id: &str) -> Result<Candidate> {
        let candidate = self
            .storage
            .get_candidate_by_id(candidate_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Candidate".to_string()))?;

        if candidate.payment_status != PAYMENT_PAID {
            return Err(AppError::invalid(
                "payment_status",
                "hall ticket requires payment to be confirmed",
            ));
        }

        let candidate = self.storage.set_hall_ticket_issued(candidate_id).await?;
        info!(
            candidate_id = %candidate.id,
            seat_number = %candidate.seat_number,
            "Hall ticket issued"
        );

        Ok(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[tokio::test]
    async fn test_dashboard_on_empty_storage() {
        let service = AdminService::new(Arc::new(MemoryStorage::new()));
        let dashboard = service.dashboard().await.unwrap();
        assert_eq!(dashboard["schools"], 0);
        assert_eq!(dashboard["candidates"]["total"], 0);
    }

    #[tokio::test]
    async fn test_hall_ticket_for_unknown_candidate() {
        let service = AdminService::new(Arc::new(MemoryStorage::new()));
        let err = service.issue_hall_ticket("missing").await;
        assert!(matches!(err, Err(AppError::NotFound(_))));
    }
}
