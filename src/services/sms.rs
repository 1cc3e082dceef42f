//! SMS broadcast service
//!
//! Dispatches admin broadcasts through an external HTTP gateway. Delivery
//! is best-effort: a failure for one recipient is logged and does not stop
//! the rest of the batch. Demo mode fabricates success locally and produces
//! no network traffic.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::utils::errors::{AppError, Result};
use crate::utils::validation::Validator;

/// Outcome of one broadcast request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsDispatchReport {
    pub requested: usize,
    pub accepted: usize,
    pub failed: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
struct GatewayMessage<'a> {
    sender: &'a str,
    to: &'a str,
    message: &'a str,
}

#[derive(Clone)]
pub struct SmsService {
    client: Client,
    settings: Settings,
}

impl SmsService {
    pub fn new(settings: Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.sms.timeout_seconds))
            .user_agent("SciQuest-Backend/1.0")
            .build()
            .map_err(AppError::Http)?;

        Ok(Self { client, settings })
    }

    /// Send `message` to every recipient, continuing past individual
    /// failures, and report what was accepted.
    pub async fn broadcast(&self, message: &str, recipients: &[String]) -> Result<SmsDispatchReport> {
        let mut v = Validator::new();
        v.min_len("message", message, 3);
        if recipients.is_empty() {
            v.push("recipients", "recipients must not be empty");
        }
        v.finish()?;

        if self.settings.sms.demo_mode {
            info!(
                recipients = recipients.len(),
                "Demo mode: SMS broadcast fabricated locally"
            );
            return Ok(SmsDispatchReport {
                requested: recipients.len(),
                accepted: recipients.len(),
                failed: Vec::new(),
            });
        }

        debug!(recipients = recipients.len(), "Dispatching SMS broadcast");

        let mut accepted = 0;
        let mut failed = Vec::new();

        // Chunked with a small delay to be respectful to the gateway.
        for chunk in recipients.chunks(10) {
            for recipient in chunk {
                match self.send_one(recipient, message).await {
                    Ok(()) => accepted += 1,
                    Err(e) => {
                        warn!(recipient = %recipient, error = %e, "SMS dispatch failed");
                        failed.push(recipient.clone());
                    }
                }

                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        }

        info!(
            requested = recipients.len(),
            accepted = accepted,
            failed = failed.len(),
            "SMS broadcast completed"
        );

        Ok(SmsDispatchReport {
            requested: recipients.len(),
            accepted,
            failed,
        })
    }

    async fn send_one(&self, recipient: &str, message: &str) -> Result<()> {
        let payload = GatewayMessage {
            sender: &self.settings.sms.sender_id,
            to: recipient,
            message,
        };

        let response = self
            .client
            .post(&self.settings.sms.gateway_url)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ServiceUnavailable(format!(
                "gateway returned {}",
                response.status()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_mode_fabricates_success() {
        let service = SmsService::new(Settings::default()).unwrap();
        let recipients = vec!["9876543210".to_string(), "9876543211".to_string()];

        let report = service.broadcast("Exam on Sunday", &recipients).await.unwrap();
        assert_eq!(report.requested, 2);
        assert_eq!(report.accepted, 2);
        assert!(report.failed.is_empty());
    }

    #[tokio::test]
    async fn test_empty_broadcast_is_rejected() {
        let service = SmsService::new(Settings::default()).unwrap();
        assert!(service.broadcast("Exam on Sunday", &[]).await.is_err());
        assert!(service.broadcast("", &["9876543210".to_string()]).await.is_err());
    }
}
