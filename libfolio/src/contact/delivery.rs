//! Delivery service abstraction and the transactional email client
//!
//! The contact form forwards submissions to a third-party template email
//! service identified by three opaque ids (service, template, public
//! key). Exactly one attempt is made per user-initiated submit; there is
//! no retry logic at this layer.

use async_trait::async_trait;
use serde_json::json;

use crate::config::DeliveryConfig;
use crate::contact::ContactMessage;
use crate::error::{DeliveryError, Result};

/// EmailJS-compatible REST endpoint used when the config has no override
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Acknowledgment from the delivery service
#[derive(Debug, Clone)]
pub struct DeliveryReceipt {
    /// Raw acknowledgment text from the service (usually "OK")
    pub status: String,
}

/// A service that can forward one contact submission
#[async_trait]
pub trait DeliveryService: Send + Sync {
    /// Human-readable service name for logging
    fn name(&self) -> &str;

    /// Forward the message. One attempt; errors are surfaced, not retried.
    async fn deliver(&self, message: &ContactMessage) -> Result<DeliveryReceipt>;
}

/// HTTP delivery via a template email service
pub struct EmailDelivery {
    config: DeliveryConfig,
    client: reqwest::Client,
}

impl EmailDelivery {
    pub fn new(config: DeliveryConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> &str {
        self.config.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl DeliveryService for EmailDelivery {
    fn name(&self) -> &str {
        "email"
    }

    async fn deliver(&self, message: &ContactMessage) -> Result<DeliveryReceipt> {
        message.validate()?;

        let payload = json!({
            "service_id": self.config.service_id,
            "template_id": self.config.template_id,
            "user_id": self.config.public_key,
            "template_params": {
                "from_name": message.sender_name,
                "from_email": message.sender_email,
                "message": message.message,
            },
        });

        tracing::debug!(endpoint = self.endpoint(), "sending contact email");
        let response = self
            .client
            .post(self.endpoint())
            .json(&payload)
            .send()
            .await
            .map_err(|e| DeliveryError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DeliveryError::Request(e.to_string()))?;

        if status.is_success() {
            tracing::info!("contact email accepted by delivery service");
            Ok(DeliveryReceipt { status: body })
        } else {
            Err(DeliveryError::Rejected(format!("{status}: {body}")).into())
        }
    }
}

/// Stand-in used when the delivery identifiers are absent
///
/// Missing configuration is a non-fatal startup condition; it surfaces
/// as a failed delivery only when the visitor actually submits.
pub struct UnconfiguredDelivery;

#[async_trait]
impl DeliveryService for UnconfiguredDelivery {
    fn name(&self) -> &str {
        "unconfigured"
    }

    async fn deliver(&self, _message: &ContactMessage) -> Result<DeliveryReceipt> {
        Err(DeliveryError::NotConfigured(
            "delivery service identifiers are missing".to_string(),
        )
        .into())
    }
}
