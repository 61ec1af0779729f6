//! Mock delivery service for testing
//!
//! Configurable success, failure, and artificial latency, with call
//! counting so tests can verify the submission gate's single-attempt
//! guarantee without network access.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::contact::{ContactMessage, DeliveryReceipt, DeliveryService};
use crate::error::{DeliveryError, Result};

#[derive(Debug, Clone)]
pub struct MockConfig {
    pub succeeds: bool,
    /// Error text returned when `succeeds` is false
    pub error: String,
    /// Delay before resolving (simulates network latency)
    pub delay: Duration,
    /// Number of times deliver has been called
    pub call_count: Arc<Mutex<usize>>,
    /// Messages that were delivered (for verification)
    pub delivered: Arc<Mutex<Vec<ContactMessage>>>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            succeeds: true,
            error: "mock delivery error".to_string(),
            delay: Duration::from_millis(0),
            call_count: Arc::new(Mutex::new(0)),
            delivered: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

pub struct MockDelivery {
    config: MockConfig,
}

impl MockDelivery {
    pub fn new(config: MockConfig) -> Self {
        Self { config }
    }

    /// A mock that always accepts
    pub fn success() -> Self {
        Self::new(MockConfig::default())
    }

    /// A mock that always rejects with `error`
    pub fn failure(error: &str) -> Self {
        Self::new(MockConfig {
            succeeds: false,
            error: error.to_string(),
            ..Default::default()
        })
    }

    /// A mock that accepts after `delay`
    pub fn slow_success(delay: Duration) -> Self {
        Self::new(MockConfig {
            delay,
            ..Default::default()
        })
    }

    pub fn call_count(&self) -> usize {
        *self.config.call_count.lock().unwrap()
    }

    pub fn delivered(&self) -> Vec<ContactMessage> {
        self.config.delivered.lock().unwrap().clone()
    }

    /// Handles for observing calls after the mock has been moved into an
    /// `Arc<dyn DeliveryService>`
    pub fn observers(&self) -> (Arc<Mutex<usize>>, Arc<Mutex<Vec<ContactMessage>>>) {
        (
            Arc::clone(&self.config.call_count),
            Arc::clone(&self.config.delivered),
        )
    }
}

#[async_trait]
impl DeliveryService for MockDelivery {
    fn name(&self) -> &str {
        "mock"
    }

    async fn deliver(&self, message: &ContactMessage) -> Result<DeliveryReceipt> {
        *self.config.call_count.lock().unwrap() += 1;

        if !self.config.delay.is_zero() {
            sleep(self.config.delay).await;
        }

        if self.config.succeeds {
            self.config
                .delivered
                .lock()
                .unwrap()
                .push(message.clone());
            Ok(DeliveryReceipt {
                status: "OK".to_string(),
            })
        } else {
            Err(DeliveryError::Rejected(self.config.error.clone()).into())
        }
    }
}
