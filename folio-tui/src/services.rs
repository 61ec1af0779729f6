//! Service layer adapter for TUI
//!
//! Bridges the async delivery layer to the synchronous TUI event loop.
//! The event loop hands a [`SubmissionAttempt`] to [`ServiceHandle::deliver`],
//! which spawns the async call on a private tokio runtime and reports the
//! outcome over a crossbeam channel the loop can `try_recv` between frames.

use std::sync::Arc;
use crossbeam_channel::{unbounded, Receiver};
use libfolio::config::Config;
use libfolio::contact::{
    DeliveryEvent, DeliveryService, EmailDelivery, SubmissionAttempt, UnconfiguredDelivery,
};
use crate::error::Result;

/// Service handle for TUI operations
///
/// Owns the delivery service and a tokio runtime so the synchronous
/// event loop never blocks on the network.
pub struct ServiceHandle {
    delivery: Arc<dyn DeliveryService>,
    runtime: tokio::runtime::Runtime,
}

impl ServiceHandle {
    /// Create a service handle from configuration
    ///
    /// Without a `[delivery]` section the contact form still renders;
    /// submission then fails with a configuration error, reported the
    /// same way as any other delivery failure.
    pub fn new(config: &Config) -> Result<Self> {
        let delivery: Arc<dyn DeliveryService> = match &config.delivery {
            Some(delivery_config) => Arc::new(EmailDelivery::new(delivery_config.clone())),
            None => Arc::new(UnconfiguredDelivery),
        };
        Self::with_delivery(delivery)
    }

    /// Create a service handle around an explicit delivery service
    ///
    /// Used by tests to substitute a mock.
    pub fn with_delivery(delivery: Arc<dyn DeliveryService>) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

        Ok(Self { delivery, runtime })
    }

    /// Deliver a submission attempt asynchronously
    ///
    /// Returns immediately with a receiver that will yield exactly one
    /// [`DeliveryEvent`] carrying the attempt id, so stale results can
    /// be correlated and dropped by the submission gate.
    pub fn deliver(&self, attempt: SubmissionAttempt) -> Receiver<DeliveryEvent> {
        let (tx, rx) = unbounded();
        let delivery = Arc::clone(&self.delivery);

        self.runtime.spawn(async move {
            let event = match delivery.deliver(&attempt.message).await {
                Ok(receipt) => {
                    tracing::info!(
                        submission = %attempt.id,
                        service = delivery.name(),
                        status = %receipt.status,
                        "delivery settled"
                    );
                    DeliveryEvent::Succeeded { id: attempt.id }
                }
                Err(e) => {
                    tracing::warn!(
                        submission = %attempt.id,
                        service = delivery.name(),
                        error = %e,
                        "delivery failed"
                    );
                    DeliveryEvent::Failed {
                        id: attempt.id,
                        error: e.to_string(),
                    }
                }
            };

            // Receiver dropped means the UI moved on; nothing to do
            let _ = tx.send(event);
        });

        rx
    }
}
