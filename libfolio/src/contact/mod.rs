//! Contact form submission gate
//!
//! Serializes outbound contact submissions: exactly one may be pending
//! at a time, success clears the form, and failure leaves the fields
//! untouched so the visitor can retry. Delivery itself goes through the
//! [`DeliveryService`] trait so the gate never touches the network.

pub mod delivery;
pub mod mock;

pub use delivery::{DeliveryReceipt, DeliveryService, EmailDelivery, UnconfiguredDelivery};

use std::time::{Duration, Instant};

use serde::Serialize;
use uuid::Uuid;

use crate::error::DeliveryError;

/// How long the decorative send glyph plays after a submit. Deliberately
/// decoupled from when the delivery call actually settles.
pub const SEND_GLYPH_DURATION: Duration = Duration::from_millis(2000);

/// The three required contact fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub sender_name: String,
    pub sender_email: String,
    pub message: String,
}

impl ContactMessage {
    /// All three fields are required; the email must at least look like one
    pub fn validate(&self) -> Result<(), DeliveryError> {
        if self.sender_name.trim().is_empty() {
            return Err(DeliveryError::Validation("name is required".to_string()));
        }
        if self.sender_email.trim().is_empty() {
            return Err(DeliveryError::Validation("email is required".to_string()));
        }
        let email = self.sender_email.trim();
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err(DeliveryError::Validation(format!(
                "'{email}' is not a valid email address"
            )));
        }
        if self.message.trim().is_empty() {
            return Err(DeliveryError::Validation("message is required".to_string()));
        }
        Ok(())
    }
}

/// Submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// A submission attempt handed to the delivery layer
#[derive(Debug, Clone)]
pub struct SubmissionAttempt {
    pub id: Uuid,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub message: ContactMessage,
}

/// Progress events for an in-flight delivery
#[derive(Debug, Clone)]
pub enum DeliveryEvent {
    Succeeded { id: Uuid },
    Failed { id: Uuid, error: String },
}

/// State machine guarding contact submissions
#[derive(Debug, Default)]
pub struct SubmissionGate {
    status: SubmissionStatus,
    fields: ContactMessage,
    in_flight: Option<Uuid>,
    glyph_until: Option<Instant>,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn fields(&self) -> &ContactMessage {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut ContactMessage {
        &mut self.fields
    }

    /// Whether the submit affordance should be enabled
    pub fn can_submit(&self) -> bool {
        self.status != SubmissionStatus::Pending
    }

    /// Begin a submission: validates the fields, rejects re-entry while
    /// pending, and returns the attempt to hand to a delivery service.
    pub fn begin(&mut self, now: Instant) -> Result<SubmissionAttempt, DeliveryError> {
        if !self.can_submit() {
            return Err(DeliveryError::Validation(
                "a submission is already pending".to_string(),
            ));
        }
        self.fields.validate()?;

        let attempt = SubmissionAttempt {
            id: Uuid::new_v4(),
            started_at: chrono::Utc::now(),
            message: self.fields.clone(),
        };
        tracing::info!(submission = %attempt.id, "contact submission started");

        self.status = SubmissionStatus::Pending;
        self.in_flight = Some(attempt.id);
        self.glyph_until = Some(now + SEND_GLYPH_DURATION);
        Ok(attempt)
    }

    /// Delivery confirmed: clear all fields and report success
    pub fn resolve_success(&mut self, id: Uuid) {
        if self.in_flight != Some(id) {
            tracing::warn!(submission = %id, "ignoring result for stale submission");
            return;
        }
        tracing::info!(submission = %id, "contact submission delivered");
        self.status = SubmissionStatus::Succeeded;
        self.in_flight = None;
        self.fields = ContactMessage::default();
    }

    /// Delivery failed: keep the fields so the visitor can retry
    pub fn resolve_failure(&mut self, id: Uuid, error: &str) {
        if self.in_flight != Some(id) {
            tracing::warn!(submission = %id, "ignoring result for stale submission");
            return;
        }
        tracing::warn!(submission = %id, error, "contact submission failed");
        self.status = SubmissionStatus::Failed;
        self.in_flight = None;
    }

    /// Whether the decorative send glyph is still playing
    ///
    /// Runs on its own fixed clock; it can outlive or undercut the real
    /// delivery result.
    pub fn glyph_active(&self, now: Instant) -> bool {
        self.glyph_until.is_some_and(|until| now < until)
    }
}
