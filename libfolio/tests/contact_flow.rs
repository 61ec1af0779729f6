//! End-to-end contact submission tests
//!
//! Drives the submission gate against mock delivery services, covering
//! the single-pending guard and the success/failure field semantics.

use std::sync::Arc;
use std::time::{Duration, Instant};

use libfolio::contact::mock::MockDelivery;
use libfolio::contact::{ContactMessage, DeliveryService, SubmissionGate, SubmissionStatus};

fn filled() -> ContactMessage {
    ContactMessage {
        sender_name: "A".to_string(),
        sender_email: "a@x.com".to_string(),
        message: "hi".to_string(),
    }
}

#[tokio::test]
async fn test_successful_submission_clears_fields() {
    let mut gate = SubmissionGate::new();
    *gate.fields_mut() = filled();

    let attempt = gate.begin(Instant::now()).unwrap();
    let delivery = MockDelivery::success();

    match delivery.deliver(&attempt.message).await {
        Ok(_) => gate.resolve_success(attempt.id),
        Err(e) => gate.resolve_failure(attempt.id, &e.to_string()),
    }

    assert_eq!(gate.status(), SubmissionStatus::Succeeded);
    assert_eq!(gate.fields().sender_name, "");
    assert_eq!(gate.fields().sender_email, "");
    assert_eq!(gate.fields().message, "");
    assert_eq!(delivery.delivered(), vec![filled()]);
}

#[tokio::test]
async fn test_failed_submission_retains_fields() {
    let mut gate = SubmissionGate::new();
    *gate.fields_mut() = filled();

    let attempt = gate.begin(Instant::now()).unwrap();
    let delivery = MockDelivery::failure("service down");

    match delivery.deliver(&attempt.message).await {
        Ok(_) => gate.resolve_success(attempt.id),
        Err(e) => gate.resolve_failure(attempt.id, &e.to_string()),
    }

    assert_eq!(gate.status(), SubmissionStatus::Failed);
    assert_eq!(gate.fields(), &filled());
    assert_eq!(delivery.call_count(), 1);
}

#[tokio::test]
async fn test_rapid_double_submit_makes_one_delivery_call() {
    let mut gate = SubmissionGate::new();
    *gate.fields_mut() = filled();

    let delivery = Arc::new(MockDelivery::slow_success(Duration::from_millis(50)));
    let (call_count, _) = delivery.observers();

    let now = Instant::now();
    let first = gate.begin(now).unwrap();
    let task = {
        let delivery = Arc::clone(&delivery);
        let message = first.message.clone();
        tokio::spawn(async move { delivery.deliver(&message).await })
    };

    // Second submit while the first is in flight: rejected by the gate,
    // so no second delivery call is ever issued.
    assert!(gate.begin(now + Duration::from_millis(1)).is_err());

    let result = task.await.unwrap();
    assert!(result.is_ok());
    gate.resolve_success(first.id);

    assert_eq!(*call_count.lock().unwrap(), 1);
    assert_eq!(gate.status(), SubmissionStatus::Succeeded);
}

#[tokio::test]
async fn test_resubmit_after_failure_is_allowed() {
    let mut gate = SubmissionGate::new();
    *gate.fields_mut() = filled();

    let attempt = gate.begin(Instant::now()).unwrap();
    gate.resolve_failure(attempt.id, "timeout");
    assert_eq!(gate.status(), SubmissionStatus::Failed);

    // Fields survived the failure; the visitor retries manually
    let retry = gate.begin(Instant::now()).unwrap();
    assert_eq!(retry.message, filled());

    let delivery = MockDelivery::success();
    delivery.deliver(&retry.message).await.unwrap();
    gate.resolve_success(retry.id);
    assert_eq!(gate.status(), SubmissionStatus::Succeeded);
}
