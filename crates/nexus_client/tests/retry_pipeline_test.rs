//! Tests for the dispatcher retry pipeline.

use nexus_client::post_with_retries;
use nexus_core::RetryPolicy;
use nexus_error::{ClientError, ClientErrorKind, DecodeError, TransportError, TransportErrorKind};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Duration, Instant};

fn transport_failure(message: &str) -> ClientError {
    ClientError::from(TransportError::new(TransportErrorKind::Connection(
        message.to_string(),
    )))
}

#[tokio::test]
async fn test_success_after_two_failures() {
    let attempts = AtomicU32::new(0);
    let policy = RetryPolicy::new(2, Duration::from_millis(10));

    let started = Instant::now();
    let result = post_with_retries(&policy, || {
        let attempt = attempts.fetch_add(1, Ordering::SeqCst) + 1;
        async move {
            if attempt < 3 {
                Err(transport_failure("connection reset"))
            } else {
                Ok(serde_json::json!({"output": "ok"}))
            }
        }
    })
    .await
    .expect("Succeeds on third attempt");

    assert_eq!(result["output"], "ok");
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
    // Backoffs of 10ms then 20ms separate the three attempts.
    assert!(started.elapsed() >= Duration::from_millis(30));
}

#[tokio::test]
async fn test_zero_retries_fails_after_single_attempt() {
    let attempts = AtomicU32::new(0);
    let policy = RetryPolicy::new(0, Duration::from_secs(60));

    let started = Instant::now();
    let result: Result<serde_json::Value, _> = post_with_retries(&policy, || {
        attempts.fetch_add(1, Ordering::SeqCst);
        async { Err(transport_failure("connection refused")) }
    })
    .await;

    assert!(result.is_err());
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
    // No backoff sleep on the way out.
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn test_exhaustion_makes_max_retries_plus_one_attempts() {
    let attempts = AtomicU32::new(0);
    let policy = RetryPolicy::new(3, Duration::from_millis(1));

    let result: Result<serde_json::Value, _> = post_with_retries(&policy, || {
        attempts.fetch_add(1, Ordering::SeqCst);
        async { Err(transport_failure("service down")) }
    })
    .await;

    let err = result.expect_err("Budget exhausted");
    assert_eq!(attempts.load(Ordering::SeqCst), 4);
    assert!(matches!(err.kind(), ClientErrorKind::Transport(_)));
}

#[tokio::test]
async fn test_last_failure_message_is_carried() {
    let attempts = AtomicU32::new(0);
    let policy = RetryPolicy::new(2, Duration::from_millis(1));

    let result: Result<serde_json::Value, _> = post_with_retries(&policy, || {
        let attempt = attempts.fetch_add(1, Ordering::SeqCst) + 1;
        async move { Err(transport_failure(&format!("failure {}", attempt))) }
    })
    .await;

    let err = result.expect_err("Budget exhausted");
    assert!(format!("{}", err).contains("failure 3"));
}

#[tokio::test]
async fn test_decode_error_is_not_retried() {
    let attempts = AtomicU32::new(0);
    let policy = RetryPolicy::new(5, Duration::from_secs(60));

    let result: Result<serde_json::Value, _> = post_with_retries(&policy, || {
        attempts.fetch_add(1, Ordering::SeqCst);
        async { Err(ClientError::from(DecodeError::new("expected value at line 1"))) }
    })
    .await;

    let err = result.expect_err("Surfaces immediately");
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
    assert!(matches!(err.kind(), ClientErrorKind::Decode(_)));
}
