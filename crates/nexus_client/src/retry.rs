//! Retry with exponential backoff for dispatcher calls.

use nexus_core::RetryPolicy;
use nexus_error::{ClientResult, RetryableError};
use tokio::time::sleep;
use tracing::{debug, warn};

/// Retries an async operation with exponential backoff.
///
/// The operation runs at most `max_retries + 1` times. After a retryable
/// failure on attempt `n` (1-indexed) with `n <= max_retries`, sleeps
/// `base_backoff * 2^(n - 1)` and re-runs the operation; once `n` exceeds
/// `max_retries` the last failure propagates to the caller. Non-retryable
/// failures propagate immediately.
pub async fn post_with_retries<F, Fut, T>(policy: &RetryPolicy, mut operation: F) -> ClientResult<T>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = ClientResult<T>>,
{
    let mut attempt = 0u32;

    loop {
        attempt += 1;
        debug!(attempt, "Executing request");

        match operation().await {
            Ok(result) => {
                if attempt > 1 {
                    debug!(attempt, "Request succeeded after retry");
                }
                return Ok(result);
            }
            Err(err) => {
                if !err.is_retryable() {
                    warn!("Error is not retryable, failing immediately");
                    return Err(err);
                }

                if attempt > *policy.max_retries() {
                    warn!(attempt, "All retry attempts exhausted");
                    return Err(err);
                }

                let backoff = policy.backoff_for(attempt);
                debug!(backoff_ms = backoff.as_millis() as u64, "Retrying after failure");
                sleep(backoff).await;
            }
        }
    }
}
