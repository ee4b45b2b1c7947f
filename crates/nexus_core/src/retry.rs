//! Retry policy for the request dispatcher.

use std::time::Duration;

/// Retry configuration for outbound requests.
///
/// Fixed for the process; not persisted. `max_retries = 0` means exactly
/// one attempt with no backoff sleep.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct RetryPolicy {
    /// Maximum number of retries after the initial attempt.
    max_retries: u32,
    /// Backoff before the first retry; doubles on each subsequent retry.
    base_backoff: Duration,
}

impl RetryPolicy {
    /// Creates a new retry policy.
    pub fn new(max_retries: u32, base_backoff: Duration) -> Self {
        Self {
            max_retries,
            base_backoff,
        }
    }

    /// Backoff to sleep after the given failed attempt (1-indexed).
    ///
    /// The schedule is exponential: `base_backoff * 2^(attempt - 1)`.
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        self.base_backoff
            .saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1)))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_backoff: Duration::from_millis(500),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_schedule_doubles() {
        let policy = RetryPolicy::new(3, Duration::from_secs(1));

        assert_eq!(policy.backoff_for(1), Duration::from_secs(1));
        assert_eq!(policy.backoff_for(2), Duration::from_secs(2));
        assert_eq!(policy.backoff_for(3), Duration::from_secs(4));
    }

    #[test]
    fn test_backoff_saturates() {
        let policy = RetryPolicy::new(u32::MAX, Duration::from_secs(1));
        // Far past any realistic attempt count the schedule pins at the cap
        // instead of overflowing.
        assert_eq!(policy.backoff_for(64), policy.backoff_for(65));
    }
}
