//! Generic retry-with-backoff execution.
//!
//! Parameterized by max attempts, base delay, and backoff multiplier, and
//! independent of any payload shape. The delivery client drives its outbound
//! request through this policy.

use std::future::Future;
use std::time::Duration;

use tracing::{error, warn};

/// Retry policy with exponential backoff.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts (1 = no retry)
    pub max_attempts: u32,
    /// Delay before the first retry
    pub base_delay: Duration,
    /// Factor applied to the delay after each attempt
    pub multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(2),
            multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration, multiplier: f64) -> Self {
        Self {
            max_attempts,
            base_delay,
            multiplier,
        }
    }

    /// Delay before the retry following the given 1-based attempt.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay
            .mul_f64(self.multiplier.powi(attempt.saturating_sub(1) as i32))
    }

    /// Execute an operation, retrying on failure until the attempt budget
    /// is exhausted. Returns the final error once it is.
    pub async fn execute<F, Fut, T, E>(&self, mut operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let mut attempt: u32 = 1;

        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    if attempt >= self.max_attempts {
                        error!(attempt, error = %e, "All attempts failed");
                        return Err(e);
                    }

                    let delay = self.delay_for(attempt);
                    warn!(
                        attempt,
                        error = %e,
                        retry_in_ms = delay.as_millis() as u64,
                        "Attempt failed, backing off"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy::new(max_attempts, Duration::from_millis(10), 2.0)
    }

    #[tokio::test(start_paused = true)]
    async fn test_succeeds_on_first_attempt() {
        let calls = Cell::new(0u32);
        let result: Result<u32, &str> = fast_policy(3)
            .execute(|| {
                calls.set(calls.get() + 1);
                async { Ok(7) }
            })
            .await;

        assert_eq!(result, Ok(7));
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_recovers_after_two_failures() {
        let calls = Cell::new(0u32);
        let result: Result<u32, &str> = fast_policy(3)
            .execute(|| {
                calls.set(calls.get() + 1);
                let n = calls.get();
                async move {
                    if n < 3 {
                        Err("unavailable")
                    } else {
                        Ok(n)
                    }
                }
            })
            .await;

        assert_eq!(result, Ok(3));
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhaustion_makes_exactly_max_attempts() {
        let calls = Cell::new(0u32);
        let result: Result<(), &str> = fast_policy(3)
            .execute(|| {
                calls.set(calls.get() + 1);
                async { Err("down") }
            })
            .await;

        assert_eq!(result, Err("down"));
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_attempt_policy_never_retries() {
        let calls = Cell::new(0u32);
        let result: Result<(), &str> = fast_policy(1)
            .execute(|| {
                calls.set(calls.get() + 1);
                async { Err("down") }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_delays_double_each_attempt() {
        let policy = RetryPolicy::new(5, Duration::from_secs(2), 2.0);
        assert_eq!(policy.delay_for(1), Duration::from_secs(2));
        assert_eq!(policy.delay_for(2), Duration::from_secs(4));
        assert_eq!(policy.delay_for(3), Duration::from_secs(8));
    }
}
