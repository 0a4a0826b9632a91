use crate::ClientError;

use std::time::Duration;

use log::{debug, info, warn};
use tokio::time::sleep;

/// Retry behavior for read calls. Built from the `[retry]` config section.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first
    pub max_attempts: u32,
    /// Delay before the first retry
    pub initial_delay: Duration,
    /// Upper bound for any single delay
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
    /// Scale each delay by a random factor in 0.5..1.5
    pub jitter: bool,
}

impl RetryPolicy {
    /// Single attempt, no retries
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            initial_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            backoff_multiplier: 1.0,
            jitter: false,
        }
    }

    /// Delay before retry number `retry` (1-based), before jitter
    pub fn backoff(&self, retry: u32) -> Duration {
        let exponent = i32::try_from(retry.saturating_sub(1)).unwrap_or(i32::MAX);
        let secs = self.initial_delay.as_secs_f64() * self.backoff_multiplier.powi(exponent);
        Duration::from_secs_f64(secs.min(self.max_delay.as_secs_f64()))
    }

    fn delay_before(&self, retry: u32) -> Duration {
        let delay = self.backoff(retry);
        if self.jitter {
            delay.mul_f64(0.5 + rand::random::<f64>())
        } else {
            delay
        }
    }
}

/// Run `operation` until it succeeds, fails with a non-retryable error, or
/// `policy.max_attempts` is reached.
pub async fn with_retry<F, Fut, T, E>(
    policy: &RetryPolicy,
    operation_name: &str,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display + IsRetryable,
{
    let mut attempt = 1;

    loop {
        let err = match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    info!("{operation_name} succeeded on attempt {attempt}");
                }
                return Ok(value);
            }
            Err(e) => e,
        };

        if !err.is_retryable() || attempt >= policy.max_attempts {
            warn!("{operation_name} gave up after {attempt} attempt(s): {err}");
            return Err(err);
        }

        let delay = policy.delay_before(attempt);
        debug!("{operation_name} attempt {attempt} failed: {err}. Retrying in {delay:?}");
        sleep(delay).await;
        attempt += 1;
    }
}

/// Errors that know whether another attempt can succeed
pub trait IsRetryable {
    fn is_retryable(&self) -> bool;
}

impl IsRetryable for ClientError {
    /// Transport failures are retried; the backend's own rejections are not
    fn is_retryable(&self) -> bool {
        matches!(self, ClientError::Http { .. } | ClientError::Unavailable { .. })
    }
}
