// Rate-limit aware retry logic for model calls
// Author: kelexine (https://github.com/kelexine)

use crate::config::GroqConfig;
use backoff::backoff::{Backoff, Constant};
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, error, warn};

/// How a failed attempt should be treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Upstream throttling; wait and try again.
    RateLimited,
    /// Anything else; give up immediately.
    Fatal,
}

/// Classify an upstream failure from its message text.
///
/// Groq reports throttling as "Rate limit reached for model ...", so a
/// case-insensitive search for "rate limit" is the whole contract. Swap this
/// for a structured error code check if the API ever guarantees one.
pub fn classify_failure(message: &str) -> FailureKind {
    if message.to_lowercase().contains("rate limit") {
        FailureKind::RateLimited
    } else {
        FailureKind::Fatal
    }
}

/// Attempt budget and fixed delay between rate-limited attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub rate_limit_delay: Duration,
}

impl RetryPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    pub const DEFAULT_RATE_LIMIT_DELAY: Duration = Duration::from_secs(120);

    pub fn new(max_attempts: u32, rate_limit_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            rate_limit_delay,
        }
    }

    /// Constant backoff: every rate-limited attempt waits the same amount.
    pub fn backoff(&self) -> Constant {
        Constant::new(self.rate_limit_delay)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS, Self::DEFAULT_RATE_LIMIT_DELAY)
    }
}

impl From<&GroqConfig> for RetryPolicy {
    fn from(config: &GroqConfig) -> Self {
        Self::new(
            config.max_attempts,
            Duration::from_secs(config.rate_limit_delay_seconds),
        )
    }
}

/// What a retried operation produced, plus the rate-limit waits it sat through.
#[derive(Debug)]
pub struct Retried<T, E> {
    pub result: Result<T, E>,
    /// Attempts actually made.
    pub attempts: u32,
    /// One entry per rate-limited attempt, in order.
    pub rate_limit_waits: Vec<Duration>,
}

impl<T, E> Retried<T, E> {
    /// The operation never ran.
    pub fn not_attempted(err: E) -> Self {
        Self {
            result: Err(err),
            attempts: 0,
            rate_limit_waits: Vec::new(),
        }
    }

    /// Whether the wait at `index` was followed by another attempt.
    pub fn retried_after(&self, index: usize) -> bool {
        (index as u32) + 1 < self.attempts
    }
}

/// Execute an operation, retrying only when it was rate limited.
///
/// - Rate-limited failures sleep for the policy delay, then try again while
///   attempts remain.
/// - Any other failure is returned at once, even with attempts left.
/// - The last rate-limited attempt still waits out the delay before its
///   error is returned.
pub async fn with_rate_limit_retry<F, Fut, T, E>(
    operation_name: &str,
    policy: &RetryPolicy,
    operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    retry_on_rate_limit(operation_name, policy, operation)
        .await
        .result
}

/// Same loop as [`with_rate_limit_retry`], reporting every wait.
pub async fn retry_on_rate_limit<F, Fut, T, E>(
    operation_name: &str,
    policy: &RetryPolicy,
    mut operation: F,
) -> Retried<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut backoff = policy.backoff();
    let mut rate_limit_waits = Vec::new();
    let mut attempt = 0;

    loop {
        attempt += 1;

        let err = match operation().await {
            Ok(result) => {
                if attempt > 1 {
                    debug!("{} succeeded on attempt {}", operation_name, attempt);
                }
                return Retried {
                    result: Ok(result),
                    attempts: attempt,
                    rate_limit_waits,
                };
            }
            Err(err) => err,
        };

        let message = err.to_string();
        error!("{} failed (attempt {}): {}", operation_name, attempt, message);

        if classify_failure(&message) == FailureKind::Fatal {
            return Retried {
                result: Err(err),
                attempts: attempt,
                rate_limit_waits,
            };
        }

        let delay = backoff.next_backoff().unwrap_or(policy.rate_limit_delay);
        crate::metrics::record_rate_limit_retry(operation_name);
        warn!(
            "{} rate limited. Retrying in {} seconds...",
            operation_name,
            delay.as_secs()
        );

        tokio::time::sleep(delay).await;
        rate_limit_waits.push(delay);

        if attempt >= policy.max_attempts {
            warn!(
                "{} still rate limited after {} attempts, giving up",
                operation_name, attempt
            );
            return Retried {
                result: Err(err),
                attempts: attempt,
                rate_limit_waits,
            };
        }
    }
}
