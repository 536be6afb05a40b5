//! Retry policy for GET requests.

use std::time::Duration;

use async_trait::async_trait;

/// Attempts made before giving up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Total timeout for a single attempt (connect + response)
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for retry behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first one.
    pub max_attempts: u32,
    /// Timeout applied to each attempt.
    pub timeout: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl RetryConfig {
    /// Delay before the given attempt (0-indexed): `attempt²` seconds.
    ///
    /// Yields 0s, 1s, 4s for the default three attempts.
    pub fn backoff_for_attempt(&self, attempt: u32) -> Duration {
        Duration::from_secs(u64::from(attempt) * u64::from(attempt))
    }
}

/// Waits out backoff delays.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, delay: Duration);
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}
