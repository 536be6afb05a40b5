//! GET with retry and quadratic backoff.

use std::sync::Arc;

use bytes::Bytes;

use super::{RetryConfig, Sleeper, Transport};
use crate::error::{Error, TransportError};

/// Issues GET requests, retrying transient failures
///
/// Connection errors, body-read errors and 5xx statuses are retried after a
/// growing delay; 4xx statuses fail immediately since repeating the same
/// request will not change the answer.
#[derive(Clone)]
pub struct RetryingFetcher {
    transport: Arc<dyn Transport>,
    sleeper: Arc<dyn Sleeper>,
    config: RetryConfig,
}

impl std::fmt::Debug for RetryingFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetryingFetcher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RetryingFetcher {
    pub fn new(
        transport: Arc<dyn Transport>,
        sleeper: Arc<dyn Sleeper>,
        config: RetryConfig,
    ) -> Self {
        Self {
            transport,
            sleeper,
            config,
        }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Fetches `url`, returning the body of the first successful attempt
    ///
    /// # Returns
    /// * `Ok(Bytes)` - body of a response with status below 400
    /// * `Err(Error::Client)` - on the first 4xx response
    /// * `Err(_)` - the last retryable error once all attempts are used up
    pub async fn get(&self, url: &str) -> Result<Bytes, Error> {
        let max_attempts = self.config.max_attempts.max(1);
        let mut last_error = None;

        for attempt in 0..max_attempts {
            let delay = self.config.backoff_for_attempt(attempt);
            if !delay.is_zero() {
                self.sleeper.sleep(delay).await;
            }

            match self.attempt(url).await {
                Ok(body) => return Ok(body),
                Err(e) if e.is_retryable() => {
                    tracing::warn!(
                        "GET {} failed (attempt {}/{}): {}",
                        url,
                        attempt + 1,
                        max_attempts,
                        e
                    );
                    last_error = Some(e);
                }
                Err(e) => {
                    tracing::debug!("GET {} failed without retry: {}", url, e);
                    return Err(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| Error::Network(TransportError::Other("no attempt made".into()))))
    }

    async fn attempt(&self, url: &str) -> Result<Bytes, Error> {
        let response = self.transport.get(url).await?;

        match response.status {
            status if status >= 500 => Err(Error::Server { status }),
            status if status >= 400 => Err(Error::Client {
                url: url.to_string(),
                status,
            }),
            _ => Ok(response.body?),
        }
    }
}
