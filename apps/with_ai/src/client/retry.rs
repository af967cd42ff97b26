use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::warn;

use super::{CompletionClient, CompletionError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first one.
    pub max_retries: u32,
    /// Delay before the first retry; doubled for each one after.
    pub base_delay: Duration,
}

impl RetryPolicy {
    #[cfg(test)]
    pub fn none() -> Self {
        Self { max_retries: 0, base_delay: Duration::ZERO }
    }

    /// Backoff before retry number `retry` (0-based).
    pub fn delay_for(&self, retry: u32) -> Duration {
        self.base_delay.saturating_mul(1u32 << retry.min(16))
    }
}

/// Wraps a client so retryable failures are attempted again with exponential backoff.
pub struct Retrying<C> {
    inner: C,
    policy: RetryPolicy,
}

impl<C> Retrying<C> {
    pub fn new(inner: C, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

#[async_trait]
impl<C: CompletionClient> CompletionClient for Retrying<C> {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, CompletionError> {
        let mut retry = 0;
        loop {
            match self.inner.complete(model, prompt).await {
                Ok(text) => return Ok(text),
                Err(err) if err.is_retryable() && retry < self.policy.max_retries => {
                    let delay = self.policy.delay_for(retry);
                    warn!(retry = retry + 1, delay_ms = delay.as_millis() as u64, "completion failed, retrying: {err}");
                    sleep(delay).await;
                    retry += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
