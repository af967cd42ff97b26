pub mod client;
pub mod prompts;
pub mod serializers;
pub mod urls;
pub mod views;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};

use crate::client::{CompletionClient, OpenAiClient, RetryPolicy, Retrying};

const DEFAULT_MODEL: &str = "gpt-4.1-mini";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const MAX_TIMEOUT_SECS: u64 = 300;
const MAX_RETRIES: u32 = 5;
const MAX_BACKOFF_MS: u64 = 10_000;

#[derive(Clone)]
pub struct AiCfg {
    /// Bearer credential for the completion API. Required: OPENAI_API_KEY.
    pub api_key: String,
    /// Model sent on every call (default gpt-4.1-mini). Override with OPENAI_MODEL.
    pub model: String,
    /// API root without trailing slash. Override with OPENAI_BASE_URL.
    pub base_url: String,
    /// Per-attempt HTTP timeout (default 30s, 1..=300). Override with UPSTREAM_TIMEOUT_SECS.
    pub timeout: Duration,
    /// UPSTREAM_MAX_RETRIES (default 2, at most 5) and UPSTREAM_BACKOFF_MS (default 250, at most 10000).
    pub retry: RetryPolicy,
}

impl AiCfg {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = get("OPENAI_API_KEY")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| anyhow!("OPENAI_API_KEY is not set; the completion API needs a credential"))?;

        let model = get("OPENAI_MODEL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.into());
        let base_url = get("OPENAI_BASE_URL")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());

        // out-of-range values are treated like unparseable ones
        let timeout_secs: u64 = get("UPSTREAM_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .filter(|n| (1..=MAX_TIMEOUT_SECS).contains(n))
            .unwrap_or(30);
        let max_retries: u32 = get("UPSTREAM_MAX_RETRIES")
            .and_then(|s| s.parse().ok())
            .filter(|n| *n <= MAX_RETRIES)
            .unwrap_or(2);
        let backoff_ms: u64 = get("UPSTREAM_BACKOFF_MS")
            .and_then(|s| s.parse().ok())
            .filter(|n| *n <= MAX_BACKOFF_MS)
            .unwrap_or(250);

        Ok(Self {
            api_key,
            model,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            retry: RetryPolicy {
                max_retries,
                base_delay: Duration::from_millis(backoff_ms),
            },
        })
    }
}

// keep the key out of logs
impl fmt::Debug for AiCfg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiCfg")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("retry", &self.retry)
            .finish()
    }
}

/// Shared by every handler; built once at startup, never mutated.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn CompletionClient>,
    pub model: Arc<str>,
}

impl AppState {
    pub fn new(client: Arc<dyn CompletionClient>, model: &str) -> Self {
        Self { client, model: model.into() }
    }

    /// Live OpenAI client behind the retry policy.
    pub fn from_cfg(cfg: &AiCfg) -> Result<Self> {
        let live = OpenAiClient::new(cfg)?;
        Ok(Self::new(Arc::new(Retrying::new(live, cfg.retry)), &cfg.model))
    }
}
