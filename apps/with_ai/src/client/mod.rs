//! Completion client seam: the trait both endpoints call, its error type,
//! the live OpenAI adapter and the retry decorator.

pub mod openai;
pub mod retry;

use async_trait::async_trait;
use thiserror::Error;

pub use openai::OpenAiClient;
pub use retry::{RetryPolicy, Retrying};

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request timed out")]
    Timeout,
    #[error("completion transport failed: {0}")]
    Transport(String),
    #[error("completion API returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("completion response could not be decoded: {0}")]
    Decode(String),
}

impl CompletionError {
    /// Timeouts, transport failures and upstream 5xx are worth another attempt;
    /// 4xx (auth, bad request, rate limit) and undecodable bodies are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            CompletionError::Timeout | CompletionError::Transport(_) => true,
            CompletionError::Status { status, .. } => *status >= 500,
            CompletionError::Decode(_) => false,
        }
    }
}

impl From<reqwest::Error> for CompletionError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            CompletionError::Timeout
        } else if e.is_decode() {
            CompletionError::Decode(e.to_string())
        } else {
            CompletionError::Transport(e.to_string())
        }
    }
}

/// A hosted text-completion service: one prompt in, one block of text out.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, CompletionError>;
}
