use serde::{Deserialize, Serialize};

/// Error body returned by every endpoint on failure.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    /// stable machine code: invalid_request | upstream_error | upstream_timeout | not_found | method_not_allowed | internal_error
    pub error: String,
    pub message: String,
}

impl ApiError {
    pub fn new(error: &str, message: impl Into<String>) -> Self {
        Self { error: error.into(), message: message.into() }
    }
}
