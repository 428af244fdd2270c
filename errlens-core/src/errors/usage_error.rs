//! Command-line usage errors.

use super::error_code::{self, ErrorCode};

/// Wrong number of arguments or an invalid option.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct UsageError {
    pub message: String,
}

impl UsageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl ErrorCode for UsageError {
    fn error_code(&self) -> &'static str {
        error_code::USAGE_ERROR
    }
}
