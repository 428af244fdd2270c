//! Top-level error for one analysis invocation.

use super::error_code::{self, ErrorCode};
use super::{ConfigError, InputError, ParseError, UsageError};

/// Every failure that terminates an invocation.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("Usage error: {0}")]
    Usage(#[from] UsageError),

    #[error("{0}")]
    Input(#[from] InputError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to write report: {message}")]
    Output { message: String },
}

impl AnalyzeError {
    /// Process exit status for this failure. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            Self::Input(_) => 1,
            Self::Parse(_) => 3,
            Self::Config(_) => 4,
            Self::Output { .. } => 5,
        }
    }
}

impl ErrorCode for AnalyzeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Usage(e) => e.error_code(),
            Self::Input(e) => e.error_code(),
            Self::Parse(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Output { .. } => error_code::OUTPUT_ERROR,
        }
    }
}
