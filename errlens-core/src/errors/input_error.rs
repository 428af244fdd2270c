//! Source input errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors raised while reading the file under analysis.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("File too large: {} ({size} bytes, max {max})", path.display())]
    TooLarge { path: PathBuf, size: u64, max: u64 },
}

impl ErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::NOT_FOUND,
            Self::TooLarge { .. } => error_code::FILE_TOO_LARGE,
        }
    }
}
