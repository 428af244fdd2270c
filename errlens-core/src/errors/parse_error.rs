//! Parser errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while turning source bytes into a syntax tree.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Grammar unavailable for {language}: {message}")]
    GrammarUnavailable { language: String, message: String },

    #[error(
        "Syntax error in {}: {error_count} error node(s), first at line {line}, column {column}",
        path.display()
    )]
    Syntax {
        path: PathBuf,
        error_count: u32,
        line: u32,
        column: u32,
    },

    #[error("Parser produced no tree for {}", path.display())]
    NoTree { path: PathBuf },
}

impl ErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        error_code::PARSE_ERROR
    }
}
