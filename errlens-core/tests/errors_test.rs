//! Tests for the errlens error taxonomy.

use std::collections::HashSet;
use std::path::PathBuf;

use errlens_core::errors::error_code::{self, ErrorCode};
use errlens_core::errors::*;

fn every_error() -> Vec<AnalyzeError> {
    vec![
        UsageError::new("expected exactly one file path").into(),
        InputError::NotFound {
            path: PathBuf::from("Missing.java"),
        }
        .into(),
        InputError::TooLarge {
            path: PathBuf::from("Huge.java"),
            size: 20,
            max: 10,
        }
        .into(),
        ParseError::Syntax {
            path: PathBuf::from("Broken.java"),
            error_count: 2,
            line: 3,
            column: 7,
        }
        .into(),
        ConfigError::ValidationFailed {
            field: "input.max_file_size".into(),
            message: "must be greater than 0".into(),
        }
        .into(),
        AnalyzeError::Output {
            message: "broken pipe".into(),
        },
    ]
}

#[test]
fn test_every_error_has_code_and_nonzero_exit() {
    for err in every_error() {
        assert!(!err.error_code().is_empty(), "{err:?} has no code");
        assert_ne!(err.exit_code(), 0, "{err:?} must not exit 0");
    }
}

#[test]
fn test_exit_codes_distinguish_categories() {
    let codes: HashSet<i32> = every_error().iter().map(AnalyzeError::exit_code).collect();
    // NotFound and TooLarge share the input exit status.
    assert_eq!(codes.len(), 5);
}

#[test]
fn test_not_found_message_names_path() {
    let err: AnalyzeError = InputError::NotFound {
        path: PathBuf::from("src/Missing.java"),
    }
    .into();
    assert_eq!(err.to_string(), "File not found: src/Missing.java");
    assert_eq!(err.error_code(), error_code::NOT_FOUND);
}

#[test]
fn test_from_conversions_preserve_variant() {
    let parse = ParseError::NoTree {
        path: PathBuf::from("A.java"),
    };
    let err: AnalyzeError = parse.into();
    assert!(matches!(err, AnalyzeError::Parse(ParseError::NoTree { .. })));

    let config = ConfigError::FileNotFound {
        path: "/nope/errlens.toml".into(),
    };
    let err: AnalyzeError = config.into();
    assert!(matches!(err, AnalyzeError::Config(_)));
    assert_eq!(err.error_code(), error_code::CONFIG_ERROR);
}

#[test]
fn test_diagnostic_format() {
    let err = ParseError::GrammarUnavailable {
        language: "java".into(),
        message: "version mismatch".into(),
    };
    assert_eq!(
        err.diagnostic(),
        "[PARSE_ERROR] Grammar unavailable for java: version mismatch"
    );
}

#[test]
fn test_syntax_error_reports_location() {
    let err = ParseError::Syntax {
        path: PathBuf::from("Broken.java"),
        error_count: 1,
        line: 4,
        column: 12,
    };
    let msg = err.to_string();
    assert!(msg.contains("Broken.java"));
    assert!(msg.contains("line 4, column 12"));
}
