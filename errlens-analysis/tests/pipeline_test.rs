//! End-to-end pipeline: file on disk → Java provider → classifier.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use errlens_analysis::tree::{SyntaxNode, SyntaxTree};
use errlens_analysis::{analyze_file, JavaTreeProvider, SyntaxTreeProvider, Verdict};
use errlens_core::config::InputConfig;
use errlens_core::errors::{AnalyzeError, InputError, ParseError};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../test-fixtures/java")
        .join(name)
}

fn analyze(name: &str) -> Result<Verdict, AnalyzeError> {
    analyze_file(&fixture(name), &JavaTreeProvider::new(), &InputConfig::default())
}

fn analyze_source(source: &str) -> Verdict {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Snippet.java");
    std::fs::write(&path, source).unwrap();
    analyze_file(&path, &JavaTreeProvider::new(), &InputConfig::default())
        .unwrap_or_else(|e| panic!("analysis failed: {e}"))
}

fn verdict(basic: bool, advanced: bool) -> Verdict {
    Verdict {
        has_basic_handling: basic,
        has_advanced_handling: advanced,
    }
}

// ---- scenarios ----

#[test]
fn scenario_a_throw_only() {
    assert_eq!(analyze("ThrowOnly.java").unwrap(), verdict(true, false));
}

#[test]
fn scenario_b_retry_only() {
    assert_eq!(analyze("RetryOnly.java").unwrap(), verdict(false, true));
}

#[test]
fn scenario_c_try_catch_and_backoff() {
    assert_eq!(analyze("TryCatchBackoff.java").unwrap(), verdict(true, true));
}

#[test]
fn scenario_d_empty_method() {
    assert_eq!(analyze("Empty.java").unwrap(), verdict(false, false));
}

#[test]
fn legacy_source_with_throws_and_status_code() {
    assert_eq!(analyze("Legacy.java").unwrap(), verdict(true, false));
}

// ---- individual constructs through the real grammar ----

#[test]
fn try_finally_without_catch_is_basic() {
    let v = analyze_source("class A { void f() { try { g(); } finally { h(); } } }");
    assert_eq!(v, verdict(true, false));
}

#[test]
fn try_with_resources_is_basic() {
    let v = analyze_source(
        "class A { void f() throws Exception { try (java.io.Reader r = open()) { r.read(); } } }",
    );
    assert_eq!(v, verdict(true, false));
}

#[test]
fn interface_method_with_throws_is_basic() {
    let v = analyze_source("interface Store { void save(Object o) throws java.io.IOException; }");
    assert_eq!(v, verdict(true, false));
}

#[test]
fn constructor_throws_clause_is_ignored() {
    let v = analyze_source("class A { A() throws Exception { init(); } }");
    assert_eq!(v, verdict(false, false));
}

#[test]
fn receiver_calls_match_on_simple_name() {
    let v = analyze_source("class A { void f() { client.policy().Timeout(5); } }");
    assert_eq!(v, verdict(false, true));
}

#[test]
fn status_code_case_variants() {
    for name in ["StatusCode", "STATUSCODE", "statuscode"] {
        let v = analyze_source(&format!("class A {{ int f() {{ return r.{name}(); }} }}"));
        assert_eq!(v, verdict(true, false), "{name}");
    }
    let v = analyze_source("class A { int f() { return r.statuscodes(); } }");
    assert_eq!(v, verdict(false, false));
}

#[test]
fn names_outside_call_position_do_not_count() {
    let v = analyze_source(
        "class A { int retry = 3; long timeout; Object backoff() { return new Retry(); } }",
    );
    assert_eq!(v, verdict(false, false));
}

#[test]
fn comments_and_strings_do_not_count() {
    let v = analyze_source(
        "class A { /* try { retry(); } */ void f() { log(\"throw timeout()\"); } }",
    );
    assert_eq!(v, verdict(false, false));
}

#[test]
fn byte_order_mark_is_tolerated() {
    let v = analyze_source("\u{feff}class A { void f() { backoff(1); } }");
    assert_eq!(v, verdict(false, true));
}

// ---- failures ----

#[test]
fn missing_file_is_not_found() {
    let err = analyze("DoesNotExist.java").unwrap_err();
    assert!(matches!(err, AnalyzeError::Input(InputError::NotFound { .. })));
    assert!(err.to_string().contains("DoesNotExist.java"));
}

#[test]
fn invalid_syntax_is_parse_failure() {
    let err = analyze("Broken.java").unwrap_err();
    assert!(matches!(err, AnalyzeError::Parse(ParseError::Syntax { .. })));
    // The unclosed class body is recovered as one ERROR node from its header.
    match err {
        AnalyzeError::Parse(ParseError::Syntax { line, column, .. }) => {
            assert_eq!((line, column), (3, 1));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn oversized_file_is_rejected_before_parsing() {
    let config = InputConfig {
        max_file_size: Some(8),
        ..Default::default()
    };
    let err = analyze_file(&fixture("Empty.java"), &JavaTreeProvider::new(), &config).unwrap_err();
    assert!(matches!(err, AnalyzeError::Input(InputError::TooLarge { .. })));
}

// ---- injected provider ----

/// Ignores the bytes and hands back a fixed tree.
struct CannedProvider {
    tree: SyntaxTree,
    calls: AtomicUsize,
}

impl SyntaxTreeProvider for CannedProvider {
    fn language(&self) -> &'static str {
        "canned"
    }

    fn extensions(&self) -> &[&str] {
        &[]
    }

    fn parse(&self, _source: &[u8], _path: &Path) -> Result<SyntaxTree, ParseError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.tree.clone())
    }
}

#[test]
fn provider_is_injectable() {
    let provider = CannedProvider {
        tree: SyntaxTree::new(SyntaxNode::other(
            "unit",
            vec![SyntaxNode::call("CircuitBreaker", vec![])],
        )),
        calls: AtomicUsize::new(0),
    };
    let v = analyze_file(&fixture("ThrowOnly.java"), &provider, &InputConfig::default()).unwrap();
    assert_eq!(v, verdict(false, true));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn provider_not_consulted_for_missing_file() {
    let provider = CannedProvider {
        tree: SyntaxTree::new(SyntaxNode::other("unit", vec![])),
        calls: AtomicUsize::new(0),
    };
    assert!(analyze_file(&fixture("Nope.java"), &provider, &InputConfig::default()).is_err());
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn analyses_run_independently_across_threads() {
    let names = ["ThrowOnly.java", "RetryOnly.java", "TryCatchBackoff.java", "Empty.java"];
    let expected = [
        verdict(true, false),
        verdict(false, true),
        verdict(true, true),
        verdict(false, false),
    ];
    let provider = JavaTreeProvider::new();
    std::thread::scope(|s| {
        let handles: Vec<_> = names
            .iter()
            .map(|name| {
                let provider = &provider;
                s.spawn(move || {
                    analyze_file(&fixture(name), provider, &InputConfig::default()).unwrap()
                })
            })
            .collect();
        for (handle, want) in handles.into_iter().zip(expected) {
            assert_eq!(handle.join().unwrap(), want);
        }
    });
}
