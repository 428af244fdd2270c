//! Error-handling classifier: one pre-order pass over a [`SyntaxTree`],
//! accumulating two independent flags.
//!
//! [`SyntaxTree`]: crate::tree::SyntaxTree

pub mod rules;
pub mod state;
pub mod verdict;

pub use state::ClassificationState;
pub use verdict::{HandlingCategory, Verdict};

use crate::tree::SyntaxTree;

/// Classify a tree. Every node is visited exactly once, with no early exit.
pub fn classify(tree: &SyntaxTree) -> Verdict {
    let mut state = ClassificationState::new();
    let mut visited = 0usize;
    for node in tree.preorder() {
        state.observe(node);
        visited += 1;
    }
    let verdict = state.finish();
    tracing::debug!(
        nodes = visited,
        has_basic_handling = verdict.has_basic_handling,
        has_advanced_handling = verdict.has_advanced_handling,
        "classification complete"
    );
    verdict
}
