//! errlens-analysis: decides whether one source file exhibits basic and/or
//! advanced error-handling patterns.
//!
//! - Source: bounded file reading with BOM handling
//! - Tree: the closed-kind syntax tree the classifier walks
//! - Parsers: tree-sitter providers that lower grammar trees into it
//! - Classifier: single-pass rule evaluation producing a `Verdict`
//! - Reporter: single-line stdout record

pub mod classifier;
pub mod parsers;
pub mod pipeline;
pub mod reporter;
pub mod source;
pub mod tree;

pub use classifier::{classify, ClassificationState, HandlingCategory, Verdict};
pub use parsers::{JavaTreeProvider, SyntaxTreeProvider};
pub use pipeline::analyze_file;
pub use tree::{NodeKind, SyntaxNode, SyntaxTree};
