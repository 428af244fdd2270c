//! Syntax tree model shared by providers and the classifier.

pub mod types;

pub use types::{NodeKind, Preorder, SyntaxNode, SyntaxTree};
