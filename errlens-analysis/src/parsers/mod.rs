//! Syntax tree providers: grammar-aware parsers lowered into [`SyntaxTree`].
//!
//! [`SyntaxTree`]: crate::tree::SyntaxTree

pub mod error_tolerant;
pub mod java;
pub mod traits;

pub use java::JavaTreeProvider;
pub use traits::SyntaxTreeProvider;
