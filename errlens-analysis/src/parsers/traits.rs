//! SyntaxTreeProvider trait — the contract every parser implements.

use std::path::Path;

use errlens_core::errors::ParseError;

use crate::tree::SyntaxTree;

/// Turns one compilation unit's bytes into a [`SyntaxTree`].
///
/// `path` is only used for diagnostics; implementations never read it.
pub trait SyntaxTreeProvider: Send + Sync {
    /// Human-readable grammar name.
    fn language(&self) -> &'static str;

    /// File extensions this provider is meant for.
    fn extensions(&self) -> &[&str];

    /// Parse source bytes. Syntactically invalid input is a `ParseError`.
    fn parse(&self, source: &[u8], path: &Path) -> Result<SyntaxTree, ParseError>;
}
