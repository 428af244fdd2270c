//! Owned syntax tree consumed by the classifier.
//!
//! Providers lower their grammar-specific trees into this shape. Only the
//! node kinds the classifier has rules for are distinguished; everything
//! else is `Other` and acts as a transparent container.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Closed set of node kinds relevant to error-handling classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    TryBlock {
        has_finally: bool,
    },
    CatchClause,
    ThrowStatement,
    MethodDeclaration {
        /// Declared thrown-exception types, as written.
        thrown: SmallVec<[String; 2]>,
    },
    CallExpression {
        /// Simple invoked identifier, without receiver or arguments.
        name: String,
    },
    /// Any other grammar node; the label is the grammar's kind name.
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn with_children(kind: NodeKind, children: Vec<SyntaxNode>) -> Self {
        Self { kind, children }
    }

    pub fn other(label: impl Into<String>, children: Vec<SyntaxNode>) -> Self {
        Self::with_children(NodeKind::Other(label.into()), children)
    }

    pub fn try_block(has_finally: bool, children: Vec<SyntaxNode>) -> Self {
        Self::with_children(NodeKind::TryBlock { has_finally }, children)
    }

    pub fn catch_clause(children: Vec<SyntaxNode>) -> Self {
        Self::with_children(NodeKind::CatchClause, children)
    }

    pub fn throw_statement(children: Vec<SyntaxNode>) -> Self {
        Self::with_children(NodeKind::ThrowStatement, children)
    }

    pub fn method<I, S>(thrown: I, children: Vec<SyntaxNode>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_children(
            NodeKind::MethodDeclaration {
                thrown: thrown.into_iter().map(Into::into).collect(),
            },
            children,
        )
    }

    pub fn call(name: impl Into<String>, children: Vec<SyntaxNode>) -> Self {
        Self::with_children(NodeKind::CallExpression { name: name.into() }, children)
    }
}

/// Immutable rooted tree for one compilation unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxTree {
    root: SyntaxNode,
}

impl SyntaxTree {
    pub fn new(root: SyntaxNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &SyntaxNode {
        &self.root
    }

    /// Pre-order walk over every node, root first.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            stack: vec![&self.root],
        }
    }

    pub fn node_count(&self) -> usize {
        self.preorder().count()
    }
}

impl Drop for SyntaxTree {
    // Unlink children iteratively; the derived drop would recurse once per level.
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.root.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

/// Pre-order iterator backed by an explicit stack, so tree depth is not
/// bounded by the call stack. The derived `Clone`, `PartialEq`, `Debug` and
/// serde impls still recurse per level; keep them off deep trees.
pub struct Preorder<'a> {
    stack: Vec<&'a SyntaxNode>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
