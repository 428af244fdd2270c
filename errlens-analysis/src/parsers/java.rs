//! Java provider backed by tree-sitter-java.
//!
//! The grammar has no language-level switch: it accepts every Java version it
//! knows, so legacy and mixed-version files parse without configuration.

use std::path::Path;
use std::time::Instant;

use errlens_core::errors::ParseError;
use smallvec::SmallVec;
use tree_sitter::{Node, Parser};

use super::error_tolerant::summarize_errors;
use super::traits::SyntaxTreeProvider;
use crate::tree::{NodeKind, SyntaxNode, SyntaxTree};

pub struct JavaTreeProvider;

impl Default for JavaTreeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl JavaTreeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl SyntaxTreeProvider for JavaTreeProvider {
    fn language(&self) -> &'static str {
        "java"
    }

    fn extensions(&self) -> &[&str] {
        &["java"]
    }

    fn parse(&self, source: &[u8], path: &Path) -> Result<SyntaxTree, ParseError> {
        let start = Instant::now();

        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .map_err(|e| ParseError::GrammarUnavailable {
                language: self.language().to_string(),
                message: e.to_string(),
            })?;

        let tree = parser.parse(source, None).ok_or_else(|| ParseError::NoTree {
            path: path.to_path_buf(),
        })?;
        let root = tree.root_node();

        if root.has_error() {
            let summary = summarize_errors(root);
            tracing::debug!(
                path = %path.display(),
                errors = summary.count,
                "java source rejected"
            );
            return Err(ParseError::Syntax {
                path: path.to_path_buf(),
                error_count: summary.count,
                line: summary.first_line,
                column: summary.first_column,
            });
        }

        let lowered = SyntaxTree::new(lower(root, source));
        tracing::debug!(
            path = %path.display(),
            nodes = lowered.node_count(),
            parse_time_us = start.elapsed().as_micros() as u64,
            "java source parsed"
        );
        Ok(lowered)
    }
}

/// A tree-sitter node whose named children are still being lowered.
struct Frame<'t> {
    node: Node<'t>,
    /// Unvisited named children, last one first.
    pending: Vec<Node<'t>>,
    lowered: Vec<SyntaxNode>,
}

impl<'t> Frame<'t> {
    fn new(node: Node<'t>) -> Self {
        let mut cursor = node.walk();
        let mut pending: Vec<Node<'t>> = node.named_children(&mut cursor).collect();
        pending.reverse();
        Self {
            node,
            lowered: Vec::with_capacity(pending.len()),
            pending,
        }
    }

    fn finish(self, source: &[u8]) -> SyntaxNode {
        SyntaxNode::with_children(node_kind(self.node, source), self.lowered)
    }
}

/// Lower a tree-sitter tree into a [`SyntaxNode`], keeping named nodes only.
/// Iterative post-order so nesting depth never grows the call stack.
fn lower(root: Node<'_>, source: &[u8]) -> SyntaxNode {
    let mut current = Frame::new(root);
    let mut parents: Vec<Frame<'_>> = Vec::new();
    loop {
        if let Some(child) = current.pending.pop() {
            parents.push(std::mem::replace(&mut current, Frame::new(child)));
            continue;
        }
        let done = current.finish(source);
        match parents.pop() {
            Some(mut parent) => {
                parent.lowered.push(done);
                current = parent;
            }
            None => return done,
        }
    }
}

fn node_kind(node: Node<'_>, source: &[u8]) -> NodeKind {
    match node.kind() {
        "try_statement" | "try_with_resources_statement" => NodeKind::TryBlock {
            has_finally: named_children(node).any(|c| c.kind() == "finally_clause"),
        },
        "catch_clause" => NodeKind::CatchClause,
        "throw_statement" => NodeKind::ThrowStatement,
        "method_declaration" => NodeKind::MethodDeclaration {
            thrown: thrown_types(node, source),
        },
        "method_invocation" => NodeKind::CallExpression {
            name: node
                .child_by_field_name("name")
                .map(|name| text(name, source))
                .unwrap_or_default(),
        },
        other => NodeKind::Other(other.to_string()),
    }
}

/// Types listed in a method's `throws` clause, as written.
fn thrown_types(method: Node<'_>, source: &[u8]) -> SmallVec<[String; 2]> {
    named_children(method)
        .filter(|c| c.kind() == "throws")
        .flat_map(named_children)
        .map(|ty| text(ty, source))
        .collect()
}

fn named_children(node: Node<'_>) -> impl Iterator<Item = Node<'_>> {
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.named_children(&mut cursor).collect();
    children.into_iter()
}

fn text(node: Node<'_>, source: &[u8]) -> String {
    source
        .get(node.byte_range())
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        .unwrap_or_default()
}
