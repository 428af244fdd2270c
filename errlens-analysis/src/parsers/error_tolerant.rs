//! Locate ERROR and MISSING nodes in a tree-sitter tree.

use tree_sitter::Node;

/// Count of error nodes and the start of the first one in document order
/// (1-based). When recovery wraps a larger span in one ERROR node, that
/// outer node's start is reported, not the innermost offending token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ErrorSummary {
    pub count: u32,
    pub first_line: u32,
    pub first_column: u32,
}

/// Summarize ERROR/MISSING nodes under `root`, in document order.
/// Only subtrees reporting `has_error()` are descended into.
pub fn summarize_errors(root: Node) -> ErrorSummary {
    let mut summary = ErrorSummary::default();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            if summary.count == 0 {
                let start = node.start_position();
                summary.first_line = start.row as u32 + 1;
                summary.first_column = start.column as u32 + 1;
            }
            summary.count += 1;
        }
        let mut cursor = node.walk();
        let mut erroneous: Vec<Node> = node
            .children(&mut cursor)
            .filter(|child| child.has_error())
            .collect();
        erroneous.reverse();
        stack.extend(erroneous);
    }
    summary
}
