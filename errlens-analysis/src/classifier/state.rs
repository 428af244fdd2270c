//! Per-run classification flags.

use super::rules::{call_signal, CallSignal};
use super::verdict::Verdict;
use crate::tree::{NodeKind, SyntaxNode};

/// Flags accumulated during one traversal. Monotonic: once set, never reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassificationState {
    has_basic_handling: bool,
    has_advanced_handling: bool,
}

impl ClassificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply every rule for one node. Children are the caller's concern.
    pub fn observe(&mut self, node: &SyntaxNode) {
        match &node.kind {
            // A finally-section implies a try block, so it needs no rule of its own.
            NodeKind::TryBlock { .. } | NodeKind::CatchClause | NodeKind::ThrowStatement => {
                self.mark_basic(&node.kind);
            }
            NodeKind::MethodDeclaration { thrown } if !thrown.is_empty() => {
                self.mark_basic(&node.kind);
            }
            NodeKind::CallExpression { name } => match call_signal(name) {
                Some(CallSignal::Basic) => self.mark_basic(&node.kind),
                Some(CallSignal::Advanced) => self.mark_advanced(&node.kind),
                None => {}
            },
            NodeKind::MethodDeclaration { .. } | NodeKind::Other(_) => {}
        }
    }

    pub fn has_basic_handling(&self) -> bool {
        self.has_basic_handling
    }

    pub fn has_advanced_handling(&self) -> bool {
        self.has_advanced_handling
    }

    /// Snapshot the flags. Consumes the state; a new run starts fresh.
    pub fn finish(self) -> Verdict {
        Verdict {
            has_basic_handling: self.has_basic_handling,
            has_advanced_handling: self.has_advanced_handling,
        }
    }

    fn mark_basic(&mut self, trigger: &NodeKind) {
        if !self.has_basic_handling {
            tracing::trace!(?trigger, "basic handling detected");
        }
        self.has_basic_handling = true;
    }

    fn mark_advanced(&mut self, trigger: &NodeKind) {
        if !self.has_advanced_handling {
            tracing::trace!(?trigger, "advanced handling detected");
        }
        self.has_advanced_handling = true;
    }
}
