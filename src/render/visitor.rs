//! Visitor pattern for customizing block rendering.
//!
//! Visitors see each block after its text has been resolved and may replace
//! the block's output or drop it entirely.
//!
//! # Example
//!
//! ```
//! use tavnit::render::visitor::{BlockVisitor, VisitorAction};
//! use tavnit::model::TableContent;
//!
//! struct NoTables;
//!
//! impl BlockVisitor for NoTables {
//!     fn visit_table(&mut self, _table: &TableContent) -> VisitorAction {
//!         VisitorAction::Replace("<!-- table omitted -->".to_string())
//!     }
//! }
//! ```

use crate::model::{BlockKind, ListContent, TableContent};

/// Action returned by visitor methods to control rendering behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VisitorAction {
    /// Continue with default rendering.
    #[default]
    Continue,

    /// Replace the block with custom output (emitted as-is).
    Replace(String),

    /// Skip this block entirely (produce no output).
    Skip,
}

/// Trait for visiting blocks during rendering.
///
/// All methods return `VisitorAction::Continue` by default.
pub trait BlockVisitor: Send + Sync {
    /// Called before rendering a heading, with its resolved text.
    fn visit_heading(&mut self, text: &str, level: u8) -> VisitorAction {
        let _ = (text, level);
        VisitorAction::Continue
    }

    /// Called before rendering a paragraph, quote or signature.
    fn visit_text(&mut self, kind: BlockKind, text: &str) -> VisitorAction {
        let _ = (kind, text);
        VisitorAction::Continue
    }

    /// Called before rendering a table (cell text unresolved).
    fn visit_table(&mut self, table: &TableContent) -> VisitorAction {
        let _ = table;
        VisitorAction::Continue
    }

    /// Called before rendering a list (item text unresolved).
    fn visit_list(&mut self, list: &ListContent, ordered: bool) -> VisitorAction {
        let _ = (list, ordered);
        VisitorAction::Continue
    }

    /// Called before rendering a page break or rule.
    fn visit_marker(&mut self, kind: BlockKind) -> VisitorAction {
        let _ = kind;
        VisitorAction::Continue
    }
}

/// Runs several visitors in order; the first non-`Continue` action wins.
#[derive(Default)]
pub struct CompositeVisitor {
    visitors: Vec<Box<dyn BlockVisitor>>,
}

impl CompositeVisitor {
    /// Create an empty composite.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a visitor and return self.
    pub fn with<V: BlockVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitors.push(Box::new(visitor));
        self
    }

    /// Add a visitor.
    pub fn add<V: BlockVisitor + 'static>(&mut self, visitor: V) {
        self.visitors.push(Box::new(visitor));
    }

    /// Number of visitors.
    pub fn len(&self) -> usize {
        self.visitors.len()
    }

    /// Check if there are no visitors.
    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }

    fn first_action(
        &mut self,
        mut f: impl FnMut(&mut dyn BlockVisitor) -> VisitorAction,
    ) -> VisitorAction {
        for visitor in &mut self.visitors {
            let action = f(visitor.as_mut());
            if action != VisitorAction::Continue {
                return action;
            }
        }
        VisitorAction::Continue
    }
}

impl BlockVisitor for CompositeVisitor {
    fn visit_heading(&mut self, text: &str, level: u8) -> VisitorAction {
        self.first_action(|v| v.visit_heading(text, level))
    }

    fn visit_text(&mut self, kind: BlockKind, text: &str) -> VisitorAction {
        self.first_action(|v| v.visit_text(kind, text))
    }

    fn visit_table(&mut self, table: &TableContent) -> VisitorAction {
        self.first_action(|v| v.visit_table(table))
    }

    fn visit_list(&mut self, list: &ListContent, ordered: bool) -> VisitorAction {
        self.first_action(|v| v.visit_list(list, ordered))
    }

    fn visit_marker(&mut self, kind: BlockKind) -> VisitorAction {
        self.first_action(|v| v.visit_marker(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SkipRules;

    impl BlockVisitor for SkipRules {
        fn visit_marker(&mut self, kind: BlockKind) -> VisitorAction {
            if kind == BlockKind::Rule {
                VisitorAction::Skip
            } else {
                VisitorAction::Continue
            }
        }
    }

    struct ReplaceMarkers;

    impl BlockVisitor for ReplaceMarkers {
        fn visit_marker(&mut self, _kind: BlockKind) -> VisitorAction {
            VisitorAction::Replace("<!-- marker -->".to_string())
        }
    }

    #[test]
    fn test_composite_first_action_wins() {
        let mut composite = CompositeVisitor::new().with(SkipRules).with(ReplaceMarkers);
        assert_eq!(composite.len(), 2);

        assert_eq!(composite.visit_marker(BlockKind::Rule), VisitorAction::Skip);
        assert_eq!(
            composite.visit_marker(BlockKind::PageBreak),
            VisitorAction::Replace("<!-- marker -->".to_string())
        );
        assert_eq!(
            composite.visit_text(BlockKind::Paragraph, "x"),
            VisitorAction::Continue
        );
    }
}
