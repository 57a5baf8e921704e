//! # Undo/Redo History
//!
//! Full-snapshot history over campaign documents.
//!
//! ## Design
//!
//! - Every entry is a complete `Arc<CampaignDocument>`; campaign documents
//!   are small and blocks are shared between snapshots, so a snapshot costs
//!   one `Vec` of pointers plus the blocks that actually changed
//! - A mutation that returns its input (`Arc::ptr_eq`) records nothing
//! - New mutations clear the redo stack
//! - Hydration replaces the document and forgets both stacks
//! - No coalescing: callers commit edits when a field is done (blur),
//!   not on every keystroke
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = History::new(Arc::new(doc));
//!
//! history.apply(|doc| mutations::remove_block(doc, "hero1-1"));
//! history.undo();
//! history.redo();
//! ```

use crate::mutations::{Mutation, MutationContext};
use lander_model::CampaignDocument;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::debug;

/// Undo/redo state machine: `past` ← `present` → `future`
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    /// Oldest first
    past: VecDeque<Arc<CampaignDocument>>,

    present: Arc<CampaignDocument>,

    /// Nearest undo first
    future: VecDeque<Arc<CampaignDocument>>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,
}

impl History {
    /// Create a history with unlimited undo levels
    pub fn new(present: Arc<CampaignDocument>) -> Self {
        Self::with_max_levels(present, 0)
    }

    /// Create a history keeping at most `max_levels` undo entries (0 = unlimited)
    pub fn with_max_levels(present: Arc<CampaignDocument>, max_levels: usize) -> Self {
        Self {
            past: VecDeque::new(),
            present,
            future: VecDeque::new(),
            max_levels,
        }
    }

    /// Apply a pure document transformation and record it for undo
    ///
    /// Returns `false` (and records nothing) when `f` hands back the
    /// current document.
    pub fn apply<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&Arc<CampaignDocument>) -> Arc<CampaignDocument>,
    {
        let next = f(&self.present);
        if Arc::ptr_eq(&next, &self.present) {
            return false;
        }

        let previous = std::mem::replace(&mut self.present, next);
        self.past.push_back(previous);

        // Trim if exceeded max levels
        if self.max_levels > 0 && self.past.len() > self.max_levels {
            self.past.pop_front();
        }

        // New action invalidates future
        self.future.clear();
        true
    }

    /// Apply a `Mutation` and record it for undo
    pub fn apply_mutation(&mut self, mutation: &Mutation, ctx: &mut MutationContext<'_>) -> bool {
        let applied = self.apply(|doc| mutation.apply(doc, ctx));
        if !applied {
            debug!(mutation = mutation.name(), "Mutation was a no-op, history unchanged");
        }
        applied
    }

    /// Step back one entry; `false` when there is nothing to undo
    pub fn undo(&mut self) -> bool {
        match self.past.pop_back() {
            Some(previous) => {
                let current = std::mem::replace(&mut self.present, previous);
                self.future.push_front(current);
                true
            }
            None => false,
        }
    }

    /// Step forward one entry; `false` when there is nothing to redo
    pub fn redo(&mut self) -> bool {
        match self.future.pop_front() {
            Some(next) => {
                let current = std::mem::replace(&mut self.present, next);
                self.past.push_back(current);
                true
            }
            None => false,
        }
    }

    /// Replace the document without recording history (load, reload)
    pub fn hydrate(&mut self, document: Arc<CampaignDocument>) {
        self.present = document;
        self.clear();
    }

    /// Clear all undo/redo history, keeping the present document
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    pub fn present(&self) -> &Arc<CampaignDocument> {
        &self.present
    }

    /// Undo entries, oldest first
    pub fn past(&self) -> impl ExactSizeIterator<Item = &Arc<CampaignDocument>> {
        self.past.iter()
    }

    /// Redo entries, nearest first
    pub fn future(&self) -> impl ExactSizeIterator<Item = &Arc<CampaignDocument>> {
        self.future.iter()
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.past.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.future.len()
    }

    pub fn max_levels(&self) -> usize {
        self.max_levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutations::{move_block, remove_block, set_block_prop};
    use lander_model::{PageBlock, PropValue};

    fn doc() -> Arc<CampaignDocument> {
        let mut doc = CampaignDocument::new("c1", "Test");
        doc.blocks.push(Arc::new(PageBlock::new("a", "Header1")));
        doc.blocks.push(Arc::new(PageBlock::new("b", "Hero1")));
        Arc::new(doc)
    }

    #[test]
    fn test_history_creation() {
        let history = History::new(doc());
        assert_eq!(history.undo_levels(), 0);
        assert_eq!(history.redo_levels(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_apply_and_undo() {
        let d0 = doc();
        let mut history = History::new(Arc::clone(&d0));

        assert!(history.apply(|d| remove_block(d, "a")));
        assert_eq!(history.undo_levels(), 1);
        assert_eq!(history.present().block_ids(), vec!["b"]);

        assert!(history.undo());
        assert!(Arc::ptr_eq(history.present(), &d0));
        assert_eq!(history.undo_levels(), 0);
        assert_eq!(history.redo_levels(), 1);

        assert!(history.redo());
        assert_eq!(history.present().block_ids(), vec!["b"]);
        assert_eq!(history.undo_levels(), 1);
        assert_eq!(history.redo_levels(), 0);
    }

    #[test]
    fn test_no_op_records_nothing() {
        let mut history = History::new(doc());

        assert!(!history.apply(|d| remove_block(d, "missing")));
        assert!(!history.apply(|d| move_block(d, "a", 0)));
        assert_eq!(history.undo_levels(), 0);
    }

    #[test]
    fn test_boundaries_are_no_ops() {
        let d0 = doc();
        let mut history = History::new(Arc::clone(&d0));

        assert!(!history.undo());
        assert!(!history.redo());
        assert!(Arc::ptr_eq(history.present(), &d0));
    }

    #[test]
    fn test_new_mutation_clears_redo() {
        let mut history = History::new(doc());

        history.apply(|d| set_block_prop(d, "a", "logoText", PropValue::from("One")));
        history.apply(|d| set_block_prop(d, "a", "logoText", PropValue::from("Two")));
        history.undo();
        history.undo();
        assert_eq!(history.redo_levels(), 2);

        history.apply(|d| remove_block(d, "b"));
        assert_eq!(history.redo_levels(), 0);
        assert_eq!(history.undo_levels(), 1);
    }

    #[test]
    fn test_future_is_nearest_first() {
        let mut history = History::new(doc());

        history.apply(|d| set_block_prop(d, "a", "n", PropValue::from(1)));
        history.apply(|d| set_block_prop(d, "a", "n", PropValue::from(2)));
        history.undo();
        history.undo();

        let future: Vec<_> = history
            .future()
            .map(|d| d.blocks[0].prop("n").cloned())
            .collect();
        assert_eq!(future, vec![Some(PropValue::from(1)), Some(PropValue::from(2))]);
    }

    #[test]
    fn test_hydrate_clears_both_stacks() {
        let mut history = History::new(doc());

        history.apply(|d| remove_block(d, "a"));
        history.apply(|d| remove_block(d, "b"));
        history.undo();
        assert!(history.can_undo());
        assert!(history.can_redo());

        let fresh = Arc::new(CampaignDocument::new("c1", "Reloaded"));
        history.hydrate(Arc::clone(&fresh));

        assert!(Arc::ptr_eq(history.present(), &fresh));
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_max_levels_enforced() {
        let mut history = History::with_max_levels(doc(), 2);

        for i in 0..3 {
            history.apply(|d| set_block_prop(d, "a", "n", PropValue::from(i)));
        }

        // Should only keep 2 (max levels)
        assert_eq!(history.undo_levels(), 2);
        assert!(history.undo());
        assert!(history.undo());
        assert!(!history.undo());
        assert_eq!(history.present().blocks[0].prop("n"), Some(&PropValue::from(0)));
    }
}
