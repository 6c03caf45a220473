//! # Undo/Redo Stack
//!
//! Tracks committed trees and enables undo/redo.
//!
//! ## Design
//!
//! - Each commit records the tree it replaced
//! - Undo restores that tree and moves the current one to the redo stack
//! - Redo restores the tree undo replaced
//! - New commits clear the redo stack
//!
//! The stack only stores snapshots. Restoring one goes through the
//! coordinator's commit path so the text, parsed tree and graph stay in step.

use jsongraph_graph::NodeId;
use serde_json::Value;
use tracing::debug;

/// One recorded document state
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    /// Tree to restore
    pub snapshot: Value,

    /// Node to reselect after restoring, if the change targeted one
    pub node_id: Option<NodeId>,

    pub description: String,
}

/// Undo/redo stack for document editing
#[derive(Debug)]
pub struct UndoStack {
    /// Stack of replaced trees (most recent last)
    undo_stack: Vec<HistoryEntry>,

    /// Stack of undone trees (most recent last)
    redo_stack: Vec<HistoryEntry>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,
}

impl UndoStack {
    /// Create a new undo stack with default max levels (100)
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
        }
    }

    /// Record a commit
    pub fn record(&mut self, entry: HistoryEntry) {
        debug!(description = %entry.description, "Recording history entry");
        self.push_undo(entry);

        // New action invalidates future
        self.redo_stack.clear();
    }

    pub fn pop_undo(&mut self) -> Option<HistoryEntry> {
        self.undo_stack.pop()
    }

    pub fn pop_redo(&mut self) -> Option<HistoryEntry> {
        self.redo_stack.pop()
    }

    /// Push without touching the redo stack
    pub fn push_undo(&mut self, entry: HistoryEntry) {
        self.undo_stack.push(entry);

        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }
    }

    pub fn push_redo(&mut self, entry: HistoryEntry) {
        self.redo_stack.push(entry);
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(n: i64) -> HistoryEntry {
        HistoryEntry {
            snapshot: json!({ "n": n }),
            node_id: None,
            description: format!("Edit {}", n),
        }
    }

    #[test]
    fn test_undo_stack_creation() {
        let stack = UndoStack::new();
        assert_eq!(stack.undo_levels(), 0);
        assert_eq!(stack.redo_levels(), 0);
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
    }

    #[test]
    fn test_record_clears_redo() {
        let mut stack = UndoStack::new();
        stack.record(entry(1));
        let undone = stack.pop_undo().unwrap();
        stack.push_redo(undone);
        assert!(stack.can_redo());

        stack.record(entry(2));
        assert_eq!(stack.redo_levels(), 0);
        assert_eq!(stack.undo_stack.last().unwrap().description, "Edit 2");
    }

    #[test]
    fn test_max_levels_enforced() {
        let mut stack = UndoStack::with_max_levels(2);
        for n in 0..3 {
            stack.record(entry(n));
        }

        assert_eq!(stack.undo_levels(), 2);
        // Oldest entry dropped
        let oldest = stack.undo_stack.first().unwrap();
        assert_eq!(oldest.snapshot, json!({ "n": 1 }));
    }

    #[test]
    fn test_zero_means_unlimited() {
        let mut stack = UndoStack::with_max_levels(0);
        for n in 0..250 {
            stack.record(entry(n));
        }
        assert_eq!(stack.undo_levels(), 250);
    }
}
