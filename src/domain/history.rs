//! Bounded undo/redo history of full grid snapshots.

use std::collections::VecDeque;

use super::{Snapshot, UndoPolicy};

/// Default number of strokes that can be undone
pub const DEFAULT_HISTORY_DEPTH: usize = 20;

/// What an undo or redo step asks the grid to become
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Restore {
    Snapshot(Snapshot),
    /// Clear every cell
    Blank,
}

/// HistoryManager keeps pre-stroke snapshots on a bounded undo stack
/// (oldest evicted first) and undone states on an unbounded redo stack.
#[derive(Clone, Debug)]
pub struct HistoryManager {
    undo_stack: VecDeque<Snapshot>,
    redo_stack: Vec<Snapshot>,
    capacity: usize,
    policy: UndoPolicy,
}

impl HistoryManager {
    pub fn new(policy: UndoPolicy) -> Self {
        Self::with_capacity(DEFAULT_HISTORY_DEPTH, policy)
    }

    /// Create a history holding at most `capacity` undo entries (minimum 1)
    pub fn with_capacity(capacity: usize, policy: UndoPolicy) -> Self {
        let capacity = capacity.max(1);
        Self {
            undo_stack: VecDeque::with_capacity(capacity + 1),
            redo_stack: Vec::new(),
            capacity,
            policy,
        }
    }

    pub const fn policy(&self) -> UndoPolicy {
        self.policy
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Record the grid state as it was before a new stroke.
    /// Starting a new branch always invalidates the redo history.
    pub fn record_before_stroke(&mut self, snapshot: Snapshot) {
        self.push_undo(snapshot);
        self.redo_stack.clear();
    }

    /// Step back once. `current` is the grid state being left behind.
    pub fn undo(&mut self, current: Snapshot) -> Option<Restore> {
        let popped = self.undo_stack.pop_back()?;

        let restore = match self.policy {
            UndoPolicy::Standard => {
                self.redo_stack.push(current);
                Restore::Snapshot(popped)
            }
            UndoPolicy::Legacy => {
                self.redo_stack.push(popped);
                match self.undo_stack.back() {
                    Some(top) => Restore::Snapshot(top.clone()),
                    None => Restore::Blank,
                }
            }
        };

        tracing::debug!(
            undo = self.undo_stack.len(),
            redo = self.redo_stack.len(),
            "undo"
        );
        Some(restore)
    }

    /// Replay the most recently undone step. `current` is the grid state being left behind.
    pub fn redo(&mut self, current: Snapshot) -> Option<Restore> {
        let next = self.redo_stack.pop()?;

        match self.policy {
            UndoPolicy::Standard => self.push_undo(current),
            UndoPolicy::Legacy => self.push_undo(next.clone()),
        }

        tracing::debug!(
            undo = self.undo_stack.len(),
            redo = self.redo_stack.len(),
            "redo"
        );
        Some(Restore::Snapshot(next))
    }

    /// Drop every entry, e.g. when the grid is rebuilt at a new size
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn push_undo(&mut self, snapshot: Snapshot) {
        self.undo_stack.push_back(snapshot);
        if self.undo_stack.len() > self.capacity {
            self.undo_stack.pop_front();
            tracing::debug!(capacity = self.capacity, "evicted oldest history entry");
        }
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(UndoPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, Color};

    /// A 1-cell snapshot tagged with a distinguishable color
    fn tagged(tag: u8) -> Snapshot {
        Snapshot::from_cells(vec![Cell::Painted(Color::rgb(tag, 0, 0))])
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut history = HistoryManager::default();
        assert_eq!(history.undo(tagged(0)), None);
        assert_eq!(history.redo(tagged(0)), None);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_standard_undo_returns_pre_stroke_state() {
        let mut history = HistoryManager::new(UndoPolicy::Standard);
        history.record_before_stroke(tagged(1));

        assert_eq!(history.undo(tagged(2)), Some(Restore::Snapshot(tagged(1))));
        assert_eq!(history.redo(tagged(1)), Some(Restore::Snapshot(tagged(2))));
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = HistoryManager::default();
        history.record_before_stroke(tagged(1));
        history.undo(tagged(2));
        assert!(history.can_redo());

        history.record_before_stroke(tagged(1));
        assert!(!history.can_redo());
        assert_eq!(history.redo(tagged(3)), None);
    }

    #[test]
    fn test_fifo_eviction_keeps_latest_twenty() {
        let mut history = HistoryManager::default();
        for tag in 1..=21 {
            history.record_before_stroke(tagged(tag));
        }
        assert_eq!(history.undo_depth(), DEFAULT_HISTORY_DEPTH);

        let mut restored = Vec::new();
        while let Some(Restore::Snapshot(s)) = history.undo(tagged(0)) {
            restored.push(s);
        }
        assert_eq!(restored.len(), 20);
        assert_eq!(restored.first(), Some(&tagged(21)));
        assert_eq!(restored.last(), Some(&tagged(2)));
        assert!(!restored.contains(&tagged(1)));
    }

    #[test]
    fn test_custom_capacity_has_floor_of_one() {
        let mut history = HistoryManager::with_capacity(0, UndoPolicy::Standard);
        assert_eq!(history.capacity(), 1);
        history.record_before_stroke(tagged(1));
        history.record_before_stroke(tagged(2));
        assert_eq!(history.undo_depth(), 1);
    }

    #[test]
    fn test_redo_respects_capacity() {
        let mut history = HistoryManager::with_capacity(2, UndoPolicy::Standard);
        history.record_before_stroke(tagged(1));
        history.record_before_stroke(tagged(2));
        history.undo(tagged(3));
        history.redo(tagged(2));
        assert_eq!(history.undo_depth(), 2);
    }

    #[test]
    fn test_legacy_undo_applies_entry_below() {
        let mut history = HistoryManager::new(UndoPolicy::Legacy);
        history.record_before_stroke(tagged(1));
        history.record_before_stroke(tagged(2));

        assert_eq!(history.undo(tagged(9)), Some(Restore::Snapshot(tagged(1))));
        assert_eq!(history.undo(tagged(9)), Some(Restore::Blank));
        assert_eq!(history.undo(tagged(9)), None);
    }

    #[test]
    fn test_legacy_redo_replays_popped_entry() {
        let mut history = HistoryManager::new(UndoPolicy::Legacy);
        history.record_before_stroke(tagged(1));
        history.undo(tagged(9));

        assert_eq!(history.redo(tagged(9)), Some(Restore::Snapshot(tagged(1))));
        assert_eq!(history.undo_depth(), 1);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_clear() {
        let mut history = HistoryManager::default();
        history.record_before_stroke(tagged(1));
        history.record_before_stroke(tagged(2));
        history.undo(tagged(3));
        history.clear();
        assert_eq!(history.undo_depth(), 0);
        assert_eq!(history.redo_depth(), 0);
    }
}
