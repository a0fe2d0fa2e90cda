use std::collections::VecDeque;

use super::{HistoryEntry, Snapshot};
use crate::grid::Grid;

/// Default number of entries each stack keeps
pub const MAX_HISTORY: usize = 99;

/// Bounded undo/redo stacks of committed gestures
#[derive(Debug, Clone)]
pub struct History {
    /// Entries that can be undone, oldest at the front
    undo_stack: VecDeque<HistoryEntry>,
    /// Entries that can be redone, oldest at the front
    redo_stack: VecDeque<HistoryEntry>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(MAX_HISTORY)
    }
}

impl History {
    /// Creates an empty history keeping at most `limit` entries per stack
    pub fn new(limit: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Snapshot to hand back to [`History::commit_gesture`] once the gesture ends
    pub fn begin_gesture(&self, grid: &Grid) -> Snapshot {
        Snapshot::capture(grid)
    }

    /// Diffs the grid against `before` and records the result.
    ///
    /// Returns `true` if anything changed. An empty diff leaves both stacks
    /// untouched, a non-empty one clears the redo stack.
    pub fn commit_gesture(&mut self, before: &Snapshot, grid: &Grid) -> bool {
        match HistoryEntry::new(before.diff(grid)) {
            Some(entry) => {
                log::debug!("Committing gesture with {} changed cells", entry.len());
                self.record(entry);
                true
            }
            None => false,
        }
    }

    /// Pushes an entry onto the undo stack and invalidates redo
    pub fn record(&mut self, entry: HistoryEntry) {
        Self::push_bounded(&mut self.undo_stack, entry, self.limit);
        self.redo_stack.clear();
    }

    /// Reverts the most recent entry. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self, grid: &mut Grid) -> bool {
        let Some(entry) = self.undo_stack.pop_back() else {
            return false;
        };
        entry.revert(grid);
        Self::push_bounded(&mut self.redo_stack, entry, self.limit);
        true
    }

    /// Re-applies the most recently undone entry. Returns `false` if there was nothing to redo.
    pub fn redo(&mut self, grid: &mut Grid) -> bool {
        let Some(entry) = self.redo_stack.pop_back() else {
            return false;
        };
        entry.apply(grid);
        Self::push_bounded(&mut self.undo_stack, entry, self.limit);
        true
    }

    fn push_bounded(stack: &mut VecDeque<HistoryEntry>, entry: HistoryEntry, limit: usize) {
        stack.push_back(entry);
        while stack.len() > limit {
            if let Some(evicted) = stack.pop_front() {
                log::debug!("History full, dropping oldest entry ({} cells)", evicted.len());
            }
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Most recent undoable entry
    pub fn last_entry(&self) -> Option<&HistoryEntry> {
        self.undo_stack.back()
    }

    /// Drops both stacks
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
