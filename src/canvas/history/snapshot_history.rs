//! Undo and redo stacks of document snapshots.

use super::snapshot::Snapshot;

/// Undo/redo stacks, most recent entry last.
///
/// Depth is unbounded unless a limit is configured, in which case the oldest
/// undo entries are evicted first.
#[derive(Debug, Default)]
pub struct SnapshotHistory {
    /// Snapshots that can be restored by undo (most recent last)
    undo_stack: Vec<Snapshot>,
    /// Snapshots that can be restored by redo (most recent last)
    redo_stack: Vec<Snapshot>,
    limit: Option<usize>,
}

impl SnapshotHistory {
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Default::default()
        }
    }

    /// Record the pre-edit state of a new edit
    pub fn record(&mut self, snapshot: Snapshot) {
        // A new edit starts a new branch
        self.redo_stack.clear();
        self.undo_stack.push(snapshot);
        self.trim();
    }

    /// Step back: returns the state to restore and parks `current` for redo
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Step forward: returns the state to restore and parks `current` for undo
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        self.trim();
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Change the depth limit, evicting old entries if the new one is smaller
    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit;
        self.trim();
    }

    fn trim(&mut self) {
        if let Some(limit) = self.limit
            && self.undo_stack.len() > limit
        {
            let excess = self.undo_stack.len() - limit;
            self.undo_stack.drain(..excess);
        }
    }
}
