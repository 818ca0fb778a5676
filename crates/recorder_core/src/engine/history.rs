//! Bounded undo/redo history
//!
//! An index-addressed sequence of immutable snapshots. `commit` truncates any
//! redo future before appending; once the sequence exceeds its limit the
//! oldest snapshot is evicted from the front. `undo` / `redo` only move the
//! index and are no-ops at the boundaries.

use std::collections::VecDeque;

/// Default number of snapshots kept (including the current one)
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone)]
pub struct HistoryStore<T> {
    snapshots: VecDeque<T>,
    index: usize,
    limit: usize,
}

impl<T> HistoryStore<T> {
    /// Start a history holding `initial` at index 0.
    ///
    /// `limit` below 1 is raised to 1 so the current snapshot always exists.
    pub fn new(initial: T, limit: usize) -> Self {
        let mut snapshots = VecDeque::with_capacity(limit.clamp(1, DEFAULT_HISTORY_LIMIT) + 1);
        snapshots.push_back(initial);
        Self { snapshots, index: 0, limit: limit.max(1) }
    }

    /// Snapshot currently visible
    pub fn current(&self) -> &T {
        &self.snapshots[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the current snapshot is never evicted.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    /// Make `snapshot` the current state, dropping any redo future.
    ///
    /// When the limit is exceeded the oldest snapshot is evicted and the index
    /// keeps pointing at the snapshot just committed.
    pub fn commit(&mut self, snapshot: T) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push_back(snapshot);

        while self.snapshots.len() > self.limit {
            self.snapshots.pop_front();
        }
        self.index = self.snapshots.len() - 1;
    }

    /// Step back one snapshot. `None` at the oldest snapshot.
    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(&self.snapshots[self.index])
    }

    /// Step forward one snapshot. `None` at the newest snapshot.
    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(&self.snapshots[self.index])
    }

    pub fn snapshots(&self) -> impl Iterator<Item = &T> {
        self.snapshots.iter()
    }
}
