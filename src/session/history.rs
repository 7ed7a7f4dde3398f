//! Linear snapshot history with a cursor.
//!
//! Entries are whole snapshots: `[initial, after move 1, ..., after move N]`.
//! The cursor points at the snapshot matching the live state. Undo and redo
//! only move the cursor; a push from a non-tip cursor drops the redo tail.

/// Snapshot history for undo/redo.
#[derive(Clone, Debug)]
pub struct History<T> {
    entries: Vec<T>,
    cursor: usize,
}

impl<T: Clone> History<T> {
    /// Start a history whose only entry is `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// Record a new snapshot after the cursor, discarding any redo entries.
    pub fn push(&mut self, snapshot: T) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(snapshot);
        self.cursor = self.entries.len() - 1;
    }

    /// Step back one snapshot. `None` at the initial entry.
    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Step forward one snapshot. `None` at the tip.
    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Snapshot at the cursor.
    #[must_use]
    pub fn current(&self) -> &T {
        &self.entries[self.cursor]
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots, including the initial one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a history holds at least its initial entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
