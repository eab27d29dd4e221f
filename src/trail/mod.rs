// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the search engine.
//!
//! Every change the search makes to the assignment is recorded on the trail.
//! Backtracking rewinds the trail to a checkpoint, undoing the recorded
//! changes in reverse order. The undo itself is applied by
//! [`SearchContext::rewind_to`](crate::context::SearchContext::rewind_to),
//! which owns both the trail and the state it describes.

/// A single entry in the trail, recording one state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailEntry {
    /// The candidate at this pool index was appended to the assignment.
    Placed { index: usize },
}

/// The trail system for O(1) backtracking.
///
/// Checkpoints are trail lengths: rewinding to a checkpoint pops every
/// entry recorded after it.
///
/// # Memory Model
///
/// Each SearchContext owns its own trail, so independent searches never
/// share undo state.
#[derive(Debug)]
pub struct Trail {
    /// All trail entries recorded so far
    entries: Vec<TrailEntry>,
    /// Optional frozen position that prevents further backtracking
    frozen_at: Option<usize>,
}

impl Trail {
    /// Maximum trail size. A complete assignment needs ARITY entries, so
    /// anything near this is a bug in the search.
    pub const MAX_SIZE: usize = 64;

    /// Create a new empty trail.
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(Self::MAX_SIZE),
            frozen_at: None,
        }
    }

    /// Record a checkpoint for later backtracking.
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Freeze the trail at the current position.
    ///
    /// After freezing, no backtracking past this point is allowed.
    pub fn freeze(&mut self) {
        self.frozen_at = Some(self.entries.len());
    }

    /// Whether the trail has been frozen.
    pub fn is_frozen(&self) -> bool {
        self.frozen_at.is_some()
    }

    /// Record a state change.
    ///
    /// # Panics
    ///
    /// Panics if the trail exceeds MAX_SIZE (indicates a bug in the search algorithm).
    pub(crate) fn record(&mut self, entry: TrailEntry) {
        if self.entries.len() >= Self::MAX_SIZE {
            panic!("Trail overflow: exceeded {} entries", Self::MAX_SIZE);
        }
        self.entries.push(entry);
    }

    /// Pop the newest entry if it was recorded after `checkpoint`.
    ///
    /// Returns `None` once the trail is back at the checkpoint, or when
    /// popping would cross the frozen position.
    pub(crate) fn pop_above(&mut self, checkpoint: usize) -> Option<TrailEntry> {
        let floor = checkpoint.max(self.frozen_at.unwrap_or(0));
        if self.entries.len() > floor {
            self.entries.pop()
        } else {
            None
        }
    }

    /// Entries recorded since `checkpoint`, oldest first.
    pub fn entries_since(&self, checkpoint: usize) -> &[TrailEntry] {
        &self.entries[checkpoint.min(self.entries.len())..]
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}
