// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining the candidate pool and the mutable search state.
//!
//! The SearchContext is the core data structure passed through the search:
//! - the immutable [`CandidatePool`]
//! - the [`PartialAssignment`] and its used set, changed only via trail-recorded operations
//! - the [`Trail`] that undoes those changes on backtrack
//! - solutions and statistics, which survive backtracking
//!
//! Every search owns its own context, so independent searches never share state.

use crate::equation::ARITY;
use crate::pool::{CandidatePool, UsedSet};
use crate::state::{Assignment, Counters, PartialAssignment, Statistics};
use crate::trail::{Trail, TrailEntry};

/// Search context: pool, trail-tracked assignment, and run results.
///
/// # Example
///
/// ```
/// use solve_eq::context::SearchContext;
///
/// let mut ctx = SearchContext::new();
/// let checkpoint = ctx.trail.checkpoint();
/// ctx.place(4); // candidate 9
/// ctx.place(0); // candidate 2
/// assert_eq!(ctx.assignment.values(), &[9, 2]);
///
/// ctx.rewind_to(checkpoint);
/// assert!(ctx.assignment.is_empty());
/// ```
#[derive(Debug)]
pub struct SearchContext {
    /// Immutable candidate values
    pub pool: CandidatePool,
    /// Trail for O(1) backtracking
    pub trail: Trail,
    /// The assignment under construction
    pub assignment: PartialAssignment,
    /// Complete assignments recorded by the search
    pub solutions: Vec<Assignment>,
    /// Counters for this run
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a search context over the standard pool.
    pub fn new() -> Self {
        Self::with_pool(CandidatePool::standard())
    }

    /// Create a search context over the given pool.
    pub fn with_pool(pool: CandidatePool) -> Self {
        Self {
            pool,
            trail: Trail::new(),
            assignment: PartialAssignment::new(),
            solutions: Vec::new(),
            statistics: Statistics::new(),
        }
    }

    /// Discard all search state, keeping the pool.
    pub fn reset(&mut self) {
        self.trail = Trail::new();
        self.assignment = PartialAssignment::new();
        self.solutions.clear();
        self.statistics.reset();
    }

    /// Append the candidate at pool `index` to the assignment (trail-tracked).
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range, already used, or the assignment is complete.
    pub fn place(&mut self, index: usize) {
        let value = self.pool.value(index);
        self.assignment.push(index, value);
        self.trail.record(TrailEntry::Placed { index });
        self.statistics.increment_counter(Counters::Placements);
    }

    /// Undo every change recorded since `checkpoint`, newest first.
    ///
    /// Stops early at a frozen trail position.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        while let Some(entry) = self.trail.pop_above(checkpoint) {
            match entry {
                TrailEntry::Placed { index } => {
                    self.assignment.pop(index);
                }
            }
        }
    }

    /// Pool indices not yet in the assignment, in pool order.
    pub fn remaining(&self) -> UsedSet {
        self.assignment.remaining(ARITY)
    }

    /// Record the current assignment as a solution.
    ///
    /// Returns false if the assignment is not complete.
    pub fn record_solution(&mut self) -> bool {
        match self.assignment.to_complete() {
            Some(solution) => {
                self.solutions.push(solution);
                true
            }
            None => false,
        }
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}
