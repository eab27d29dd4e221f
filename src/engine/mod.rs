// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail to restore state
//! automatically on backtracking.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Whether the entry is still to be called, exploring choices, or done
//! - The trail checkpoint to rewind to before running it again
//!
//! The execution model is WAM-like:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! A deterministic success is not retried: backtracking into it simply
//! continues backtracking.
//!
//! # Example
//!
//! ```
//! use solve_eq::context::SearchContext;
//! use solve_eq::engine::EngineBuilder;
//! use solve_eq::predicates::{AssignPredicate, EquationPredicate, SuspendPredicate};
//!
//! let mut ctx = SearchContext::new();
//! let engine = EngineBuilder::new()
//!     .add(Box::new(AssignPredicate))
//!     .add(Box::new(EquationPredicate))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! // Engine is consumed, returns Some(engine) if suspended
//! let engine = engine.search(&mut ctx);
//! assert!(engine.is_some());
//! assert_eq!(ctx.assignment.values(), &[9, 2, 5, 7, 3]);
//! ```

pub mod builder;
pub mod predicate;

pub use builder::{EngineBuilder, ProgramBuilder};
pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;
use tracing::{debug, trace};

/// Initial capacity of the predicate stack.
const STACK_CAPACITY: usize = 64;

/// Where a stack entry is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryMode {
    /// try_pred has not run yet (or must run again after a rewind).
    Call,
    /// Exploring the alternatives returned by try_pred.
    Choice { current: usize, total: usize },
    /// Succeeded deterministically; backtracking into it pops it.
    Done,
}

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    mode: EntryMode,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize, trail_checkpoint: usize) -> Self {
        Self {
            predicate_index,
            round,
            mode: EntryMode::Call,
            trail_checkpoint,
        }
    }
}

/// Search engine that coordinates predicate execution and backtracking.
///
/// The engine runs predicates in sequence, managing rounds, choices, and
/// backtracking automatically via the trail system.
#[derive(Debug)]
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Whether the last search stopped at a Suspend.
    suspended: bool,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Predicates will be tried in the order given. Prefer [`EngineBuilder`],
    /// which guarantees the program ends with a terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(STACK_CAPACITY),
            suspended: false,
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search to the next suspension point.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended - call search() again to resume
    /// - `None` if exhausted (backtracked past first predicate) - search is complete
    ///
    /// The solution is the state left in `ctx` at suspension. Resuming
    /// backtracks out of the suspension point and continues the search, so
    /// repeated calls enumerate successive solutions.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence is invalid (reaches the end without FAIL or SUSPEND),
    /// or if retry_pred returns Choices or Suspend.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        if self.suspended {
            self.suspended = false;
            // Backtrack out of the suspending predicate
            self.stack.pop();
            trace!(depth = self.stack.len(), "resuming search");
        } else {
            self.stack.clear();
            self.try_count = 0;
            self.retry_count = 0;

            if self.predicates.is_empty() {
                return None; // Empty is exhausted
            }
            self.stack.push(StackEntry::new(0, 0, ctx.trail.checkpoint()));
        }

        loop {
            let Some(entry) = self.stack.last_mut() else {
                debug!(
                    tries = self.try_count,
                    retries = self.retry_count,
                    "search exhausted"
                );
                return None;
            };

            // Restore the state this entry started from
            ctx.rewind_to(entry.trail_checkpoint);

            let mode = entry.mode;
            match mode {
                EntryMode::Call => {
                    let pred_idx = entry.predicate_index;
                    let round = entry.round;
                    self.try_count += 1;
                    let result = self.predicates[pred_idx].try_pred(ctx, round);
                    trace!(
                        predicate = self.predicates[pred_idx].name(),
                        round,
                        ?result,
                        "try_pred"
                    );

                    match result {
                        PredicateResult::Success => self.push_next_predicate(ctx),
                        PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                        PredicateResult::Failure => {
                            self.stack.pop();
                        }
                        PredicateResult::Choices(total) => {
                            if let Some(entry) = self.stack.last_mut() {
                                entry.mode = EntryMode::Choice { current: 0, total };
                                entry.trail_checkpoint = ctx.trail.checkpoint();
                            }
                        }
                        PredicateResult::Suspend => {
                            debug!(
                                predicate = self.predicates[pred_idx].name(),
                                tries = self.try_count,
                                retries = self.retry_count,
                                "search suspended"
                            );
                            self.suspended = true;
                            return Some(self);
                        }
                    }
                }
                EntryMode::Choice { current, total } => {
                    if current >= total {
                        self.stack.pop();
                        continue;
                    }
                    entry.mode = EntryMode::Choice {
                        current: current + 1,
                        total,
                    };

                    let pred_idx = entry.predicate_index;
                    let round = entry.round;
                    self.retry_count += 1;
                    let result = self.predicates[pred_idx].retry_pred(ctx, round, current);
                    trace!(
                        predicate = self.predicates[pred_idx].name(),
                        round,
                        choice = current,
                        ?result,
                        "retry_pred"
                    );

                    match result {
                        PredicateResult::Success => self.push_next_predicate(ctx),
                        PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                        PredicateResult::Failure => {
                            // Try next choice (loop continues)
                        }
                        PredicateResult::Choices(_) | PredicateResult::Suspend => {
                            panic!("retry_pred returned invalid result: {:?}", result);
                        }
                    }
                }
                EntryMode::Done => {
                    self.stack.pop();
                }
            }
        }
    }

    /// Push a new stack entry for the next predicate in sequence.
    ///
    /// Panics if we've reached the end of the predicate sequence, as this indicates
    /// an invalid program (all valid programs must end with FAIL or SUSPEND).
    fn push_next_predicate(&mut self, ctx: &SearchContext) {
        let current = self.current_entry();
        let next_index = current.predicate_index + 1;
        Self::finish_call(current);

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack
            .push(StackEntry::new(next_index, 0, ctx.trail.checkpoint()));
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self, ctx: &SearchContext) {
        let current = self.current_entry();
        let next_round = current.round + 1;
        let pred_index = current.predicate_index;
        Self::finish_call(current);

        self.stack
            .push(StackEntry::new(pred_index, next_round, ctx.trail.checkpoint()));
    }

    /// A call-mode entry that succeeded has nothing left to offer on backtrack.
    fn finish_call(entry: &mut StackEntry) {
        if entry.mode == EntryMode::Call {
            entry.mode = EntryMode::Done;
        }
    }

    fn current_entry(&mut self) -> &mut StackEntry {
        self.stack
            .last_mut()
            .expect("engine stack is never empty while a predicate runs")
    }

    /// Whether the last call to search() stopped at a suspension point.
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}
