// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Builder for well-formed predicate programs.
//!
//! A program must end in FAIL or SUSPEND. `EngineBuilder` only hands out a
//! [`SearchEngine`] after `terminal()` has been given a
//! [`TerminalPredicate`], so a program that runs off the end cannot be built.

use super::{Predicate, SearchEngine, TerminalPredicate};

/// Collects the non-terminal predicates of a program.
///
/// # Example
///
/// ```
/// use solve_eq::context::SearchContext;
/// use solve_eq::engine::EngineBuilder;
/// use solve_eq::predicates::{AssignPredicate, FailPredicate};
///
/// let mut ctx = SearchContext::new();
/// let engine = EngineBuilder::new()
///     .add(Box::new(AssignPredicate))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Every permutation is tried, then the search is exhausted
/// assert!(engine.search(&mut ctx).is_none());
/// ```
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// End the program with a terminal predicate.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> ProgramBuilder {
        self.predicates.push(predicate);
        ProgramBuilder {
            predicates: self.predicates,
        }
    }
}

/// A complete program, ready to become an engine.
#[derive(Debug)]
pub struct ProgramBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl ProgramBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }

    /// Number of predicates in the program, including the terminal one.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}
