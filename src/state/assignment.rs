// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Partial and complete assignments.
//!
//! A [`PartialAssignment`] grows on descent and shrinks on backtrack. It
//! keeps the chosen values, the pool index each came from, and a
//! [`UsedSet`] mirroring those indices, so that
//! `used.len() == len()` and no index appears twice.
//!
//! An [`Assignment`] is a complete, fixed-size result.

use crate::equation::ARITY;
use crate::pool::UsedSet;
use std::fmt;

/// A complete assignment of `ARITY` values in positional order.
///
/// # Examples
///
/// ```
/// use solve_eq::state::Assignment;
///
/// let solution = Assignment::new([9, 2, 5, 7, 3]);
/// assert_eq!(solution.to_string(), "[9, 2, 5, 7, 3]");
/// assert_eq!(solution.as_tuple(), (9, 2, 5, 7, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Assignment([i64; ARITY]);

impl Assignment {
    pub fn new(values: [i64; ARITY]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[i64; ARITY] {
        &self.0
    }

    /// The values as `(a, b, c, d, e)`.
    pub fn as_tuple(&self) -> (i64, i64, i64, i64, i64) {
        let [a, b, c, d, e] = self.0;
        (a, b, c, d, e)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

/// The assignment under construction during search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialAssignment {
    /// Chosen values, in position order.
    values: Vec<i64>,
    /// Pool index of each chosen value.
    indices: Vec<usize>,
    /// Pool indices currently in use.
    used: UsedSet,
}

impl PartialAssignment {
    pub fn new() -> Self {
        Self {
            values: Vec::with_capacity(ARITY),
            indices: Vec::with_capacity(ARITY),
            used: UsedSet::empty(),
        }
    }

    /// Append the candidate at pool `index`.
    ///
    /// # Panics
    ///
    /// Panics if the assignment is already complete or `index` is in use.
    pub(crate) fn push(&mut self, index: usize, value: i64) {
        assert!(!self.is_complete(), "Assignment already has {} values", ARITY);
        assert!(
            !self.used.contains(index),
            "Pool index {} placed twice (used {})",
            index,
            self.used
        );
        self.values.push(value);
        self.indices.push(index);
        self.used.insert(index);
    }

    /// Remove the newest value, returning its pool index.
    ///
    /// `expected` is the index the trail believes was placed last.
    pub(crate) fn pop(&mut self, expected: usize) -> Option<usize> {
        let index = self.indices.pop()?;
        assert_eq!(
            index, expected,
            "Trail out of step with assignment: expected index {}, found {}",
            expected, index
        );
        self.values.pop();
        self.used.remove(index);
        Some(index)
    }

    /// Number of positions filled so far (the search depth).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.values.len() == ARITY
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn used(&self) -> UsedSet {
        self.used
    }

    /// Pool indices in `0..pool_size` not yet in the assignment.
    pub fn remaining(&self, pool_size: usize) -> UsedSet {
        self.used.complement(pool_size)
    }

    /// The complete assignment, if every position is filled.
    pub fn to_complete(&self) -> Option<Assignment> {
        let values: [i64; ARITY] = self.values.as_slice().try_into().ok()?;
        Some(Assignment::new(values))
    }

    /// Check that the used set mirrors the assignment exactly.
    pub fn is_consistent(&self) -> bool {
        if self.values.len() != self.indices.len() || self.used.len() != self.indices.len() {
            return false;
        }
        let mut seen = UsedSet::empty();
        for &index in &self.indices {
            if seen.contains(index) || !self.used.contains(index) {
                return false;
            }
            seen.insert(index);
        }
        seen == self.used
    }
}
