// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The candidate pool: the values an assignment may draw from.
//!
//! A pool holds exactly [`ARITY`] distinct values. Each value may be used
//! at most once per assignment, so a search over the pool visits the
//! `ARITY!` permutations of its values.

pub mod used_set;

pub use used_set::UsedSet;

use crate::equation::ARITY;
use thiserror::Error;

/// Errors raised when building a [`CandidatePool`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("candidate pool needs exactly {expected} values, got {found}")]
    WrongSize { expected: usize, found: usize },

    #[error("candidate value {value} appears more than once")]
    DuplicateValue { value: i64 },
}

/// An immutable pool of distinct candidate values.
///
/// Candidates are tried in pool order, so the order given at construction
/// pins which solution is found first.
///
/// # Examples
///
/// ```
/// use solve_eq::pool::{CandidatePool, PoolError};
///
/// let pool = CandidatePool::standard();
/// assert_eq!(pool.values(), &[2, 3, 5, 7, 9]);
///
/// assert_eq!(
///     CandidatePool::new([1, 1, 2, 3, 4]),
///     Err(PoolError::DuplicateValue { value: 1 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool {
    values: [i64; ARITY],
}

impl CandidatePool {
    /// The puzzle's candidate set, in ascending order.
    pub const STANDARD: [i64; ARITY] = [2, 3, 5, 7, 9];

    /// Build a pool from exactly `ARITY` distinct values.
    pub fn new(values: [i64; ARITY]) -> Result<Self, PoolError> {
        for (i, value) in values.iter().enumerate() {
            if values[..i].contains(value) {
                return Err(PoolError::DuplicateValue { value: *value });
            }
        }
        Ok(Self { values })
    }

    /// Build a pool from a slice, checking its length.
    pub fn from_slice(values: &[i64]) -> Result<Self, PoolError> {
        let values: [i64; ARITY] = values.try_into().map_err(|_| PoolError::WrongSize {
            expected: ARITY,
            found: values.len(),
        })?;
        Self::new(values)
    }

    /// The standard pool {2, 3, 5, 7, 9}.
    pub fn standard() -> Self {
        Self {
            values: Self::STANDARD,
        }
    }

    /// Candidate value at a pool index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= ARITY`.
    pub fn value(&self, index: usize) -> i64 {
        self.values[index]
    }

    pub fn values(&self) -> &[i64; ARITY] {
        &self.values
    }

    /// Whether `value` is one of the candidates.
    pub fn contains(&self, value: i64) -> bool {
        self.values.contains(&value)
    }
}

impl Default for CandidatePool {
    fn default() -> Self {
        Self::standard()
    }
}
