// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! UsedSet type for tracking which pool slots are in the assignment.
//!
//! A UsedSet is a compact bitset over pool indices, where bit i is set if
//! the candidate at index i has been placed.
//!
//! # Examples
//!
//! ```
//! use solve_eq::pool::UsedSet;
//!
//! let mut used = UsedSet::empty();
//! used.insert(0);
//! used.insert(3);
//!
//! assert_eq!(used.len(), 2);
//! assert!(used.contains(3));
//! assert_eq!(format!("{}", used), "{0,3}");
//!
//! let free: Vec<usize> = used.complement(5).iter().collect();
//! assert_eq!(free, vec![1, 2, 4]);
//! ```

use std::fmt;

/// A set of pool indices represented as a bitset.
///
/// Provides O(1) insert, remove, and contains operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UsedSet(u32);

impl UsedSet {
    /// Largest index that fits in the bitset, plus one.
    pub const CAPACITY: usize = u32::BITS as usize;

    /// Create an empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a set containing every index in `0..size`.
    pub fn full(size: usize) -> Self {
        debug_assert!(size <= Self::CAPACITY, "UsedSet size {} too large", size);
        if size == Self::CAPACITY {
            Self(u32::MAX)
        } else {
            Self((1 << size) - 1)
        }
    }

    /// The indices in `0..size` that are not in this set.
    pub fn complement(self, size: usize) -> Self {
        Self(Self::full(size).0 & !self.0)
    }

    pub fn contains(self, index: usize) -> bool {
        index < Self::CAPACITY && (self.0 >> index) & 1 != 0
    }

    pub fn insert(&mut self, index: usize) {
        self.0 |= 1 << index;
    }

    pub fn remove(&mut self, index: usize) {
        self.0 &= !(1 << index);
    }

    /// Number of indices in the set (population count).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over indices in ascending order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        UsedSetIter { bits: self.0 }
    }

    /// The `n`-th index in ascending order, if the set has that many.
    pub fn nth(self, n: usize) -> Option<usize> {
        self.iter().nth(n)
    }
}

/// Iterator over indices in a UsedSet.
struct UsedSetIter {
    bits: u32,
}

impl Iterator for UsedSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        // Clear lowest set bit
        self.bits &= self.bits - 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl fmt::Display for UsedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, index) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", index)?;
        }
        write!(f, "}}")
    }
}
