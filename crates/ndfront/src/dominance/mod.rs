//! Weak-dominance verdicts over a point set.
//!
//! Purpose
//! - Partition indices `0..n` into `dominated` and `non_dominated` (minimisation).
//!
//! Algorithms
//! - `IndexElimination`: scan ordered pairs within a shrinking candidate set. O(n²·d) time,
//!   O(n) extra memory; used for large sets.
//! - `Matrix`: materialise the n×n weak-dominance matrix and read verdicts off its columns.
//!   O(n²) memory; used up to `MATRIX_THRESHOLD` points.
//!
//! Duplicates
//! - Exactly equal points weakly dominate each other. `DuplicatePolicy` decides what
//!   happens to such a group, and both algorithms apply it identically, so their verdicts
//!   agree on every input.

mod elimination;
mod matrix;

pub use elimination::eliminate;
pub use matrix::{dominance_matrix, matrix_verdict};

use crate::points::{Point, PointSet};

/// Split of `0..n` into dominated and non-dominated indices, each sorted ascending.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DominanceVerdict {
    pub dominated: Vec<usize>,
    pub non_dominated: Vec<usize>,
}

impl DominanceVerdict {
    /// Build from a per-index "is dominated" mask.
    pub(crate) fn from_mask(dominated: &[bool]) -> Self {
        let mut out = Self::default();
        for (i, &dom) in dominated.iter().enumerate() {
            if dom {
                out.dominated.push(i);
            } else {
                out.non_dominated.push(i);
            }
        }
        out
    }

    #[inline]
    pub fn is_clean(&self) -> bool {
        self.dominated.is_empty()
    }

    /// Total number of indices covered (`n`).
    #[inline]
    pub fn len(&self) -> usize {
        self.dominated.len() + self.non_dominated.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Treatment of groups of exactly equal points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Keep the lowest-index copy; every other copy is dominated.
    #[default]
    KeepFirst,
    /// Every copy is dominated (a column sum >= 2 in the dominance matrix).
    DropAll,
}

/// Dominance algorithm selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    IndexElimination,
    Matrix,
}

impl Algorithm {
    /// `Matrix` for `n <= threshold`, `IndexElimination` above it.
    pub fn for_size(n: usize, threshold: usize) -> Self {
        if n <= threshold {
            Self::Matrix
        } else {
            Self::IndexElimination
        }
    }
}

/// `p[i] <= q[i]` in every coordinate (minimisation). Reflexive: every point dominates itself.
#[inline]
pub fn weakly_dominates(p: &Point, q: &Point) -> bool {
    p.iter().zip(q.iter()).all(|(a, b)| a <= b)
}

/// Dominance verdict for `points` using `algorithm`.
pub fn check(
    points: &PointSet,
    algorithm: Algorithm,
    duplicates: DuplicatePolicy,
) -> DominanceVerdict {
    match algorithm {
        Algorithm::IndexElimination => eliminate(points, duplicates),
        Algorithm::Matrix => matrix_verdict(points, duplicates),
    }
}

#[cfg(test)]
mod tests;
