//! Near-duplicate detection.
//!
//! Model
//! - Sort point indices lexicographically (first coordinate is the primary key), then
//!   compare each point with every later point whose first coordinate is within `tol`.
//!   A near-duplicate need not be the sorted successor: a third point can sort between
//!   the two copies when its first coordinate falls between theirs.
//! - A pair counts as a duplicate only if **every** coordinate differs by at most `tol`.
//!   Matching in one coordinate while differing in another is not a duplicate.

use crate::points::{Point, PointSet};
use std::cmp::Ordering;

/// Number of repeated points: points that coincide within `tol` in every coordinate with
/// some point sorted before them. A group of `k` copies counts `k - 1`.
///
/// Zero for sets with fewer than two points.
pub fn count_duplicates(points: &PointSet, tol: f64) -> usize {
    let n = points.len();
    if n < 2 || points.dim() == 0 {
        return 0;
    }
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| lexicographic(&points[a], &points[b]));
    let mut repeated = vec![false; n];
    for a in 0..n {
        let p = &points[order[a]];
        for b in a + 1..n {
            let q = &points[order[b]];
            if q[0] - p[0] > tol {
                break;
            }
            if !repeated[b] && coincide(p, q, tol) {
                repeated[b] = true;
            }
        }
    }
    repeated.iter().filter(|&&r| r).count()
}

/// True if `p` and `q` agree within `tol` in every coordinate.
#[inline]
pub fn coincide(p: &Point, q: &Point, tol: f64) -> bool {
    p.iter().zip(q.iter()).all(|(a, b)| (a - b).abs() <= tol)
}

fn lexicographic(p: &Point, q: &Point) -> Ordering {
    p.iter()
        .zip(q.iter())
        .map(|(a, b)| a.total_cmp(b))
        .find(|o| *o != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfg::DUPLICATE_TOL;

    #[test]
    fn exact_duplicate_is_counted() {
        let set = PointSet::from_rows(&[[0.1, 0.9], [0.2, 0.3], [0.1, 0.9]]).unwrap();
        assert_eq!(count_duplicates(&set, DUPLICATE_TOL), 1);
    }

    #[test]
    fn matching_first_coordinate_alone_is_not_a_duplicate() {
        // Same first coordinate, far apart in the second.
        let set = PointSet::from_rows(&[[0.4, 0.1], [0.4, 0.8]]).unwrap();
        assert_eq!(count_duplicates(&set, DUPLICATE_TOL), 0);
        // Far apart in the first coordinate, identical in the second.
        let set = PointSet::from_rows(&[[0.1, 0.5], [0.9, 0.5]]).unwrap();
        assert_eq!(count_duplicates(&set, DUPLICATE_TOL), 0);
    }

    #[test]
    fn duplicates_found_behind_first_coordinate_ties() {
        let set =
            PointSet::from_rows(&[[0.5, 0.7, 0.1], [0.5, 0.2, 0.9], [0.5, 0.7, 0.1]]).unwrap();
        assert_eq!(count_duplicates(&set, DUPLICATE_TOL), 1);
    }

    #[test]
    fn near_copies_split_by_a_point_sorted_between_them() {
        // Point 1 sorts between 0 and 2 on the first coordinate alone.
        let set = PointSet::from_rows(&[[0.5, 0.7], [0.5 + 4e-15, 0.2], [0.5 + 8e-15, 0.7]])
            .unwrap();
        assert!(coincide(&set[0], &set[2], DUPLICATE_TOL));
        assert_eq!(count_duplicates(&set, DUPLICATE_TOL), 1);
    }

    #[test]
    fn scan_stops_once_first_coordinate_leaves_tolerance() {
        let set = PointSet::from_rows(&[[0.5, 0.7], [0.5 + 2e-14, 0.7], [0.5 + 4e-14, 0.7]])
            .unwrap();
        assert_eq!(count_duplicates(&set, DUPLICATE_TOL), 0);
    }

    #[test]
    fn tolerance_is_inclusive_and_absolute() {
        let a = 0.25;
        let set = PointSet::from_rows(&[[a, 0.5], [a + 1e-15, 0.5]]).unwrap();
        assert_eq!(count_duplicates(&set, DUPLICATE_TOL), 1);
        let set = PointSet::from_rows(&[[a, 0.5], [a + 1e-12, 0.5]]).unwrap();
        assert_eq!(count_duplicates(&set, DUPLICATE_TOL), 0);
    }

    #[test]
    fn triple_copy_counts_two_pairs() {
        let set = PointSet::from_rows(&[[0.3, 0.3], [0.3, 0.3], [0.3, 0.3], [0.0, 1.0]]).unwrap();
        assert_eq!(count_duplicates(&set, DUPLICATE_TOL), 2);
        let single = PointSet::from_rows(&[[0.3, 0.3]]).unwrap();
        assert_eq!(count_duplicates(&single, DUPLICATE_TOL), 0);
    }
}
