use super::{weakly_dominates, DominanceVerdict, DuplicatePolicy};
use crate::points::PointSet;
use nalgebra::DMatrix;

/// n×n matrix with `M[(i, j)]` true iff point `i` weakly dominates point `j`.
///
/// The diagonal is always true.
pub fn dominance_matrix(points: &PointSet) -> DMatrix<bool> {
    let n = points.len();
    DMatrix::from_fn(n, n, |i, j| weakly_dominates(&points[i], &points[j]))
}

/// Matrix verdict.
///
/// `DropAll`: column `j` is dominated iff its column sum is >= 2, i.e. some `i != j`
/// has `M[(i, j)]`; this flags every copy of a duplicate.
/// `KeepFirst`: additionally require `!M[(j, i)]` (strict dominance) or `i < j`
/// (a lower-index equal copy), which keeps exactly one copy.
pub fn matrix_verdict(points: &PointSet, duplicates: DuplicatePolicy) -> DominanceVerdict {
    let m = dominance_matrix(points);
    let n = points.len();
    let dominated: Vec<bool> = match duplicates {
        DuplicatePolicy::DropAll => (0..n)
            .map(|j| m.column(j).iter().filter(|&&b| b).count() >= 2)
            .collect(),
        DuplicatePolicy::KeepFirst => (0..n)
            .map(|j| (0..n).any(|i| i != j && m[(i, j)] && (!m[(j, i)] || i < j)))
            .collect(),
    };
    DominanceVerdict::from_mask(&dominated)
}
