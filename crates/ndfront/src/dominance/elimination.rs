use super::{weakly_dominates, DominanceVerdict, DuplicatePolicy};
use crate::points::PointSet;

/// Index-elimination verdict.
///
/// Every index starts as a candidate. For each `i` still a candidate, in index order,
/// drop each other candidate `j` that `i` weakly dominates. One pass suffices: a dominated
/// point is removed by its surviving dominator (weak dominance is transitive), and an
/// equal pair is resolved by whichever copy is visited first, i.e. the lower index.
/// Under `DropAll` that first copy also drops itself once its scan is done.
pub fn eliminate(points: &PointSet, duplicates: DuplicatePolicy) -> DominanceVerdict {
    let n = points.len();
    let mut removed = vec![false; n];
    for i in 0..n {
        if removed[i] {
            continue;
        }
        let p = &points[i];
        let mut has_copy = false;
        for j in 0..n {
            if j != i && !removed[j] && weakly_dominates(p, &points[j]) {
                removed[j] = true;
                has_copy |= weakly_dominates(&points[j], p);
            }
        }
        if has_copy && duplicates == DuplicatePolicy::DropAll {
            removed[i] = true;
        }
    }
    DominanceVerdict::from_mask(&removed)
}
