use super::*;
use proptest::prelude::*;

const BOTH: [Algorithm; 2] = [Algorithm::IndexElimination, Algorithm::Matrix];
const POLICIES: [DuplicatePolicy; 2] = [DuplicatePolicy::KeepFirst, DuplicatePolicy::DropAll];

fn set(rows: &[&[f64]]) -> PointSet {
    PointSet::from_rows(rows).unwrap()
}

#[test]
fn strictly_better_point_dominates_under_both_algorithms() {
    let s = set(&[&[0.1, 0.5], &[0.2, 0.6]]);
    for alg in BOTH {
        let v = check(&s, alg, DuplicatePolicy::KeepFirst);
        assert_eq!(v.dominated, vec![1], "{alg:?}");
        assert_eq!(v.non_dominated, vec![0], "{alg:?}");
    }
}

#[test]
fn exact_duplicate_with_column_sum_rule_flags_both_copies() {
    let s = set(&[&[0.1, 0.9], &[0.1, 0.9], &[0.2, 0.3]]);
    for alg in BOTH {
        let v = check(&s, alg, DuplicatePolicy::DropAll);
        assert_eq!(v.dominated, vec![0, 1], "{alg:?}");
        assert_eq!(v.non_dominated, vec![2], "{alg:?}");
    }
}

#[test]
fn exact_duplicate_keeps_lowest_index_copy() {
    let s = set(&[&[0.2, 0.3], &[0.1, 0.9], &[0.1, 0.9], &[0.1, 0.9]]);
    for alg in BOTH {
        let v = check(&s, alg, DuplicatePolicy::KeepFirst);
        assert_eq!(v.dominated, vec![2, 3], "{alg:?}");
        assert_eq!(v.non_dominated, vec![0, 1], "{alg:?}");
    }
}

#[test]
fn dominated_duplicates_are_all_removed() {
    // Both copies of (0.5, 0.5) are strictly dominated by (0.4, 0.4).
    let s = set(&[&[0.5, 0.5], &[0.5, 0.5], &[0.4, 0.4]]);
    for alg in BOTH {
        for policy in POLICIES {
            let v = check(&s, alg, policy);
            assert_eq!(v.non_dominated, vec![2], "{alg:?} {policy:?}");
        }
    }
}

#[test]
fn weak_dominance_with_one_tie_counts() {
    // Equal in x, better in y.
    let s = set(&[&[0.3, 0.7], &[0.3, 0.2], &[0.9, 0.1]]);
    for alg in BOTH {
        let v = check(&s, alg, DuplicatePolicy::KeepFirst);
        assert_eq!(v.dominated, vec![0], "{alg:?}");
    }
}

#[test]
fn chain_is_resolved_in_one_pass() {
    // 0 < 1 < 2 < 3 in every coordinate; visiting order must not let 3 survive.
    let s = set(&[&[0.4, 0.4], &[0.3, 0.3], &[0.2, 0.2], &[0.1, 0.1]]);
    for alg in BOTH {
        let v = check(&s, alg, DuplicatePolicy::KeepFirst);
        assert_eq!(v.non_dominated, vec![3], "{alg:?}");
        assert_eq!(v.len(), 4);
    }
}

#[test]
fn empty_and_singleton_sets() {
    let empty = PointSet::with_capacity(3, 0);
    for alg in BOTH {
        assert!(check(&empty, alg, DuplicatePolicy::KeepFirst).is_empty());
    }
    let one = set(&[&[0.5, 0.5, 0.5]]);
    for alg in BOTH {
        let v = check(&one, alg, DuplicatePolicy::DropAll);
        assert_eq!(v.non_dominated, vec![0]);
        assert!(v.is_clean());
    }
}

#[test]
fn algorithm_choice_follows_threshold() {
    assert_eq!(Algorithm::for_size(10_000, 10_000), Algorithm::Matrix);
    assert_eq!(
        Algorithm::for_size(10_001, 10_000),
        Algorithm::IndexElimination
    );
    assert_eq!(Algorithm::for_size(0, 0), Algorithm::Matrix);
}

fn point_rows(d: usize) -> impl Strategy<Value = Vec<Vec<f64>>> {
    // A coarse grid makes ties and exact duplicates common.
    let coord = (0u8..6).prop_map(|v| f64::from(v) / 5.0);
    prop::collection::vec(prop::collection::vec(coord, d), 0..40)
}

proptest! {
    #[test]
    fn algorithms_agree_on_every_input(rows in (2usize..5).prop_flat_map(point_rows)) {
        let s = PointSet::from_rows(&rows).unwrap();
        for policy in POLICIES {
            let a = check(&s, Algorithm::IndexElimination, policy);
            let b = check(&s, Algorithm::Matrix, policy);
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(a.len(), s.len());
        }
    }

    #[test]
    fn survivors_are_mutually_non_dominated(rows in (2usize..5).prop_flat_map(point_rows)) {
        let s = PointSet::from_rows(&rows).unwrap();
        let v = check(&s, Algorithm::IndexElimination, DuplicatePolicy::KeepFirst);
        for &i in &v.non_dominated {
            for &j in &v.non_dominated {
                prop_assert!(i == j || !weakly_dominates(&s[i], &s[j]));
            }
        }
        // Every dropped point has a surviving weak dominator.
        for &j in &v.dominated {
            prop_assert!(v.non_dominated.iter().any(|&i| weakly_dominates(&s[i], &s[j])));
        }
    }
}
