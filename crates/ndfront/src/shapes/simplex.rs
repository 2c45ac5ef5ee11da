use crate::cfg::DEGENERATE_EPS;
use crate::points::{Point, PointSet};
use rand::Rng;

/// Points on the hyperplane `Σx = 1` (linear front).
///
/// Each row is uniform on `[0,1)^d` divided by its own coordinate sum; a zero-sum draw is redrawn.
pub(crate) fn sample_linear<R: Rng>(n: usize, d: usize, rng: &mut R) -> PointSet {
    let mut set = PointSet::with_capacity(d, n);
    for _ in 0..n {
        let p = loop {
            let v = Point::from_fn(d, |_, _| rng.gen::<f64>());
            let sum = v.sum();
            if sum > DEGENERATE_EPS {
                break v / sum;
            }
        };
        set.push(p);
    }
    set
}
