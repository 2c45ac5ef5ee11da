use crate::cfg::DEGENERATE_EPS;
use crate::points::{Point, PointSet};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Points on the positive orthant of the unit sphere (concave front).
///
/// Each row is `|N(0, I_d)|` divided by its Euclidean norm; a zero-norm draw is redrawn.
pub(crate) fn sample_concave<R: Rng>(n: usize, d: usize, rng: &mut R) -> PointSet {
    let mut set = PointSet::with_capacity(d, n);
    for _ in 0..n {
        set.push(unit_abs_gaussian(d, rng));
    }
    set
}

/// Concave points reflected through 0.5 in every coordinate (convex front).
pub(crate) fn sample_convex<R: Rng>(n: usize, d: usize, rng: &mut R) -> PointSet {
    let mut set = PointSet::with_capacity(d, n);
    for _ in 0..n {
        set.push(unit_abs_gaussian(d, rng).map(|c| 1.0 - c));
    }
    set
}

fn unit_abs_gaussian<R: Rng>(d: usize, rng: &mut R) -> Point {
    loop {
        let v = Point::from_fn(d, |_, _| {
            let z: f64 = StandardNormal.sample(&mut *rng);
            z.abs()
        });
        let norm = v.norm();
        if norm > DEGENERATE_EPS && norm.is_finite() {
            return v / norm;
        }
    }
}
