use super::spherical::sample_convex;
use crate::points::{Point, PointSet};
use rand::Rng;

/// Cliff front for `d ∈ {3, 4}`.
///
/// The first two coordinates come from a 2D convex front. For `d = 3` the last
/// coordinate is uniform on `[0,1)`; for `d = 4` the last two come from a second,
/// independent 2D convex front. Only reached through `Shape::sample`, which validates `d`.
pub(crate) fn sample_cliff<R: Rng>(n: usize, d: usize, rng: &mut R) -> PointSet {
    debug_assert!((3..=4).contains(&d));
    let head = sample_convex(n, 2, rng);
    let tail: Vec<Vec<f64>> = if d == 4 {
        sample_convex(n, 2, rng).rows()
    } else {
        (0..n).map(|_| vec![rng.gen::<f64>()]).collect()
    };
    let mut set = PointSet::with_capacity(d, n);
    for (h, t) in head.iter().zip(tail) {
        let mut coords = Vec::with_capacity(d);
        coords.extend(h.iter().copied());
        coords.extend(t);
        set.push(Point::from_vec(coords));
    }
    set
}
