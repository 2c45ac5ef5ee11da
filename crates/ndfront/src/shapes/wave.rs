use crate::cfg::{WAVE_AMPLITUDE, WAVE_EPS};
use crate::points::{Point, PointSet};
use nalgebra::{Rotation2, Vector2};
use rand::Rng;
use std::f64::consts::{FRAC_PI_4, PI, SQRT_2};

/// Two-dimensional wave front with `periods` cosine periods (`periods >= 1`).
///
/// Construction
/// - `x ~ U(ε, 1-ε)`, `y = r·cos(2πkx) - r` with `r = 0.2/k`.
/// - Stretch `x` by `√2`, rotate by −45°, lift by 1 on the second axis. With `y = 0` this is
///   the segment `x + y = 1`; the slope stays negative, so no point dominates another.
pub(crate) fn sample_wave<R: Rng>(n: usize, periods: u32, rng: &mut R) -> PointSet {
    let k = f64::from(periods.max(1));
    let r = WAVE_AMPLITUDE / k;
    let rot = Rotation2::new(-FRAC_PI_4);
    let lift = Vector2::new(0.0, 1.0);
    let mut set = PointSet::with_capacity(2, n);
    for _ in 0..n {
        let x: f64 = rng.gen_range(WAVE_EPS..1.0 - WAVE_EPS);
        let y = r * (2.0 * PI * k * x).cos() - r;
        let q = rot * Vector2::new(SQRT_2 * x, y) + lift;
        set.push(Point::from_column_slice(&[q.x, q.y]));
    }
    set
}
