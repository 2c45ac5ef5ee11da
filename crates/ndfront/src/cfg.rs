//! Tolerance and sizing defaults.
//!
//! Policy
//! - Fixed constants; `EnforceCfg` copies them as defaults so callers can
//!   override per run without touching call sites.

/// Per-coordinate absolute tolerance under which two points count as duplicates.
pub const DUPLICATE_TOL: f64 = 1e-14;
/// Largest set size verified with the n×n dominance matrix; larger sets use index elimination.
pub const MATRIX_THRESHOLD: usize = 10_000;
/// Default cap on regenerate-until-clean attempts.
pub const MAX_ATTEMPTS: u32 = 64;
/// Margin kept away from the ends of the unit interval when drawing wave abscissae.
pub(crate) const WAVE_EPS: f64 = 1e-6;
/// Wave amplitude numerator; the radius for `k` periods is `WAVE_AMPLITUDE / k`.
pub(crate) const WAVE_AMPLITUDE: f64 = 0.2;
/// Norms and sums below this are treated as degenerate draws and redrawn.
pub(crate) const DEGENERATE_EPS: f64 = 1e-300;
