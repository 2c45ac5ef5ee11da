//! Regenerate-until-clean loop.
//!
//! Model
//! - Generate: draw a fresh candidate set from the requested `Shape`.
//! - Verify: duplicates only for surface-guaranteed shapes (`CheckPolicy::ShapeDefault`),
//!   or duplicates plus a dominance verdict (`CheckPolicy::Full`).
//! - Accept a clean set, or discard it entirely and draw again.
//!
//! Failure modes
//! - An invalid shape/size/dimension request fails before any draw.
//! - A dirty candidate is never surfaced; it only counts against `max_attempts`.

use crate::cfg::{DUPLICATE_TOL, MATRIX_THRESHOLD, MAX_ATTEMPTS};
use crate::dominance::{check, Algorithm, DuplicatePolicy};
use crate::duplicates::count_duplicates;
use crate::error::FrontError;
use crate::points::PointSet;
use crate::shapes::Shape;
use rand::Rng;
use tracing::{debug, info, warn};

/// Which verification a candidate set goes through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckPolicy {
    /// Duplicate check only when the shape guarantees no strict dominance.
    #[default]
    ShapeDefault,
    /// Always run the dominance verdict as well.
    Full,
}

/// What to do when a full check finds dominated points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DominatedPolicy {
    /// Discard the candidate and draw again.
    #[default]
    Regenerate,
    /// Keep only the non-dominated subset; the accepted set may hold fewer than `n` points.
    Prune,
}

/// Enforcer configuration.
#[derive(Clone, Copy, Debug)]
pub struct EnforceCfg {
    pub check: CheckPolicy,
    pub on_dominated: DominatedPolicy,
    pub duplicates: DuplicatePolicy,
    /// Largest set verified with the dominance matrix.
    pub matrix_threshold: usize,
    /// Attempts before giving up with `RegenerationExhausted`. Must be > 0.
    pub max_attempts: u32,
    /// Per-coordinate duplicate tolerance. Must be finite and >= 0.
    pub tolerance: f64,
}

impl Default for EnforceCfg {
    fn default() -> Self {
        Self {
            check: CheckPolicy::ShapeDefault,
            on_dominated: DominatedPolicy::Regenerate,
            duplicates: DuplicatePolicy::KeepFirst,
            matrix_threshold: MATRIX_THRESHOLD,
            max_attempts: MAX_ATTEMPTS,
            tolerance: DUPLICATE_TOL,
        }
    }
}

impl EnforceCfg {
    pub fn validate(&self) -> Result<(), FrontError> {
        if self.max_attempts == 0 {
            return Err(FrontError::invalid_config("max_attempts must be > 0"));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(FrontError::invalid_config(
                "tolerance must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

/// An accepted point set and how it was obtained.
#[derive(Clone, Debug)]
pub struct Front {
    pub shape: Shape,
    pub points: PointSet,
    /// Attempts used, including the accepted one.
    pub attempts: u32,
}

impl Front {
    #[inline]
    pub fn dim(&self) -> usize {
        self.points.dim()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Data-file label for this front (see `Shape::label`).
    pub fn label(&self) -> String {
        self.shape.label(self.dim())
    }
}

/// Reason a candidate was rejected. Internal; always recovered by regenerating.
#[derive(Debug)]
enum DirtySet {
    Duplicates(usize),
    Dominated { dominated: usize, duplicates: usize },
    /// Pruning left nothing to accept.
    Empty,
}

impl std::fmt::Display for DirtySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Duplicates(k) => write!(f, "{k} repeated point(s)"),
            Self::Dominated {
                dominated,
                duplicates,
            } => write!(f, "{dominated} dominated and {duplicates} repeated point(s)"),
            Self::Empty => f.write_str("no point survived pruning"),
        }
    }
}

/// Draw `n` points of dimension `d` on `shape` until the set is duplicate-free and
/// mutually non-dominated.
pub fn generate<R: Rng>(
    shape: Shape,
    n: usize,
    d: usize,
    cfg: &EnforceCfg,
    rng: &mut R,
) -> Result<Front, FrontError> {
    shape.validate(n, d)?;
    cfg.validate()?;
    for attempt in 1..=cfg.max_attempts {
        debug!(%shape, n, d, attempt, "generating candidate set");
        let candidate = shape.sample(n, d, rng)?;
        match verify(shape, candidate, cfg) {
            Ok(points) => {
                info!(%shape, n = points.len(), d, attempts = attempt, "accepted front");
                return Ok(Front {
                    shape,
                    points,
                    attempts: attempt,
                });
            }
            Err(dirty) => {
                warn!(%shape, attempt, reason = %dirty, "dirty set; generating a new one");
            }
        }
    }
    Err(FrontError::RegenerationExhausted {
        attempts: cfg.max_attempts,
    })
}

/// Parse `name` (e.g. `"wave-3"`) and call `generate`.
pub fn generate_named<R: Rng>(
    name: &str,
    n: usize,
    d: usize,
    cfg: &EnforceCfg,
    rng: &mut R,
) -> Result<Front, FrontError> {
    let shape = Shape::parse(name, d)?;
    generate(shape, n, d, cfg, rng)
}

fn verify(shape: Shape, candidate: PointSet, cfg: &EnforceCfg) -> Result<PointSet, DirtySet> {
    let duplicates_only = cfg.check == CheckPolicy::ShapeDefault && shape.surface_guaranteed();
    if duplicates_only {
        return match count_duplicates(&candidate, cfg.tolerance) {
            0 => Ok(candidate),
            k => Err(DirtySet::Duplicates(k)),
        };
    }

    let algorithm = Algorithm::for_size(candidate.len(), cfg.matrix_threshold);
    let verdict = check(&candidate, algorithm, cfg.duplicates);
    if verdict.is_clean() {
        return match count_duplicates(&candidate, cfg.tolerance) {
            0 => Ok(candidate),
            k => Err(DirtySet::Duplicates(k)),
        };
    }

    match cfg.on_dominated {
        DominatedPolicy::Regenerate => Err(DirtySet::Dominated {
            dominated: verdict.dominated.len(),
            duplicates: count_duplicates(&candidate, cfg.tolerance),
        }),
        DominatedPolicy::Prune => {
            warn!(
                dominated = verdict.dominated.len(),
                kept = verdict.non_dominated.len(),
                ?algorithm,
                "dropping dominated points; only the non-dominated ones are kept"
            );
            let pruned = candidate.select(&verdict.non_dominated);
            if pruned.is_empty() {
                return Err(DirtySet::Empty);
            }
            match count_duplicates(&pruned, cfg.tolerance) {
                0 => Ok(pruned),
                k => Err(DirtySet::Duplicates(k)),
            }
        }
    }
}
