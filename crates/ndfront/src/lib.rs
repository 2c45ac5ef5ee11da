//! Non-dominated point sets on prescribed front shapes.
//!
//! Layout
//! - `shapes`: samplers for the five front families (concave, convex, linear, wave-k, cliff).
//! - `duplicates`: near-duplicate detection under a fixed per-coordinate tolerance.
//! - `dominance`: weak-dominance verdicts via index elimination or the dominance matrix.
//! - `enforcer`: regenerate-until-clean loop producing an accepted `Front`.
//!
//! Every sampler takes the RNG explicitly; seed a `StdRng` to reproduce a front.

pub mod cfg;
pub mod dominance;
pub mod duplicates;
pub mod enforcer;
pub mod error;
pub mod points;
pub mod shapes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::FrontError;
pub use points::{Point, PointSet};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{DUPLICATE_TOL, MATRIX_THRESHOLD};
    pub use crate::dominance::{
        check, weakly_dominates, Algorithm, DominanceVerdict, DuplicatePolicy,
    };
    pub use crate::duplicates::count_duplicates;
    pub use crate::enforcer::{
        generate, generate_named, CheckPolicy, DominatedPolicy, EnforceCfg, Front,
    };
    pub use crate::error::FrontError;
    pub use crate::points::{Point, PointSet};
    pub use crate::shapes::Shape;
}
