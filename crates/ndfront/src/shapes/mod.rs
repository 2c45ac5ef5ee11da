//! Front-shape samplers.
//!
//! Purpose
//! - Draw `n` candidate points in `d` dimensions lying on a known non-dominated surface,
//!   so the enforcer rarely has to discard a set.
//!
//! Model
//! - `Shape` is a tagged variant; each variant validates its own size/dimension rules
//!   before touching the RNG, so a rejected request consumes no random draws.
//! - The RNG is passed in explicitly; a seeded `StdRng` reproduces a set exactly.
//!
//! Families
//! - concave: `|N(0, I)|` rows normalised to the positive unit sphere.
//! - convex: `1 - concave`, the sphere reflected through 0.5 in every coordinate.
//! - linear: uniform rows normalised onto the simplex `Σx = 1`.
//! - wave-k (2D): `k` cosine periods along the anti-diagonal `x + y = 1`.
//! - cliff (3D/4D): a 2D convex front composed with a uniform coordinate or a second
//!   independent 2D convex front.

mod cliff;
mod simplex;
mod spherical;
mod wave;

pub(crate) use cliff::sample_cliff;
pub(crate) use simplex::sample_linear;
pub(crate) use spherical::{sample_concave, sample_convex};
pub(crate) use wave::sample_wave;

use crate::error::FrontError;
use crate::points::PointSet;
use rand::Rng;
use std::fmt;

/// Front family requested by a caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Concave,
    Convex,
    Linear,
    /// Two-dimensional wave with `periods` locally convex regions.
    Wave { periods: u32 },
    Cliff,
}

impl Shape {
    /// Parse a shape name (`concave`, `convex`, `linear`, `cliff`, `wave-<k>`).
    ///
    /// `dim` is only used to label the error.
    pub fn parse(text: &str, dim: usize) -> Result<Self, FrontError> {
        match text {
            "concave" => Ok(Self::Concave),
            "convex" => Ok(Self::Convex),
            "linear" => Ok(Self::Linear),
            "cliff" => Ok(Self::Cliff),
            _ => {
                let periods = text
                    .strip_prefix("wave-")
                    .ok_or_else(|| FrontError::invalid_shape(text, dim, "unknown front type"))?;
                let periods: u32 = periods.parse().map_err(|_| {
                    FrontError::invalid_shape(text, dim, "wave period count must be an integer")
                })?;
                if periods == 0 {
                    return Err(FrontError::invalid_shape(
                        text,
                        dim,
                        "wave needs at least one period",
                    ));
                }
                Ok(Self::Wave { periods })
            }
        }
    }

    /// Check `n` and `d` against this family's rules.
    pub fn validate(&self, n: usize, d: usize) -> Result<(), FrontError> {
        let fail = |reason: &str| Err(FrontError::invalid_shape(self.to_string(), d, reason));
        if n == 0 {
            return fail("need at least one point");
        }
        if d < 2 {
            return fail("fronts need at least two objectives");
        }
        match self {
            Self::Wave { .. } if d != 2 => fail("wave is available only for d = 2"),
            Self::Cliff if !(3..=4).contains(&d) => {
                fail("cliff is available only for d = 3 and d = 4")
            }
            _ => Ok(()),
        }
    }

    /// Validate, then draw `n` raw candidate points of dimension `d`.
    pub fn sample<R: Rng>(&self, n: usize, d: usize, rng: &mut R) -> Result<PointSet, FrontError> {
        self.validate(n, d)?;
        let set = match *self {
            Self::Concave => sample_concave(n, d, rng),
            Self::Convex => sample_convex(n, d, rng),
            Self::Linear => sample_linear(n, d, rng),
            Self::Wave { periods } => sample_wave(n, periods, rng),
            Self::Cliff => sample_cliff(n, d, rng),
        };
        Ok(set)
    }

    /// True if every sample lies on a surface with no strict dominance, so only
    /// coincident points can make a set dirty.
    ///
    /// All five families qualify today. The match has no wildcard arm, so a new family
    /// must state whether it needs the full dominance check under `ShapeDefault`.
    pub fn surface_guaranteed(&self) -> bool {
        match self {
            Self::Concave | Self::Convex | Self::Linear | Self::Wave { .. } | Self::Cliff => true,
        }
    }

    /// Output label for data files; the 4D cliff is `cliffFour`.
    pub fn label(&self, d: usize) -> String {
        match self {
            Self::Cliff if d == 4 => "cliffFour".to_string(),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Concave => f.write_str("concave"),
            Self::Convex => f.write_str("convex"),
            Self::Linear => f.write_str("linear"),
            Self::Wave { periods } => write!(f, "wave-{periods}"),
            Self::Cliff => f.write_str("cliff"),
        }
    }
}
