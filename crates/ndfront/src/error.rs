//! Error type shared by samplers and the enforcer.

use std::fmt;

/// Fatal outcomes of a front request. Dirty candidates never surface here.
#[derive(Clone, Debug, PartialEq)]
pub enum FrontError {
    /// Unknown shape, or a shape asked for with an unsupported size or dimension.
    InvalidShapeRequest {
        shape: String,
        dim: usize,
        reason: String,
    },
    /// Enforcer configuration rejected by `EnforceCfg::validate`.
    InvalidConfig { reason: String },
    /// Every attempt produced a dirty candidate set.
    RegenerationExhausted { attempts: u32 },
    /// Point rows of inconsistent or zero dimension.
    RaggedPoints { reason: String },
}

impl FrontError {
    pub(crate) fn invalid_shape(
        shape: impl Into<String>,
        dim: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidShapeRequest {
            shape: shape.into(),
            dim,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    pub(crate) fn ragged(reason: impl Into<String>) -> Self {
        Self::RaggedPoints {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FrontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShapeRequest { shape, dim, reason } => {
                write!(f, "wrong front type ({shape}) and/or dimension ({dim}): {reason}")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid enforcer config: {reason}"),
            Self::RegenerationExhausted { attempts } => write!(
                f,
                "no clean point set after {attempts} attempts \
                 (repeated or dominated points every time)"
            ),
            Self::RaggedPoints { reason } => write!(f, "malformed point rows: {reason}"),
        }
    }
}

impl std::error::Error for FrontError {}
