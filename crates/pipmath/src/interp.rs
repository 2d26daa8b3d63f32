//! Interpolation strategies over a `(start, end)` scalar pair.
//!
//! - `Linear`: `start*(1-t) + end*t`.
//! - `Cosine`: ease-in/ease-out; remaps `t` through `(1 - cos(tπ)) / 2`, then Linear.
//! - `Custom`: any user function `(start, end, t) -> value`, applied unchanged.
//!
//! Positions are never clamped. Values outside `[0,1]` extrapolate.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use crate::consts::PI;

/// User-supplied interpolation function `(start, end, position) -> value`.
pub type Interpolater = Arc<dyn Fn(f64, f64, f64) -> f64 + Send + Sync>;

/// Blending strategy used by scalar and point interpolation.
#[derive(Clone, Default)]
pub enum Interpolation {
    #[default]
    Linear,
    Cosine,
    Custom(Interpolater),
}

impl Interpolation {
    /// Wrap a closure as a `Custom` strategy.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f64, f64, f64) -> f64 + Send + Sync + 'static,
    {
        Interpolation::Custom(Arc::new(f))
    }

    /// Blend `start` toward `end` at `position`.
    pub fn apply(&self, start: f64, end: f64, position: f64) -> f64 {
        match self {
            Interpolation::Linear => start * (1.0 - position) + end * position,
            Interpolation::Cosine => {
                let eased = (1.0 - (position * PI).cos()) / 2.0;
                Interpolation::Linear.apply(start, end, eased)
            }
            Interpolation::Custom(f) => f(start, end, position),
        }
    }

    /// Lowercase strategy name, as accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            Interpolation::Linear => "linear",
            Interpolation::Cosine => "cosine",
            Interpolation::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interpolation::Linear => f.write_str("Linear"),
            Interpolation::Cosine => f.write_str("Cosine"),
            Interpolation::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Strategy name not recognised by [`Interpolation::from_str`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown interpolation `{0}` (expected `linear` or `cosine`)")]
pub struct ParseInterpolationError(pub String);

impl FromStr for Interpolation {
    type Err = ParseInterpolationError;

    /// Parses the named strategies. `Custom` has no textual form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Interpolation::Linear),
            "cosine" => Ok(Interpolation::Cosine),
            _ => Err(ParseInterpolationError(s.to_string())),
        }
    }
}
