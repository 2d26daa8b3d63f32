//! Small 2D math helpers: angles, rounding, random ranges, interpolation and points.
//!
//! Every operation is a pure function of its arguments. The random helpers are the
//! only exception: they draw from either the thread-local RNG or a caller-owned one.
//!
//! Points are `nalgebra::Vector2<f64>` values (`Point2`), passed and returned by value.

pub mod api;
pub mod consts;
pub mod interp;
pub mod point;
pub mod rng;
pub mod scalar;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use consts::{DEFAULT_DECIMALS, PI, TAU};
pub use interp::{Interpolater, Interpolation, ParseInterpolationError};
pub use point::Point2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::consts::{DEFAULT_DECIMALS, EPS, PI, TAU};
    pub use crate::interp::{Interpolater, Interpolation};
    pub use crate::point::{
        angle_of, distance_between, distance_from_origin, lerp_points, normalized, origin, point,
        Point2,
    };
    pub use crate::rng::{random, random_unit, random_unit_with, random_with, SeedToken};
    pub use crate::scalar::{
        degrees_to_radians, lerp, radians_to_degrees, round_to_decimals, rounded,
        smallest_angle_between,
    };
}

#[cfg(test)]
mod tests;
