//! Flat re-export surface.
//!
//! Names that collide across modules (`interpolate_between`, `add`, ...) are
//! disambiguated here with a `point_`/`scalar_` prefix.

pub use crate::consts::{DEFAULT_DECIMALS, EPS, PI, TAU};
pub use crate::interp::{Interpolater, Interpolation, ParseInterpolationError};
// Scalars
pub use crate::scalar::{
    degrees_to_radians, interpolate_between as scalar_interpolate_between, lerp,
    radians_to_degrees, round_to_decimals, rounded, smallest_angle_between,
};
// Random ranges
pub use crate::rng::{random, random_unit, random_unit_with, random_with, SeedToken};
// Points
pub use crate::point::{
    add as point_add, angle_of, distance_between, distance_from_origin,
    interpolate_between as point_interpolate_between, lerp_points, multiply as point_multiply,
    normalized, origin, point, subtract as point_subtract, Point2,
};
