//! Scalar helpers: degree/radian conversion, smallest signed angle, decimal rounding
//! and scalar interpolation.

use crate::consts::{DEFAULT_DECIMALS, PI, TAU};
use crate::interp::Interpolation;

/// Degrees → radians as `π·deg/180`.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    PI * degrees / 180.0
}

/// Radians → degrees as `rad·180/π`.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Signed shortest rotation (radians) taking angle `from` to angle `to`, in `(-π, π]`.
///
/// Uses Euclidean remainder, so negative differences reduce the same way as positive ones.
pub fn smallest_angle_between(from: f64, to: f64) -> f64 {
    let mut angle = (to - from).rem_euclid(TAU);
    if angle >= PI {
        angle -= TAU;
    }
    if angle <= -PI {
        angle += TAU;
    }
    angle
}

/// Round to `decimals` places, ties away from zero (`f64::round`).
///
/// Symmetric in sign: `round_to_decimals(-x, d) == -round_to_decimals(x, d)`.
/// Negative `decimals` round to tens, hundreds, ...
#[inline]
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let multiplier = 10f64.powi(decimals);
    (value * multiplier).round() / multiplier
}

/// [`round_to_decimals`] with [`DEFAULT_DECIMALS`].
#[inline]
pub fn rounded(value: f64) -> f64 {
    round_to_decimals(value, DEFAULT_DECIMALS)
}

#[inline]
pub fn interpolate_between(start: f64, end: f64, position: f64, function: &Interpolation) -> f64 {
    function.apply(start, end, position)
}

/// Linear shorthand for [`interpolate_between`].
#[inline]
pub fn lerp(start: f64, end: f64, position: f64) -> f64 {
    Interpolation::Linear.apply(start, end, position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_angles_convert_exactly() {
        assert_eq!(degrees_to_radians(90.0), PI / 2.0);
        assert_eq!(degrees_to_radians(180.0), PI);
        assert_eq!(degrees_to_radians(270.0), (PI / 2.0) * 3.0);
        assert_eq!(degrees_to_radians(360.0), PI * 2.0);
        assert_eq!(radians_to_degrees(PI), 180.0);
    }

    #[test]
    fn rounding_matches_known_values() {
        assert_eq!(round_to_decimals(10.455, 3), 10.455);
        assert_eq!(round_to_decimals(10.455, 2), 10.46);
        assert_eq!(round_to_decimals(10.455, 1), 10.5);
        assert_eq!(rounded(10.455), 10.46);
        assert_eq!(round_to_decimals(2.5, 0), 3.0);
    }

    #[test]
    fn rounding_is_symmetric_in_sign() {
        assert_eq!(round_to_decimals(-10.455, 1), -10.5);
        assert_eq!(round_to_decimals(-0.5, 0), -1.0);
        assert_eq!(round_to_decimals(0.5, 0), 1.0);
    }

    #[test]
    fn smallest_angle_wraps_across_full_turn() {
        let a360 = degrees_to_radians(360.0);
        let a270 = degrees_to_radians(270.0);
        let a180 = degrees_to_radians(180.0);
        let a90 = degrees_to_radians(90.0);
        let a10 = degrees_to_radians(10.0);
        assert_eq!(rounded(smallest_angle_between(a360, a10)), rounded(a10));
        assert_eq!(rounded(smallest_angle_between(a270, a180)), -rounded(a90));
        // reverse direction flips sign
        assert_eq!(rounded(smallest_angle_between(a10, a360)), -rounded(a10));
    }

    #[test]
    fn smallest_angle_half_turn_is_positive_pi() {
        assert_eq!(smallest_angle_between(0.0, PI), PI);
        assert_eq!(smallest_angle_between(PI, 0.0), PI);
        assert_eq!(smallest_angle_between(1.0, 1.0), 0.0);
    }

    #[test]
    fn scalar_interpolation_uses_strategy() {
        assert_eq!(lerp(2.0, 4.0, 0.25), 2.5);
        let halfway = interpolate_between(0.0, 10.0, 0.5, &Interpolation::Cosine);
        assert!((halfway - 5.0).abs() < 1e-12);
    }
}
