//! 2D point helpers over `nalgebra::Vector2<f64>`.
//!
//! Points are plain `Copy` values. Interpolation runs independently per axis, so
//! non-linear strategies bend straight paths into curves.

use nalgebra::Vector2;

use crate::interp::Interpolation;

/// A 2D point `(x, y)`.
pub type Point2 = Vector2<f64>;

#[inline]
pub fn point(x: f64, y: f64) -> Point2 {
    Vector2::new(x, y)
}

#[inline]
pub fn origin() -> Point2 {
    Vector2::zeros()
}

/// Euclidean distance between `p` and `q`.
#[inline]
pub fn distance_between(p: Point2, q: Point2) -> f64 {
    let dx = q.x - p.x;
    let dy = q.y - p.y;
    (dx * dx + dy * dy).sqrt()
}

#[inline]
pub fn distance_from_origin(p: Point2) -> f64 {
    distance_between(p, origin())
}

/// `p` rescaled to unit length; the origin maps to itself.
pub fn normalized(p: Point2) -> Point2 {
    let d = distance_from_origin(p);
    if d > 0.0 {
        point(p.x / d, p.y / d)
    } else {
        origin()
    }
}

/// Direction of `p` from the origin, `atan2(y, x)` in `(-π, π]`.
#[inline]
pub fn angle_of(p: Point2) -> f64 {
    p.y.atan2(p.x)
}

#[inline]
pub fn add(p: Point2, q: Point2) -> Point2 {
    point(p.x + q.x, p.y + q.y)
}

#[inline]
pub fn subtract(p: Point2, q: Point2) -> Point2 {
    point(p.x - q.x, p.y - q.y)
}

#[inline]
pub fn multiply(p: Point2, factor: f64) -> Point2 {
    point(p.x * factor, p.y * factor)
}

/// Interpolate each axis from `p` to `q` with `function`.
pub fn interpolate_between(
    p: Point2,
    q: Point2,
    position: f64,
    function: &Interpolation,
) -> Point2 {
    point(
        function.apply(p.x, q.x, position),
        function.apply(p.y, q.y, position),
    )
}

/// Linear shorthand for [`interpolate_between`].
#[inline]
pub fn lerp_points(p: Point2, q: Point2, position: f64) -> Point2 {
    interpolate_between(p, q, position, &Interpolation::Linear)
}
