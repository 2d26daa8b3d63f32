//! Numeric constants and fixed defaults.
//!
//! Policy
//! - Defaults are fixed constants, same as the tolerance policy elsewhere in the
//!   crate. Callers that need another precision pass it explicitly.

/// π, the ratio of a circle's circumference to its diameter.
pub const PI: f64 = std::f64::consts::PI;

/// 2π, one full turn in radians.
pub const TAU: f64 = std::f64::consts::TAU;

/// Decimal places used by [`crate::scalar::rounded`].
pub const DEFAULT_DECIMALS: i32 = 2;

/// Comparison tolerance for "approximately equal" checks on unit-scale values.
pub const EPS: f64 = 1e-9;
