//! Uniform random scalars in a range.
//!
//! Model
//! - `random_with(rng, from, to)` orders the bounds, returns the bound itself for an
//!   empty range, and otherwise maps a 53-bit uniform draw in `[0,1)` onto the range.
//! - `random`/`random_unit` use the thread-local RNG. `*_with` variants take any
//!   `rand::Rng`, so callers own (and serialize access to) their generator.
//! - `SeedToken` gives reproducible, indexable streams for tests and experiments.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform draw between `from` and `to` using the thread-local RNG.
pub fn random(from: f64, to: f64) -> f64 {
    random_with(&mut rand::thread_rng(), from, to)
}

/// Uniform draw in `[0, 1)` using the thread-local RNG.
pub fn random_unit() -> f64 {
    random_unit_with(&mut rand::thread_rng())
}

/// Uniform draw in `[0, 1)` from `rng`.
pub fn random_unit_with<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    random_with(rng, 0.0, 1.0)
}

/// Uniform draw between `from` and `to` (in either order) from `rng`.
///
/// The result lies in `[min(from,to), max(from,to)]`; `random_with(rng, x, x) == x`
/// without consuming entropy. A NaN bound yields NaN.
pub fn random_with<R: Rng + ?Sized>(rng: &mut R, from: f64, to: f64) -> f64 {
    if from.is_nan() || to.is_nan() {
        return f64::NAN;
    }
    if from > to {
        return random_with(rng, to, from);
    }
    if from == to {
        return from;
    }
    let u = rng.gen::<f64>();
    // Weighted form stays finite even when `to - from` overflows; rounding can still
    // step just outside the bounds, so clamp.
    (from * (1.0 - u) + to * u).max(from).min(to)
}

/// Seed token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedToken {
    pub seed: u64,
    pub index: u64,
}

impl SeedToken {
    /// First stream (`index` 0) for `seed`.
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }

    /// Token for the next stream under the same seed.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    /// Deterministic `StdRng` for this `(seed, index)` pair.
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing so neighbouring indices give unrelated streams.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}
