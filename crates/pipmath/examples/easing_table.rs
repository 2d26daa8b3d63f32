//! Print linear vs cosine interpolation side by side.
//!
//! Usage:
//!   cargo run -p pipmath --example easing_table -- 10
//!
//! The optional argument is the number of steps (default 8).

use pipmath::prelude::*;
use pipmath::scalar::interpolate_between;

fn main() {
    let steps: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(8)
        .max(1);
    println!("{:>6} {:>8} {:>8}", "t", "linear", "cosine");
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let lin = interpolate_between(0.0, 1.0, t, &Interpolation::Linear);
        let cos = interpolate_between(0.0, 1.0, t, &Interpolation::Cosine);
        println!(
            "{:>6} {:>8} {:>8}",
            round_to_decimals(t, 3),
            round_to_decimals(lin, 3),
            round_to_decimals(cos, 3)
        );
    }
}
