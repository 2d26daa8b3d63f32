use super::prelude::*;
use super::point::{add, interpolate_between, subtract};
use nalgebra::vector;
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn pi_matches_std() {
    assert_eq!(PI, std::f64::consts::PI);
    assert_eq!(TAU, 2.0 * PI);
}

#[test]
fn custom_difference_times_position_matches_linear_from_zero() {
    let custom = Interpolation::custom(|start, end, position| (end - start) * position);
    for t in [0.0, 0.5, 1.0] {
        assert_eq!(custom.apply(0.0, 2.0, t), Interpolation::Linear.apply(0.0, 2.0, t));
    }
}

#[test]
fn strategies_share_endpoints_on_points() {
    let p = vector![-1.0, 3.0];
    let q = vector![4.0, -2.0];
    for f in [Interpolation::Linear, Interpolation::Cosine] {
        assert!((interpolate_between(p, q, 0.0, &f) - p).norm() < EPS);
        assert!((interpolate_between(p, q, 1.0, &f) - q).norm() < EPS);
        assert!((interpolate_between(p, q, 0.5, &f) - lerp_points(p, q, 0.5)).norm() < EPS);
    }
}

#[test]
fn seeded_random_points_normalize_to_unit() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..64 {
        let p = point(random_with(&mut rng, -5.0, 5.0), random_with(&mut rng, -5.0, 5.0));
        if distance_from_origin(p) > 0.0 {
            assert!((distance_from_origin(normalized(p)) - 1.0).abs() < EPS);
            assert!((angle_of(normalized(p)) - angle_of(p)).abs() < EPS);
        }
    }
}

proptest! {
    #[test]
    fn degrees_roundtrip(d in -1.0e6f64..1.0e6) {
        let back = radians_to_degrees(degrees_to_radians(d));
        prop_assert!((back - d).abs() <= 1e-9 * d.abs().max(1.0));
    }

    #[test]
    fn smallest_angle_in_half_open_range(a in -50.0f64..50.0, b in -50.0f64..50.0) {
        let s = smallest_angle_between(a, b);
        prop_assert!(s > -PI && s <= PI);
        // `a + s` points the same way as `b`
        let diff = (a + s - b).rem_euclid(TAU);
        prop_assert!(diff < 1e-9 || TAU - diff < 1e-9);
    }

    #[test]
    fn random_within_bounds(seed in any::<u64>(), a in -1.0e3f64..1.0e3, b in -1.0e3f64..1.0e3) {
        let mut rng = SeedToken::new(seed).to_std_rng();
        let x = random_with(&mut rng, a, b);
        prop_assert!(x >= a.min(b) && x <= a.max(b));
        prop_assert_eq!(random_with(&mut rng, a, a), a);
    }

    #[test]
    fn normalized_has_unit_length(x in -1.0e3f64..1.0e3, y in -1.0e3f64..1.0e3) {
        let p = point(x, y);
        prop_assume!(distance_from_origin(p) > 1e-6);
        prop_assert!((distance_from_origin(normalized(p)) - 1.0).abs() < EPS);
    }

    #[test]
    fn subtract_undoes_add(
        px in -1.0e3f64..1.0e3, py in -1.0e3f64..1.0e3,
        qx in -1.0e3f64..1.0e3, qy in -1.0e3f64..1.0e3,
    ) {
        let p = point(px, py);
        let q = point(qx, qy);
        prop_assert!(distance_between(subtract(add(p, q), q), p) < 1e-9);
    }

    #[test]
    fn rounding_is_idempotent(v in -1.0e4f64..1.0e4, d in 0i32..4) {
        let once = round_to_decimals(v, d);
        prop_assert_eq!(round_to_decimals(once, d), once);
        prop_assert_eq!(round_to_decimals(-v, d), -once);
    }
}
