//! Property-based tests for the coordinate transforms using proptest.

use bevy::math::DVec3;
use proptest::prelude::*;

use super::*;

/// Cartesian components spanning planetary to sub-kilometer scales.
fn component() -> impl Strategy<Value = f64> {
    prop_oneof![-1e9f64..1e9, -10.0f64..10.0]
}

fn non_origin_vector() -> impl Strategy<Value = DVec3> {
    (component(), component(), component())
        .prop_map(|(x, y, z)| DVec3::new(x, y, z))
        .prop_filter("origin is excluded", |v| v.length() > 1e-6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Cartesian -> spherical -> Cartesian reproduces the input.
    #[test]
    fn prop_position_roundtrip(v in non_origin_vector()) {
        let back = spherical_to_cartesian(cartesian_to_spherical(v));
        let relative_error = (back - v).length() / v.length();
        prop_assert!(
            relative_error < 1e-9,
            "roundtrip error {:.3e} for {:?} -> {:?}",
            relative_error, v, back
        );
    }

    /// Angles stay inside their canonical ranges.
    #[test]
    fn prop_angles_in_range(v in non_origin_vector()) {
        let s = cartesian_to_spherical(v);
        prop_assert!(s.x > 0.0);
        prop_assert!((0.0..=std::f64::consts::PI).contains(&s.y));
        prop_assert!(s.z.abs() <= std::f64::consts::PI);
    }

    /// Velocity transform followed by its inverse reproduces the Cartesian
    /// velocity away from the polar axis.
    #[test]
    fn prop_velocity_roundtrip(
        pos in non_origin_vector(),
        vx in -100.0f64..100.0,
        vy in -100.0f64..100.0,
        vz in -100.0f64..100.0,
    ) {
        let vel = DVec3::new(vx, vy, vz);
        // Keep clear of the z-axis where the angular rates are degenerate
        prop_assume!((pos.x * pos.x + pos.y * pos.y).sqrt() > 1e-3 * pos.length());
        prop_assume!(vel.length() > 1e-9);

        let back = spherical_to_cartesian_velocity(
            cartesian_to_spherical(pos),
            cartesian_to_spherical_velocity(pos, vel),
        );
        let relative_error = (back - vel).length() / vel.length();
        prop_assert!(
            relative_error < 1e-6,
            "velocity roundtrip error {:.3e}",
            relative_error
        );
    }

    /// AU <-> km conversion is its own inverse.
    #[test]
    fn prop_unit_roundtrip(x in -100.0f64..100.0, y in -100.0f64..100.0, z in -100.0f64..100.0) {
        let v = DVec3::new(x, y, z);
        let back = km_to_au(au_to_km(v));
        prop_assert!((back - v).length() <= 1e-12 * v.length().max(1.0));
    }
}
