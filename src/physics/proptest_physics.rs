//! Property-based tests for the N-body integrator using proptest.
//!
//! These tests verify physical invariants across a wide range of masses,
//! separations and step sizes.

use bevy::math::DVec3;
use proptest::prelude::*;

use super::{simulate_multiple, step, total_energy, total_momentum, NonFinitePolicy};
use crate::body::GravitationalBody;
use crate::test_utils::{assertions, fixtures};

fn vec3(range: f64) -> impl Strategy<Value = DVec3> {
    (-range..range, -range..range, -range..range).prop_map(|(x, y, z)| DVec3::new(x, y, z))
}

fn random_body(id: i64) -> impl Strategy<Value = GravitationalBody> {
    (0.1f64..10.0, vec3(10.0), vec3(1.0)).prop_map(move |(mass, pos, vel)| {
        GravitationalBody::new(id, format!("body-{id}"), mass, 1.0, pos, vel).unwrap()
    })
}

fn random_system() -> impl Strategy<Value = Vec<GravitationalBody>> {
    (2usize..6).prop_flat_map(|n| {
        (0..n)
            .map(|id| random_body(id as i64))
            .collect::<Vec<_>>()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Internal forces cancel pairwise, so total momentum survives every step.
    #[test]
    fn prop_momentum_conserved(
        mut bodies in random_system(),
        dt in 1e-4f64..1e-2,
    ) {
        let before = total_momentum(&bodies);
        simulate_multiple(&mut bodies, 1.0, dt, 10, NonFinitePolicy::Propagate).unwrap();

        // Close encounters inflate individual momenta; compare against them
        let scale = bodies.iter().map(|b| b.momentum().length()).sum::<f64>().max(1.0);
        let drift = (total_momentum(&bodies) - before).length() / scale;
        prop_assert!(drift < 1e-9, "momentum drift {drift:.3e}");
    }

    /// Energy of a circular binary stays bounded over one period.
    #[test]
    fn prop_binary_energy_bounded(
        m1 in 0.5f64..5.0,
        ratio in 1e-3f64..1.0,
        separation in 0.5f64..5.0,
    ) {
        let m2 = m1 * ratio;
        let mut bodies = fixtures::binary_pair(m1, m2, separation);
        let initial = total_energy(&bodies, 1.0);

        let period = assertions::binary_period(m1, m2, separation, 1.0);
        simulate_multiple(&mut bodies, 1.0, period, 5_000, NonFinitePolicy::Reject).unwrap();

        let drift = ((total_energy(&bodies, 1.0) - initial) / initial).abs();
        prop_assert!(drift < 0.02, "energy drift {:.3}%", drift * 100.0);
    }

    /// A single sub-step is the same as a direct step.
    #[test]
    fn prop_single_substep_is_step(
        bodies in random_system(),
        dt in 1e-4f64..1.0,
    ) {
        let mut a = bodies.clone();
        let mut b = bodies;
        step(&mut a, 1.0, dt, NonFinitePolicy::Propagate).unwrap();
        simulate_multiple(&mut b, 1.0, dt, 1, NonFinitePolicy::Propagate).unwrap();

        for (x, y) in a.iter().zip(&b) {
            prop_assert_eq!(x.position(), y.position());
            prop_assert_eq!(x.velocity(), y.velocity());
        }
    }

    /// Every sub-step appends exactly one trajectory sample until the cap.
    #[test]
    fn prop_trajectory_grows_per_substep(
        mut bodies in random_system(),
        steps in 1u32..200,
    ) {
        simulate_multiple(&mut bodies, 1.0, 1e-3, steps, NonFinitePolicy::Propagate).unwrap();
        for b in &bodies {
            prop_assert_eq!(b.trajectory().len(), (steps as usize).min(b.trajectory().capacity()));
        }
    }
}
