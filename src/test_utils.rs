//! Test utilities for the N-body simulation tests.
//!
//! Provides fixtures for analytically known systems and assertions for
//! verifying conserved quantities.

use bevy::math::DVec3;

use crate::body::GravitationalBody;
use crate::types::{AU_TO_KM, G_KM};

/// Fixtures for creating test systems.
pub mod fixtures {
    use super::*;

    /// Two bodies on circular orbits around their common barycenter,
    /// in units where the gravitational constant is 1.
    ///
    /// The barycenter sits at the origin and the total momentum is zero.
    pub fn binary_pair(m1: f64, m2: f64, separation: f64) -> Vec<GravitationalBody> {
        circular_binary(m1, m2, separation, 1.0)
    }

    /// Circular binary for an arbitrary gravitational constant.
    pub fn circular_binary(
        m1: f64,
        m2: f64,
        separation: f64,
        gamma: f64,
    ) -> Vec<GravitationalBody> {
        let total = m1 + m2;
        let r1 = separation * m2 / total;
        let r2 = separation * m1 / total;
        // Angular velocity of a circular two-body orbit: ω² = γM / d³
        let omega = (gamma * total / separation.powi(3)).sqrt();

        vec![
            body(0, m1, DVec3::new(-r1, 0.0, 0.0), DVec3::new(0.0, -omega * r1, 0.0)),
            body(1, m2, DVec3::new(r2, 0.0, 0.0), DVec3::new(0.0, omega * r2, 0.0)),
        ]
    }

    /// Sun and Earth in kilometers and km/s on a circular orbit.
    pub fn sun_earth() -> Vec<GravitationalBody> {
        circular_binary(1.989e30, 5.972e24, AU_TO_KM, G_KM)
    }

    fn body(id: i64, mass: f64, pos: DVec3, vel: DVec3) -> GravitationalBody {
        GravitationalBody::new(id, format!("body-{id}"), mass, 1.0, pos, vel)
            .expect("fixture masses are non-negative")
    }
}

/// Assertions for verifying physical invariants.
pub mod assertions {
    use super::*;

    /// Period of a circular two-body orbit: T = 2π √(d³ / γM)
    pub fn binary_period(m1: f64, m2: f64, separation: f64, gamma: f64) -> f64 {
        use std::f64::consts::TAU;
        TAU * (separation.powi(3) / (gamma * (m1 + m2))).sqrt()
    }

    /// Assert that a conserved quantity drifted by at most `tolerance`
    /// (relative when the initial value is not tiny).
    ///
    /// # Panics
    /// Panics if the drift exceeds tolerance.
    pub fn assert_conserved(initial: f64, final_value: f64, tolerance: f64) {
        let drift = if initial.abs() > 1e-10 {
            ((final_value - initial) / initial).abs()
        } else {
            (final_value - initial).abs()
        };
        assert!(
            drift <= tolerance,
            "Quantity not conserved: initial={initial:.6e}, final={final_value:.6e}, drift={drift:.6e}, tolerance={tolerance:.6e}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{total_energy, total_momentum};
    use approx::assert_relative_eq;

    #[test]
    fn test_binary_pair_has_zero_momentum() {
        let bodies = fixtures::binary_pair(2.0, 0.5, 3.0);
        assert!(total_momentum(&bodies).length() < 1e-15);
    }

    #[test]
    fn test_binary_pair_is_bound() {
        let bodies = fixtures::binary_pair(1.0, 1.0, 1.0);
        assert!(total_energy(&bodies, 1.0) < 0.0);
    }

    #[test]
    fn test_sun_earth_orbital_speed() {
        let bodies = fixtures::sun_earth();
        // Earth moves at roughly 29.8 km/s around the barycenter
        assert_relative_eq!(bodies[1].velocity().length(), 29.78, epsilon = 0.1);
    }

    #[test]
    fn test_earth_period_is_one_year() {
        let period = assertions::binary_period(1.989e30, 5.972e24, AU_TO_KM, G_KM);
        let year_seconds = 365.25 * 24.0 * 3600.0;
        assert_relative_eq!(period, year_seconds, epsilon = year_seconds * 0.01);
    }
}
