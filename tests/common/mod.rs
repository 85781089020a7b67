//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::math::DVec3;
use skysim::body::BodyDefinition;
use skysim::simulation::{SimulationConfig, SolarSystem};

/// Definitions of two bodies on a circular orbit around their barycenter,
/// in km and km/s.
pub fn circular_binary(m1: f64, m2: f64, separation: f64, gamma: f64) -> [BodyDefinition; 2] {
    let total = m1 + m2;
    let r1 = separation * m2 / total;
    let r2 = separation * m1 / total;
    let omega = (gamma * total / separation.powi(3)).sqrt();

    [
        BodyDefinition::new(
            0,
            "primary",
            m1,
            DVec3::new(-r1, 0.0, 0.0),
            DVec3::new(0.0, -omega * r1, 0.0),
            1.0,
        ),
        BodyDefinition::new(
            1,
            "secondary",
            m2,
            DVec3::new(r2, 0.0, 0.0),
            DVec3::new(0.0, omega * r2, 0.0),
            1.0,
        ),
    ]
}

/// Compute the period of a circular two-body orbit.
pub fn binary_period(m1: f64, m2: f64, separation: f64, gamma: f64) -> f64 {
    use std::f64::consts::TAU;
    TAU * (separation.powi(3) / (gamma * (m1 + m2))).sqrt()
}

/// Simulation with a custom gravitational constant.
pub fn system_with_gamma(gamma: f64) -> SolarSystem {
    SolarSystem::new(SimulationConfig {
        gamma,
        ..Default::default()
    })
}

/// Center of mass of every body, in km.
pub fn barycenter(system: &SolarSystem) -> DVec3 {
    let total: f64 = system.bodies().iter().map(|b| b.mass()).sum();
    let weighted: DVec3 = system.bodies().iter().map(|b| b.position() * b.mass()).sum();
    weighted / total
}
