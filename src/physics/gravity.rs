//! Pairwise Newtonian gravitation by direct summation.

use bevy::math::DVec3;

use crate::body::GravitationalBody;

/// Position and mass of one body, captured at the start of a step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointMass {
    /// Position in kilometers
    pub position: DVec3,
    /// Mass in kilograms
    pub mass: f64,
}

impl From<&GravitationalBody> for PointMass {
    fn from(body: &GravitationalBody) -> Self {
        Self {
            position: body.position(),
            mass: body.mass(),
        }
    }
}

/// Snapshot of every body's position and mass.
pub fn snapshot(bodies: &[GravitationalBody]) -> Vec<PointMass> {
    bodies.iter().map(PointMass::from).collect()
}

/// Acceleration exerted on a point at `target` by `source`.
///
/// Returns zero when the source is massless or the two points coincide;
/// the coincident case is a true singularity and contributes nothing.
/// Non-finite inputs are not filtered and propagate into the result.
#[inline]
pub fn pairwise_acceleration(target: DVec3, source: &PointMass, gamma: f64) -> DVec3 {
    if source.mass == 0.0 {
        return DVec3::ZERO;
    }

    let delta = source.position - target;
    let r_squared = delta.length_squared();
    if r_squared == 0.0 {
        return DVec3::ZERO;
    }

    let r = r_squared.sqrt();
    // a = γ m / r² along the unit vector delta / r
    delta * (gamma * source.mass / (r_squared * r))
}

/// Net acceleration of every body in the snapshot, in km/s².
///
/// Every entry is computed from the same snapshot, so no body sees another
/// body's updated position within a step.
pub fn compute_accelerations(points: &[PointMass], gamma: f64) -> Vec<DVec3> {
    points
        .iter()
        .enumerate()
        .map(|(i, target)| {
            points
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold(DVec3::ZERO, |acc, (_, source)| {
                    acc + pairwise_acceleration(target.position, source, gamma)
                })
        })
        .collect()
}

/// Total linear momentum in kg·km/s.
pub fn total_momentum(bodies: &[GravitationalBody]) -> DVec3 {
    bodies.iter().map(GravitationalBody::momentum).sum()
}

/// Total mechanical energy (kinetic + pairwise potential) in kg·km²/s².
pub fn total_energy(bodies: &[GravitationalBody], gamma: f64) -> f64 {
    let kinetic: f64 = bodies
        .iter()
        .map(|b| 0.5 * b.mass() * b.velocity().length_squared())
        .sum();

    let mut potential = 0.0;
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            let r = (a.position() - b.position()).length();
            if r > 0.0 {
                potential -= gamma * a.mass() * b.mass() / r;
            }
        }
    }

    kinetic + potential
}
