//! Semi-implicit (symplectic) Euler integration of the N-body system.
//!
//! Each step first computes the accelerations of all bodies from one
//! snapshot of positions, then updates every body:
//!
//! ```text
//! v ← v + a·dt
//! x ← x + v·dt      (using the already updated v)
//! ```
//!
//! First order, but symplectic: energy errors stay bounded over long runs
//! instead of drifting, which is what keeps orbits closed.

use bevy::math::DVec3;

use super::gravity::{compute_accelerations, snapshot};
use crate::body::GravitationalBody;
use crate::simulation::SimulationError;

/// What to do when a step yields non-finite values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NonFinitePolicy {
    /// Commit the step; NaN/infinity flows into later steps.
    #[default]
    Propagate,
    /// Refuse the step and leave every body untouched.
    Reject,
}

/// Advance all bodies by one step of length `dt` seconds.
///
/// `gamma` is the gravitational constant in km³·kg⁻¹·s⁻². Under
/// [`NonFinitePolicy::Reject`] non-finite `dt` or `gamma`, or a step that
/// would produce a non-finite position or velocity, returns an error before
/// any body is modified.
pub fn step(
    bodies: &mut [GravitationalBody],
    gamma: f64,
    dt: f64,
    policy: NonFinitePolicy,
) -> Result<(), SimulationError> {
    if policy == NonFinitePolicy::Reject {
        check_parameter("dt", dt)?;
        check_parameter("gamma", gamma)?;
    }

    // Read pass: every acceleration from the same snapshot
    let accelerations = compute_accelerations(&snapshot(bodies), gamma);

    let updated: Vec<(DVec3, DVec3)> = bodies
        .iter()
        .zip(&accelerations)
        .map(|(body, acc)| {
            let vel = body.velocity() + *acc * dt;
            (body.position() + vel * dt, vel)
        })
        .collect();

    if policy == NonFinitePolicy::Reject {
        let invalid = updated
            .iter()
            .position(|(pos, vel)| !pos.is_finite() || !vel.is_finite());
        if let Some(index) = invalid {
            let body = &bodies[index];
            return Err(SimulationError::NonFiniteState {
                id: body.id(),
                name: body.name.clone(),
            });
        }
    }

    // Write pass
    for (body, (pos, vel)) in bodies.iter_mut().zip(updated) {
        body.set_velocity(vel);
        body.update_position(pos);
    }

    Ok(())
}

/// Advance all bodies by `dt` seconds using `steps` equal sub-steps.
///
/// `steps == 1` is identical to a single [`step`]. Zero steps are rejected.
/// Sub-steps run sequentially; if one is rejected the bodies keep the state
/// reached by the sub-steps before it.
pub fn simulate_multiple(
    bodies: &mut [GravitationalBody],
    gamma: f64,
    dt: f64,
    steps: u32,
    policy: NonFinitePolicy,
) -> Result<(), SimulationError> {
    if steps == 0 {
        return Err(SimulationError::InvalidStepCount(steps));
    }

    let sub_dt = dt / steps as f64;
    for _ in 0..steps {
        step(bodies, gamma, sub_dt, policy)?;
    }
    Ok(())
}

fn check_parameter(name: &'static str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimulationError::NonFiniteParameter { name, value })
    }
}
