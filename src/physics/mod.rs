//! N-body gravitation for the solar system simulation.
//!
//! This module provides direct-summation gravity and a semi-implicit Euler
//! integrator. It runs in Bevy's FixedUpdate schedule to maintain consistent
//! physics timesteps.

mod gravity;
mod integrator;

#[cfg(test)]
mod proptest_physics;

use bevy::prelude::*;

pub use gravity::{
    compute_accelerations, pairwise_acceleration, snapshot, total_energy, total_momentum,
    PointMass,
};
pub use integrator::{simulate_multiple, step, NonFinitePolicy};

use crate::simulation::SolarSystem;
use crate::types::SimulationTime;

/// Plugin providing the N-body simulation.
///
/// Adds:
/// - `SolarSystem` and `SimulationTime` resources (unless already inserted)
/// - Physics integration in FixedUpdate
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SolarSystem>()
            .init_resource::<SimulationTime>()
            .add_systems(FixedUpdate, simulation_step);
    }
}

/// Main physics integration system.
///
/// Converts the fixed timestep into simulated seconds and advances every body
/// with the configured number of sub-steps. A step refused by the integrator
/// pauses the simulation.
fn simulation_step(
    mut system: ResMut<SolarSystem>,
    mut sim_time: ResMut<SimulationTime>,
    time: Res<Time>,
) {
    if sim_time.paused {
        return;
    }

    // FixedUpdate delta * time_scale * SECONDS_PER_DAY
    let dt = sim_time.simulated_delta(time.delta_secs_f64());
    if dt <= 0.0 || system.is_empty() {
        return;
    }

    let sub_steps = system.sub_steps();
    match system.simulate_multiple(dt, sub_steps) {
        Ok(()) => sim_time.current += dt,
        Err(err) => {
            warn!("Simulation step refused, pausing: {err}");
            sim_time.paused = true;
        }
    }
}
