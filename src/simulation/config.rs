//! Configuration of a simulation instance.

use crate::body::BodySettings;
use crate::geometry::SphereResolution;
use crate::physics::NonFinitePolicy;
use crate::trajectory::MAX_TRAJECTORY_LENGTH;
use crate::types::{G_KM, UnitSystem};

/// Configuration for a [`SolarSystem`](super::SolarSystem).
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Gravitational constant in km³·kg⁻¹·s⁻². Default: 6.67430e-20.
    pub gamma: f64,
    /// Sub-steps per simulated frame. Default: 10.
    pub sub_steps: u32,
    /// Trajectory samples kept per body. Default: 128.
    pub trajectory_capacity: usize,
    /// Sphere tessellation for body meshes. Default: 8 × 16.
    pub mesh_resolution: SphereResolution,
    /// Units of inbound body definitions. Default: km and km/s.
    pub units: UnitSystem,
    /// Handling of NaN/infinity produced by a step. Default: propagate.
    pub non_finite: NonFinitePolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gamma: G_KM,
            sub_steps: 10,
            trajectory_capacity: MAX_TRAJECTORY_LENGTH,
            mesh_resolution: SphereResolution::default(),
            units: UnitSystem::Metric,
            non_finite: NonFinitePolicy::Propagate,
        }
    }
}

impl SimulationConfig {
    /// Settings applied to every body created from a definition.
    pub fn body_settings(&self) -> BodySettings {
        BodySettings {
            units: self.units,
            trajectory_capacity: self.trajectory_capacity,
            mesh_resolution: self.mesh_resolution,
        }
    }
}
