//! Simulation container owning the body collection and the gravitational
//! constant.
//!
//! [`SolarSystem`] is the only owner of bodies. The application mutates it
//! strictly between frames: it submits body lists, changes `gamma`, and asks
//! for steps; the integrator only ever sees the bodies for the duration of
//! one call.

mod config;
mod error;

use bevy::log::{debug, info};
use bevy::math::DVec3;
use bevy::prelude::Resource;

pub use config::SimulationConfig;
pub use error::SimulationError;

use crate::body::{BodyDefinition, BodySettings, GravitationalBody};
use crate::physics;
use crate::scenarios::{find_scenario, PRESET_UNITS};
use crate::types::UnitSystem;

/// A set of gravitating bodies and the constant governing them.
#[derive(Resource, Clone, Debug, Default)]
pub struct SolarSystem {
    config: SimulationConfig,
    bodies: Vec<GravitationalBody>,
}

impl SolarSystem {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            bodies: Vec::new(),
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Gravitational constant in km³·kg⁻¹·s⁻².
    pub fn gamma(&self) -> f64 {
        self.config.gamma
    }

    /// Replace the gravitational constant; takes effect on the next step.
    pub fn set_gamma(&mut self, gamma: f64) {
        self.config.gamma = gamma;
    }

    pub fn sub_steps(&self) -> u32 {
        self.config.sub_steps
    }

    pub fn set_sub_steps(&mut self, sub_steps: u32) {
        self.config.sub_steps = sub_steps;
    }

    pub fn bodies(&self) -> &[GravitationalBody] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn body(&self, index: usize) -> Option<&GravitationalBody> {
        self.bodies.get(index)
    }

    pub fn body_mut(&mut self, index: usize) -> Option<&mut GravitationalBody> {
        self.bodies.get_mut(index)
    }

    /// First body with the given id.
    pub fn find(&self, id: i64) -> Option<&GravitationalBody> {
        self.bodies.iter().find(|b| b.id() == id)
    }

    /// Append a single body built from a definition.
    pub fn add_body(&mut self, def: &BodyDefinition) -> Result<(), SimulationError> {
        let body = GravitationalBody::from_definition(def, &self.config.body_settings())?;
        self.bodies.push(body);
        Ok(())
    }

    /// Append an already constructed body, e.g. a permanent one.
    ///
    /// The body adopts the configured trail capacity and mesh resolution.
    pub fn push_body(&mut self, mut body: GravitationalBody) {
        body.apply_settings(&self.config.body_settings());
        self.bodies.push(body);
    }

    /// Remove and return the body at `index`.
    pub fn remove_body(&mut self, index: usize) -> Result<GravitationalBody, SimulationError> {
        if index >= self.bodies.len() {
            return Err(SimulationError::IndexOutOfRange {
                index,
                len: self.bodies.len(),
            });
        }
        Ok(self.bodies.remove(index))
    }

    /// Replace every user-managed body with the given definitions.
    ///
    /// Permanent bodies are kept unchanged and in their original order,
    /// followed by the new bodies in submission order. Definitions are
    /// interpreted in the configured unit system. If any definition is
    /// invalid nothing changes.
    pub fn replace_bodies<'a>(
        &mut self,
        defs: impl IntoIterator<Item = &'a BodyDefinition>,
    ) -> Result<(), SimulationError> {
        self.replace_bodies_with_units(defs, self.config.units)
    }

    /// [`replace_bodies`](Self::replace_bodies) with an explicit unit system.
    pub fn replace_bodies_with_units<'a>(
        &mut self,
        defs: impl IntoIterator<Item = &'a BodyDefinition>,
        units: UnitSystem,
    ) -> Result<(), SimulationError> {
        let settings = BodySettings {
            units,
            ..self.config.body_settings()
        };
        let incoming = defs
            .into_iter()
            .map(|def| GravitationalBody::from_definition(def, &settings))
            .collect::<Result<Vec<_>, _>>()?;

        let before = self.bodies.len();
        self.bodies.retain(GravitationalBody::is_permanent);
        debug!(
            "Replacing {} user bodies with {} ({} permanent kept)",
            before - self.bodies.len(),
            incoming.len(),
            self.bodies.len()
        );
        self.bodies.extend(incoming);
        Ok(())
    }

    /// Replace user-managed bodies with a preset scenario.
    pub fn load_scenario(&mut self, scenario_id: &str) -> Result<(), SimulationError> {
        let scenario = find_scenario(scenario_id)
            .ok_or_else(|| SimulationError::UnknownScenario(scenario_id.to_string()))?;
        info!("Loading scenario: {} ({})", scenario.name, scenario.id);
        self.replace_bodies_with_units(&scenario.definitions(), PRESET_UNITS)
    }

    /// Advance by a single integrator step of `dt` seconds.
    pub fn step(&mut self, dt: f64) -> Result<(), SimulationError> {
        physics::step(&mut self.bodies, self.config.gamma, dt, self.config.non_finite)
    }

    /// Advance by `dt` seconds split into `steps` equal sub-steps.
    pub fn simulate_multiple(&mut self, dt: f64, steps: u32) -> Result<(), SimulationError> {
        physics::simulate_multiple(
            &mut self.bodies,
            self.config.gamma,
            dt,
            steps,
            self.config.non_finite,
        )
    }

    /// Run `iterations` calls of [`simulate_multiple`](Self::simulate_multiple)
    /// and collect the positions after each one.
    ///
    /// Each frame holds one position per body, in body order.
    pub fn record(
        &mut self,
        dt: f64,
        steps: u32,
        iterations: usize,
    ) -> Result<Vec<Vec<DVec3>>, SimulationError> {
        let mut frames = Vec::with_capacity(iterations);
        for _ in 0..iterations {
            self.simulate_multiple(dt, steps)?;
            frames.push(self.positions());
        }
        Ok(frames)
    }

    /// Current positions in kilometers, in body order.
    pub fn positions(&self) -> Vec<DVec3> {
        self.bodies.iter().map(GravitationalBody::position).collect()
    }

    pub fn clear_trajectories(&mut self) {
        for body in &mut self.bodies {
            body.clear_trajectory();
        }
    }

    pub fn total_momentum(&self) -> DVec3 {
        physics::total_momentum(&self.bodies)
    }

    pub fn total_energy(&self) -> f64 {
        physics::total_energy(&self.bodies, self.config.gamma)
    }
}
