//! Preset scenarios that can be loaded into a running simulation.
//!
//! Provides a small collection of starting configurations:
//! - An empty system
//! - The Sun and the eight planets
//! - A drifting system, where an overweight Mercury perturbs every orbit
//!
//! Presets are stored in astronomical units (positions) and meters per
//! second (velocities), with radii in kilometers.

pub mod presets;

use bevy::math::DVec3;

use crate::body::BodyDefinition;
use crate::types::UnitSystem;

pub use presets::SCENARIOS;

/// Unit system of every preset body.
pub const PRESET_UNITS: UnitSystem = UnitSystem::Astronomical;

/// One body of a preset scenario.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyPreset {
    pub id: i64,
    pub name: &'static str,
    /// Mass (kg).
    pub mass: f64,
    /// Initial position (AU).
    pub position: [f64; 3],
    /// Initial velocity (m/s).
    pub velocity: [f64; 3],
    /// Radius (km).
    pub radius: f64,
}

impl BodyPreset {
    pub fn definition(&self) -> BodyDefinition {
        BodyDefinition::new(
            self.id,
            self.name,
            self.mass,
            DVec3::from_array(self.position),
            DVec3::from_array(self.velocity),
            self.radius,
        )
    }
}

/// A predefined scenario configuration.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    /// Unique identifier for the scenario.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Calendar date the scenario is set at.
    pub date: &'static str,
    /// Bodies, in insertion order.
    pub bodies: &'static [BodyPreset],
}

impl Scenario {
    /// Inbound definitions for every body, in [`PRESET_UNITS`].
    pub fn definitions(&self) -> Vec<BodyDefinition> {
        self.bodies.iter().map(BodyPreset::definition).collect()
    }
}

/// Get a scenario by ID.
pub fn find_scenario(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}
