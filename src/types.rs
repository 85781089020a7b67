//! Core constants, unit systems and simulation clock.

use bevy::math::DVec3;
use bevy::prelude::*;

// Physical constants

/// Gravitational constant in SI units (m³·kg⁻¹·s⁻²)
pub const G_SI: f64 = 6.67430e-11;

/// Gravitational constant in the internal unit system (km³·kg⁻¹·s⁻²)
pub const G_KM: f64 = G_SI * 1e-9;

/// Astronomical unit in kilometers
pub const AU_TO_KM: f64 = 149_597_870.7;

/// Kilometers to AU
pub const KM_TO_AU: f64 = 1.0 / AU_TO_KM;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Unit system used by an inbound body definition.
///
/// The integrator always works in kilometers and kilometers per second;
/// definitions are converted exactly once when they become bodies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnitSystem {
    /// Position in km, velocity in km/s.
    #[default]
    Metric,
    /// Position in AU, velocity in m/s (the unit set of the preset scenarios).
    Astronomical,
}

impl UnitSystem {
    /// Convert a position expressed in this unit system to kilometers.
    pub fn position_to_km(self, pos: DVec3) -> DVec3 {
        match self {
            UnitSystem::Metric => pos,
            UnitSystem::Astronomical => crate::coords::au_to_km(pos),
        }
    }

    /// Convert a velocity expressed in this unit system to km/s.
    pub fn velocity_to_km_per_s(self, vel: DVec3) -> DVec3 {
        match self {
            UnitSystem::Metric => vel,
            UnitSystem::Astronomical => crate::coords::meters_to_km(vel),
        }
    }
}

/// Simulation time resource tracking the clock of the running scenario.
#[derive(Resource, Clone, Debug)]
pub struct SimulationTime {
    /// Simulated seconds elapsed since the scenario was loaded
    pub current: f64,
    /// Time scale multiplier (1.0 = 1 sim-day per real-second)
    pub scale: f64,
    /// Whether simulation is paused
    pub paused: bool,
}

impl Default for SimulationTime {
    fn default() -> Self {
        Self {
            current: 0.0,
            scale: 1.0,
            paused: false,
        }
    }
}

impl SimulationTime {
    /// Reset the clock to the start of the scenario and pause.
    pub fn reset(&mut self) {
        self.current = 0.0;
        self.paused = true;
    }

    /// Simulated seconds to advance for a real-time frame delta.
    pub fn simulated_delta(&self, real_delta_secs: f64) -> f64 {
        real_delta_secs * self.scale * SECONDS_PER_DAY
    }

    /// Current time in days since scenario start
    pub fn days(&self) -> f64 {
        self.current / SECONDS_PER_DAY
    }
}
