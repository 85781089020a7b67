//! Gravitating bodies and their inbound definitions.

use bevy::color::Color;
use bevy::math::DVec3;

use crate::coords::km_to_au;
use crate::geometry::{MeshBuffer, Sphere, SphereResolution};
use crate::simulation::SimulationError;
use crate::trajectory::Trajectory;
use crate::types::UnitSystem;

/// Identifier reserved for bodies owned by the simulation itself.
pub const PERMANENT_ID: i64 = -1;

/// Who manages a body's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    /// Part of the simulation; survives body-list replacement.
    Permanent,
    /// Submitted by the application; replaced wholesale on every update.
    UserManaged,
}

impl BodyKind {
    pub fn from_id(id: i64) -> Self {
        if id == PERMANENT_ID {
            BodyKind::Permanent
        } else {
            BodyKind::UserManaged
        }
    }
}

/// Trail and body colors, indexed by `id mod len`.
const PALETTE: [(f32, f32, f32); 8] = [
    (1.0, 0.95, 0.4),
    (0.6, 0.6, 0.6),
    (0.9, 0.85, 0.7),
    (0.2, 0.5, 0.8),
    (0.8, 0.4, 0.2),
    (0.8, 0.7, 0.6),
    (0.6, 0.8, 0.9),
    (0.3, 0.5, 0.9),
];

/// Stable display color for a body id.
pub fn display_color(id: i64) -> Color {
    let (r, g, b) = PALETTE[id.rem_euclid(PALETTE.len() as i64) as usize];
    Color::srgb(r, g, b)
}

/// One body record as submitted by the application layer.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyDefinition {
    pub id: i64,
    pub name: String,
    /// Mass in kilograms
    pub mass: f64,
    /// Position in the units of the accompanying [`UnitSystem`]
    pub position: DVec3,
    /// Velocity in the units of the accompanying [`UnitSystem`]
    pub velocity: DVec3,
    /// Radius in kilometers, used for tessellation only
    pub radius: f64,
}

impl BodyDefinition {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        mass: f64,
        position: DVec3,
        velocity: DVec3,
        radius: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            mass,
            position,
            velocity,
            radius,
        }
    }
}

/// Settings shared by all bodies of one simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodySettings {
    pub units: UnitSystem,
    pub trajectory_capacity: usize,
    pub mesh_resolution: SphereResolution,
}

/// A point mass taking part in the N-body simulation.
///
/// Position and velocity are kept in kilometers and km/s. The position is
/// only changed through [`GravitationalBody::update_position`], which records
/// the previous position in the trajectory history first.
#[derive(Clone, Debug)]
pub struct GravitationalBody {
    id: i64,
    /// Display label, not required to be unique.
    pub name: String,
    mass: f64,
    radius: f64,
    position: DVec3,
    velocity: DVec3,
    trajectory: Trajectory,
    mesh_resolution: SphereResolution,
    mesh: MeshBuffer,
}

impl GravitationalBody {
    /// Create a body from values already in kilometers and km/s.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        mass: f64,
        radius: f64,
        position: DVec3,
        velocity: DVec3,
    ) -> Result<Self, SimulationError> {
        if mass < 0.0 {
            return Err(SimulationError::NegativeMass { id, mass });
        }
        let mesh_resolution = SphereResolution::default();
        Ok(Self {
            id,
            name: name.into(),
            mass,
            radius,
            position,
            velocity,
            trajectory: Trajectory::default(),
            mesh_resolution,
            mesh: Sphere::new(radius, mesh_resolution).mesh_buffer(),
        })
    }

    /// Create a body from an inbound definition, converting units once.
    pub fn from_definition(
        def: &BodyDefinition,
        settings: &BodySettings,
    ) -> Result<Self, SimulationError> {
        if def.mass < 0.0 {
            return Err(SimulationError::NegativeMass {
                id: def.id,
                mass: def.mass,
            });
        }
        Ok(Self {
            id: def.id,
            name: def.name.clone(),
            mass: def.mass,
            radius: def.radius,
            position: settings.units.position_to_km(def.position),
            velocity: settings.units.velocity_to_km_per_s(def.velocity),
            trajectory: Trajectory::with_capacity(settings.trajectory_capacity),
            mesh_resolution: settings.mesh_resolution,
            mesh: Sphere::new(def.radius, settings.mesh_resolution).mesh_buffer(),
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn kind(&self) -> BodyKind {
        BodyKind::from_id(self.id)
    }

    pub fn is_permanent(&self) -> bool {
        self.kind() == BodyKind::Permanent
    }

    /// Mass in kilograms.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Set the mass, rejecting negative values.
    pub fn set_mass(&mut self, mass: f64) -> Result<(), SimulationError> {
        if mass < 0.0 {
            return Err(SimulationError::NegativeMass { id: self.id, mass });
        }
        self.mass = mass;
        Ok(())
    }

    /// Tessellation radius in kilometers.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Change the radius; the mesh is regenerated only if it differs.
    pub fn set_radius(&mut self, radius: f64) {
        if radius != self.radius {
            self.radius = radius;
            self.rebuild_mesh();
        }
    }

    pub fn mesh_resolution(&self) -> SphereResolution {
        self.mesh_resolution
    }

    pub fn set_mesh_resolution(&mut self, resolution: SphereResolution) {
        if resolution != self.mesh_resolution {
            self.mesh_resolution = resolution;
            self.rebuild_mesh();
        }
    }

    fn rebuild_mesh(&mut self) {
        self.mesh = Sphere::new(self.radius, self.mesh_resolution).mesh_buffer();
    }

    /// Cached vertex data for rendering.
    pub fn mesh(&self) -> &MeshBuffer {
        &self.mesh
    }

    /// Position in kilometers.
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Position in astronomical units.
    pub fn position_au(&self) -> DVec3 {
        km_to_au(self.position)
    }

    /// Move the body.
    ///
    /// The current position is appended to the trajectory history before the
    /// new one is adopted; the history evicts its oldest sample only after
    /// this append pushed it over capacity.
    pub fn update_position(&mut self, position: DVec3) {
        self.trajectory.push(self.position);
        self.position = position;
    }

    /// Velocity in km/s.
    pub fn velocity(&self) -> DVec3 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: DVec3) {
        self.velocity = velocity;
    }

    /// Linear momentum in kg·km/s.
    pub fn momentum(&self) -> DVec3 {
        self.velocity * self.mass
    }

    /// Adopt the trail capacity and mesh resolution of `settings`.
    ///
    /// Position and velocity are already in kilometers, so `settings.units`
    /// is not consulted.
    pub fn apply_settings(&mut self, settings: &BodySettings) {
        self.trajectory.set_capacity(settings.trajectory_capacity);
        self.set_mesh_resolution(settings.mesh_resolution);
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn clear_trajectory(&mut self) {
        self.trajectory.clear();
    }

    pub fn display_color(&self) -> Color {
        display_color(self.id)
    }
}
