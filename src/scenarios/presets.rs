//! Preset scenario definitions.
//!
//! Planets start on the +x axis moving along +z, so every orbit lies in the
//! x-z plane.

use super::{BodyPreset, Scenario};

/// All available preset scenarios.
pub static SCENARIOS: &[Scenario] = &[EMPTY, SOLAR_SYSTEM, DRIFTING_SYSTEM];

const DATE: &str = "June 2, 2024 15:49:00";

/// Scenario 1: Empty
///
/// No user bodies. Permanent bodies, if any, are kept.
pub static EMPTY: Scenario = Scenario {
    id: "empty",
    name: "Empty",
    date: DATE,
    bodies: &[],
};

/// Scenario 2: Solar System
///
/// The Sun at rest at the origin and the eight planets at their mean
/// orbital distance with their mean orbital speed.
pub static SOLAR_SYSTEM: Scenario = Scenario {
    id: "solar_system",
    name: "Solar System",
    date: DATE,
    bodies: &[
        SUN,
        MERCURY,
        VENUS,
        EARTH,
        MARS,
        JUPITER,
        SATURN,
        URANUS,
        NEPTUNE,
    ],
};

/// Scenario 3: Drifting System
///
/// The solar system with Mercury a million times heavier (3.301e29 kg,
/// about a sixth of a solar mass). The Sun is dragged along and the outer
/// planets drift away from their orbits.
pub static DRIFTING_SYSTEM: Scenario = Scenario {
    id: "drifting_system",
    name: "Drifting System",
    date: DATE,
    bodies: &[
        SUN,
        BodyPreset {
            mass: 3.301e29,
            ..MERCURY
        },
        VENUS,
        EARTH,
        MARS,
        JUPITER,
        SATURN,
        URANUS,
        NEPTUNE,
    ],
};

const SUN: BodyPreset = BodyPreset {
    id: 0,
    name: "Sun",
    mass: 1.989e30,
    position: [0.0, 0.0, 0.0],
    velocity: [0.0, 0.0, 0.0],
    radius: 696_342.0,
};

const MERCURY: BodyPreset = BodyPreset {
    id: 1,
    name: "Mercury",
    mass: 3.301e23,
    position: [0.387098, 0.0, 0.0],
    velocity: [0.0, 0.0, 47_360.0],
    radius: 4_881.0,
};

const VENUS: BodyPreset = BodyPreset {
    id: 2,
    name: "Venus",
    mass: 4.8673e24,
    position: [0.7233, 0.0, 0.0],
    velocity: [0.0, 0.0, 35_020.0],
    radius: 12_103.0,
};

const EARTH: BodyPreset = BodyPreset {
    id: 3,
    name: "Earth",
    mass: 5.972e24,
    position: [1.0, 0.0, 0.0],
    velocity: [0.0, 0.0, 29_780.0],
    radius: 12_756.0,
};

const MARS: BodyPreset = BodyPreset {
    id: 4,
    name: "Mars",
    mass: 6.417e23,
    position: [1.524, 0.0, 0.0],
    velocity: [0.0, 0.0, 24_070.0],
    radius: 6_792.0,
};

const JUPITER: BodyPreset = BodyPreset {
    id: 5,
    name: "Jupiter",
    mass: 1.89813e27,
    position: [5.204, 0.0, 0.0],
    velocity: [0.0, 0.0, 13_060.0],
    radius: 142_984.0,
};

const SATURN: BodyPreset = BodyPreset {
    id: 6,
    name: "Saturn",
    mass: 5.683e26,
    position: [9.582, 0.0, 0.0],
    velocity: [0.0, 0.0, 9_680.0],
    radius: 120_536.0,
};

const URANUS: BodyPreset = BodyPreset {
    id: 7,
    name: "Uranus",
    mass: 8.681e25,
    position: [19.201, 0.0, 0.0],
    velocity: [0.0, 0.0, 6_810.0],
    radius: 51_118.0,
};

const NEPTUNE: BodyPreset = BodyPreset {
    id: 8,
    name: "Neptune",
    mass: 1.024e26,
    position: [30.178, 0.0, 0.0],
    velocity: [0.0, 0.0, 5_455.0],
    radius: 49_528.0,
};
