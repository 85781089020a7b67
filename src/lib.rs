//! SkySim - N-Body Solar System Simulator
//!
//! A library crate providing the simulation core of a 3D solar system
//! viewer: gravitating bodies, a sub-stepped N-body integrator, trajectory
//! history, coordinate transforms and sphere/disc tessellation.

pub mod body;
pub mod coords;
pub mod geometry;
pub mod physics;
pub mod scenarios;
pub mod simulation;
pub mod trajectory;
pub mod types;

#[cfg(test)]
pub mod test_utils;
