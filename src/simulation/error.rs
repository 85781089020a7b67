//! Error type shared by the simulation core.

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("sub-step count must be at least 1 (got {0})")]
    InvalidStepCount(u32),

    #[error("body {id} has negative mass {mass} kg")]
    NegativeMass { id: i64, mass: f64 },

    #[error("non-finite {name}: {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },

    #[error("step would leave body {id} ({name}) with a non-finite state")]
    NonFiniteState { id: i64, name: String },

    #[error("body index {index} out of range ({len} bodies)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unknown scenario: {0}")]
    UnknownScenario(String),
}
