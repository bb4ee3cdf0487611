//! Errors raised at the edges of the simulation
//!
//! A step itself never fails. These errors come from adding bodies,
//! mutating parameters, and loading scenarios.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("invalid body mass {mass}: must be finite and positive to simulate")]
    InvalidMass { mass: f64 },

    #[error("body {field} must be finite")]
    NonFinite { field: &'static str },

    #[error("invalid gravitational constant {value}")]
    InvalidGravitationalConstant { value: f64 },

    #[error("invalid scenario: {0}")]
    InvalidConfig(String),

    #[error("failed to parse scenario")]
    Parse(#[from] serde_yaml::Error),
}

impl SimulationError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
