//! Two-dimensional gravity simulation with merging bodies
//!
//! Bodies attract each other pairwise, merge when they overlap and move
//! with explicit Euler steps of unit length. [`simulation::Simulation`] is
//! the entry point; [`launch::Launcher`] and [`config::Scenario`] are the
//! two ways bodies usually get into it.

pub mod body;
pub mod collisions;
pub mod config;
pub mod error;
pub mod forces;
pub mod launch;
pub mod seeding;
pub mod simulation;
pub mod telemetry;
pub mod vector;

pub use body::Body;
pub use error::SimulationError;
pub use simulation::Simulation;
pub use telemetry::Telemetry;

#[cfg(test)]
mod seeding_test;
