//! Collision detection and resolution
//!
//! Detection only records overlapping pairs. Resolution runs afterwards,
//! merges each pair into the heavier body and removes the absorbed bodies
//! in a single compaction pass.

pub mod detection;
pub mod resolution;

#[cfg(test)]
mod resolution_test;

pub use detection::{CollisionEvent, check_pair, collision_radius};
pub use resolution::{Merger, absorber, resolve_collisions};
