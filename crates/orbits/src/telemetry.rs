//! Per-frame summary handed to display collaborators

use std::time::Duration;

use serde::Serialize;

use crate::vector::Vector;

/// The two bodies farthest apart in a frame
///
/// Indices refer to the collection as it was when the step began, before
/// any merges of that step were compacted away.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FarthestPair {
    /// Index of the body the vector starts from
    pub object: usize,
    /// Index of the body the vector points to
    pub subject: usize,
    pub vector: Vector,
}

/// Read-only snapshot published after every step
///
/// `frame` and `collision_count` accumulate over the lifetime of the
/// simulation; `fastest_speed` and `farthest` describe the current frame
/// only.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Telemetry {
    pub frame: u64,
    pub fps: f64,
    pub body_count: usize,
    pub collision_count: u64,
    pub fastest_speed: f64,
    pub farthest: Option<FarthestPair>,
}

/// Frames per second implied by the time since the previous frame
///
/// Returns 0 when no time has elapsed.
pub fn frames_per_second(elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 { 1.0 / secs } else { 0.0 }
}
