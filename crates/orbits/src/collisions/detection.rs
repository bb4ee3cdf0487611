//! Overlap detection between bodies

use crate::body::Body;

/// A pair of bodies found overlapping during a step
///
/// Indices refer to the body collection as it was when the step started,
/// with `body_a < body_b`.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionEvent {
    pub body_a: usize,
    pub body_b: usize,
    /// Distance between the two centres
    pub separation: f64,
    /// Sum of the radii; the pair overlaps when `separation` does not exceed it
    pub collision_radius: f64,
}

/// Distance below which two bodies touch
pub fn collision_radius(a: &Body, b: &Body) -> f64 {
    a.radius() + b.radius()
}

/// Checks a pair whose separation has already been measured
///
/// Bodies are apart only when strictly farther than the sum of their
/// radii; exact contact counts as a collision. A NaN separation never
/// collides. The event is returned in canonical index order whichever way
/// round the pair was visited.
pub fn check_pair(
    i: usize,
    a: &Body,
    j: usize,
    b: &Body,
    separation: f64,
) -> Option<CollisionEvent> {
    let collision_radius = collision_radius(a, b);
    if separation.is_nan() || separation > collision_radius {
        return None;
    }

    Some(CollisionEvent {
        body_a: i.min(j),
        body_b: i.max(j),
        separation,
        collision_radius,
    })
}
