//! Pairwise geometry between two points
//!
//! Distances and directions between bodies all go through [`Vector`].
//! Angles are measured as if y increased upward, while positions live in
//! screen-style coordinates where y grows downward. Gravity and the launch
//! rubber band both rely on this flip, so it must not change in one place only.

use nalgebra::{Point2, Vector2};
use serde::Serialize;
use std::f64::consts::TAU;

/// Euclidean distance between two points
///
/// # Examples
///
/// ```
/// use orbits::vector::distance;
/// use nalgebra::Point2;
///
/// let d = distance(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
/// assert_eq!(d, 5.0);
/// ```
pub fn distance(p1: Point2<f64>, p2: Point2<f64>) -> f64 {
    (p2 - p1).magnitude()
}

/// Polar angle of `p2` seen from `p1`, in `[0, 2π)`
///
/// The y difference is negated before `atan2`, so a point straight above
/// on screen (smaller y) sits at π/2.
///
/// # Examples
///
/// ```
/// use orbits::vector::angle;
/// use nalgebra::Point2;
/// use std::f64::consts::FRAC_PI_2;
///
/// let a = angle(Point2::new(0.0, 0.0), Point2::new(0.0, -1.0));
/// assert!((a - FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn angle(p1: Point2<f64>, p2: Point2<f64>) -> f64 {
    let dx = p2.x - p1.x;
    let dy = -(p2.y - p1.y);
    let alpha = dy.atan2(dx);
    if alpha >= 0.0 {
        return alpha;
    }
    // Tiny negative angles round up to exactly 2π
    let wrapped = alpha + TAU;
    if wrapped < TAU { wrapped } else { 0.0 }
}

/// Directed segment from `origin` to `dest`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vector {
    pub magnitude: f64,
    pub angle: f64,
    pub origin: [f64; 2],
    pub dest: [f64; 2],
}

impl Vector {
    /// Builds the vector pointing from `origin` to `dest`
    pub fn between(origin: Point2<f64>, dest: Point2<f64>) -> Self {
        Self {
            magnitude: distance(origin, dest),
            angle: angle(origin, dest),
            origin: [origin.x, origin.y],
            dest: [dest.x, dest.y],
        }
    }

    /// Unit direction from origin toward dest, back in y-down coordinates
    ///
    /// Zero-length vectors have angle 0 and therefore return `(1, 0)`.
    pub fn unit(&self) -> Vector2<f64> {
        Vector2::new(self.angle.cos(), -self.angle.sin())
    }
}
