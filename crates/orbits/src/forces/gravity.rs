//! Direct pairwise gravity

use nalgebra::Vector2;

use crate::body::Body;
use crate::forces::DEFAULT_G;
use crate::vector::Vector;

/// Newtonian attraction with an adjustable constant
///
/// # Examples
///
/// ```
/// use orbits::body::Body;
/// use orbits::forces::Gravity;
/// use orbits::vector::Vector;
/// use nalgebra::{Point2, Vector2};
///
/// let sun = Body::new(1000.0, Point2::new(0.0, 0.0), Vector2::zeros());
/// let rock = Body::new(1.0, Point2::new(10.0, 0.0), Vector2::zeros());
///
/// let gravity = Gravity::new(1.0);
/// let separation = Vector::between(sun.position(), rock.position());
/// let force = gravity.force_on(&rock, &sun, &separation);
///
/// // Pulled back toward the sun along -x
/// assert!((force.x + 10.0).abs() < 1e-9);
/// assert!(force.y.abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    pub g: f64,
}

impl Gravity {
    pub fn new(g: f64) -> Self {
        Self { g }
    }

    /// Force exerted on `subject` by `object`
    ///
    /// `separation` must point from `object` to `subject` and have a
    /// non-zero magnitude; callers only get here once the pair is known not
    /// to overlap. The result points from `subject` toward `object`.
    pub fn force_on(&self, subject: &Body, object: &Body, separation: &Vector) -> Vector2<f64> {
        let r = separation.magnitude;
        let magnitude = self.g * subject.mass() * object.mass() / (r * r);
        -separation.unit() * magnitude
    }

    /// Total potential energy of a set of bodies, each pair counted once
    ///
    /// Massless and coincident pairs contribute nothing.
    pub fn potential_energy(&self, bodies: &[Body]) -> f64 {
        bodies
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                bodies[i + 1..].iter().filter_map(move |b| {
                    let r = a.distance_to(b);
                    (r > 0.0).then(|| -self.g * a.mass() * b.mass() / r)
                })
            })
            .sum()
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self::new(DEFAULT_G)
    }
}
