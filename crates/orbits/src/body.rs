use nalgebra::{Point2, Vector2};

use crate::error::SimulationError;

/// A point mass in the simulation plane
///
/// The radius is never stored on its own: every mass change recomputes it
/// as `mass^(1/3)`, which is why the fields are private.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    position: Point2<f64>,
    velocity: Vector2<f64>,
    mass: f64,
    radius: f64,
    force: Vector2<f64>,
    movable: bool,
    speed: f64,
}

/// Radius of a body of the given mass (constant density)
pub fn radius_for_mass(mass: f64) -> f64 {
    mass.cbrt()
}

impl Body {
    /// Creates a movable body
    ///
    /// A mass of zero is allowed here for bodies still being placed, but
    /// such a body is rejected by [`Simulation::add`](crate::simulation::Simulation::add).
    ///
    /// # Examples
    ///
    /// ```
    /// use orbits::body::Body;
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let body = Body::new(8.0, Point2::new(1.0, 2.0), Vector2::new(0.0, 1.0));
    /// assert_eq!(body.radius(), 2.0);
    /// assert!(body.is_movable());
    /// ```
    pub fn new(mass: f64, position: Point2<f64>, velocity: Vector2<f64>) -> Self {
        Self {
            position,
            velocity,
            mass,
            radius: radius_for_mass(mass),
            force: Vector2::zeros(),
            movable: true,
            speed: 0.0,
        }
    }

    /// Creates a body that never integrates (an anchor)
    pub fn fixed(mass: f64, position: Point2<f64>) -> Self {
        Self::new(mass, position, Vector2::zeros()).with_movable(false)
    }

    pub fn with_movable(mut self, movable: bool) -> Self {
        self.movable = movable;
        self
    }

    pub fn position(&self) -> Point2<f64> {
        self.position
    }

    pub fn velocity(&self) -> Vector2<f64> {
        self.velocity
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Force accumulated during the current step
    pub fn force(&self) -> Vector2<f64> {
        self.force
    }

    /// Speed recorded by the last integration (0 for fixed bodies)
    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_movable(&self) -> bool {
        self.movable
    }

    /// Whether the body has mass to attract and be accelerated with
    pub fn is_massive(&self) -> bool {
        self.mass > 0.0
    }

    /// Whether the mass and kinematic state are all finite
    pub fn is_finite(&self) -> bool {
        self.mass.is_finite()
            && self.position.iter().all(|c| c.is_finite())
            && self.velocity.iter().all(|c| c.is_finite())
    }

    /// Massive and finite: the body takes part in force, collision and
    /// integration passes
    pub fn is_active(&self) -> bool {
        self.is_massive() && self.is_finite()
    }

    /// Sets the mass and recomputes the radius
    ///
    /// Zero is accepted (the body then sits out of every pass until it
    /// regains mass); negative or non-finite values are rejected.
    pub fn set_mass(&mut self, mass: f64) -> Result<(), SimulationError> {
        if !mass.is_finite() || mass < 0.0 {
            return Err(SimulationError::InvalidMass { mass });
        }
        self.mass = mass;
        self.radius = radius_for_mass(mass);
        Ok(())
    }

    pub fn set_movable(&mut self, movable: bool) {
        self.movable = movable;
        if !movable {
            self.speed = 0.0;
        }
    }

    /// Replaces the velocity; non-finite components are rejected
    pub fn set_velocity(&mut self, velocity: Vector2<f64>) -> Result<(), SimulationError> {
        if !velocity.iter().all(|c| c.is_finite()) {
            return Err(SimulationError::NonFinite { field: "velocity" });
        }
        self.velocity = velocity;
        Ok(())
    }

    /// Adds a force to this step's accumulator
    pub fn apply_force(&mut self, force: Vector2<f64>) {
        self.force += force;
    }

    pub fn reset_force(&mut self) {
        self.force = Vector2::zeros();
    }

    /// Advances the body by one unit timestep using explicit Euler
    ///
    /// Velocity is updated first and the new velocity moves the position.
    /// Returns `false` without touching the body when it is fixed, inactive,
    /// or when the step would leave it with a non-finite velocity or
    /// position (an overflowing force).
    ///
    /// # Examples
    ///
    /// ```
    /// use orbits::body::Body;
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let mut body = Body::new(2.0, Point2::new(0.0, 0.0), Vector2::new(1.0, 0.0));
    /// body.apply_force(Vector2::new(0.0, 4.0));
    /// assert!(body.integrate());
    ///
    /// assert_eq!(body.velocity(), Vector2::new(1.0, 2.0));
    /// assert_eq!(body.position(), Point2::new(1.0, 2.0));
    /// ```
    pub fn integrate(&mut self) -> bool {
        if !self.movable || !self.is_active() {
            return false;
        }
        let velocity = self.velocity + self.force / self.mass;
        let position = self.position + velocity;
        if !velocity.iter().chain(position.iter()).all(|c| c.is_finite()) {
            return false;
        }
        self.velocity = velocity;
        self.speed = velocity.magnitude();
        self.position = position;
        true
    }

    /// Merges `other` into this body in a perfectly inelastic collision
    ///
    /// Momentum and mass are conserved; kinetic energy is not. The merged
    /// body keeps this body's position and movable flag, and takes over any
    /// force `other` had accumulated this step.
    ///
    /// # Examples
    ///
    /// ```
    /// use orbits::body::Body;
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let mut a = Body::new(20.0, Point2::new(0.0, 0.0), Vector2::new(1.0, 0.0));
    /// let b = Body::new(10.0, Point2::new(1.0, 0.0), Vector2::new(-2.0, 0.0));
    /// a.absorb(&b);
    ///
    /// assert_eq!(a.mass(), 30.0);
    /// assert_eq!(a.velocity(), Vector2::new(0.0, 0.0));
    /// ```
    pub fn absorb(&mut self, other: &Body) {
        let total_mass = self.mass + other.mass;
        if total_mass > 0.0 {
            self.velocity = (self.momentum() + other.momentum()) / total_mass;
        }
        self.mass = total_mass;
        self.radius = radius_for_mass(total_mass);
        self.force += other.force;
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.position - other.position).magnitude()
    }

    /// Checks that a body is fit to join a running simulation
    pub(crate) fn validate(&self) -> Result<(), SimulationError> {
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(SimulationError::InvalidMass { mass: self.mass });
        }
        if !(self.position.x.is_finite() && self.position.y.is_finite()) {
            return Err(SimulationError::NonFinite { field: "position" });
        }
        if !(self.velocity.x.is_finite() && self.velocity.y.is_finite()) {
            return Err(SimulationError::NonFinite { field: "velocity" });
        }
        Ok(())
    }
}
