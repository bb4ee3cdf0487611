use std::time::Duration;

use nalgebra::Vector2;
use tracing::{debug, warn};

use crate::body::Body;
use crate::collisions::{CollisionEvent, check_pair, resolve_collisions};
use crate::error::SimulationError;
use crate::forces::Gravity;
use crate::telemetry::{FarthestPair, Telemetry, frames_per_second};
use crate::vector::Vector;

/// A set of bodies attracting and merging with one another
///
/// The simulation is a plain step function: an external driver calls
/// [`Simulation::step`] once per frame and may add bodies or change
/// parameters in between. The borrow on `&mut self` keeps the collection
/// from being touched while a step runs.
#[derive(Debug, Clone)]
pub struct Simulation {
    bodies: Vec<Body>,
    gravity: Gravity,
    frame: u64,
    collision_count: u64,
    fastest_speed: f64,
    farthest: Option<FarthestPair>,
    telemetry: Telemetry,
}

impl Simulation {
    /// Creates an empty simulation with the default gravitational constant
    ///
    /// # Examples
    ///
    /// ```
    /// use orbits::simulation::Simulation;
    /// use orbits::forces::DEFAULT_G;
    ///
    /// let sim = Simulation::new();
    /// assert_eq!(sim.g(), DEFAULT_G);
    /// assert!(sim.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            gravity: Gravity::default(),
            frame: 0,
            collision_count: 0,
            fastest_speed: 0.0,
            farthest: None,
            telemetry: Telemetry::default(),
        }
    }

    /// Creates an empty simulation with the given gravitational constant
    pub fn with_g(g: f64) -> Result<Self, SimulationError> {
        let mut sim = Self::new();
        sim.set_g(g)?;
        Ok(sim)
    }

    /// Appends a body and returns its index
    ///
    /// The body must already have its final, positive mass and finite
    /// position and velocity. It takes part from the next step on.
    ///
    /// # Examples
    ///
    /// ```
    /// use orbits::body::Body;
    /// use orbits::simulation::Simulation;
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let mut sim = Simulation::new();
    /// let idx = sim.add(Body::new(5.0, Point2::new(1.0, 0.0), Vector2::zeros())).unwrap();
    /// assert_eq!(idx, 0);
    ///
    /// // Bodies still being sized are refused
    /// let pending = Body::new(0.0, Point2::new(2.0, 0.0), Vector2::zeros());
    /// assert!(sim.add(pending).is_err());
    /// assert_eq!(sim.body_count(), 1);
    /// ```
    pub fn add(&mut self, body: Body) -> Result<usize, SimulationError> {
        if let Err(err) = body.validate() {
            warn!(error = %err, "rejected body");
            return Err(err);
        }
        self.bodies.push(body);
        Ok(self.bodies.len() - 1)
    }

    /// Changes the gravitational constant for all following steps
    pub fn set_g(&mut self, g: f64) -> Result<(), SimulationError> {
        if !g.is_finite() {
            return Err(SimulationError::InvalidGravitationalConstant { value: g });
        }
        self.gravity.g = g;
        Ok(())
    }

    pub fn g(&self) -> f64 {
        self.gravity.g
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, idx: usize) -> Option<&Body> {
        self.bodies.get(idx)
    }

    /// Mutable access for live parameter changes (mass, fixed flag)
    ///
    /// Indices shift when bodies merge, so they are only stable between
    /// two steps.
    pub fn body_mut(&mut self, idx: usize) -> Option<&mut Body> {
        self.bodies.get_mut(idx)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Number of steps taken so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Number of merges resolved so far
    pub fn collision_count(&self) -> u64 {
        self.collision_count
    }

    /// Snapshot published by the most recent step
    pub fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(Body::mass).sum()
    }

    pub fn total_momentum(&self) -> Vector2<f64> {
        self.bodies
            .iter()
            .map(Body::momentum)
            .fold(Vector2::zeros(), |acc, p| acc + p)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    pub fn potential_energy(&self) -> f64 {
        self.gravity.potential_energy(&self.bodies)
    }

    /// Advances the simulation by one frame
    ///
    /// Runs, in order:
    /// 1. Reset force accumulators and per-frame telemetry
    /// 2. Accumulate pairwise gravity and record overlapping pairs
    /// 3. Merge overlapping pairs and compact the collection
    /// 4. Integrate every remaining body
    ///
    /// Massless or non-finite bodies sit out of every phase. A body whose
    /// accumulated force would carry it to a non-finite state is held in
    /// place for the step instead of being corrupted.
    ///
    /// `elapsed` is the wall time since the previous frame and only feeds
    /// the fps figure; the physics always advances by one unit step.
    ///
    /// # Examples
    ///
    /// ```
    /// use orbits::body::Body;
    /// use orbits::simulation::Simulation;
    /// use nalgebra::{Point2, Vector2};
    /// use std::time::Duration;
    ///
    /// let mut sim = Simulation::with_g(1.0).unwrap();
    /// sim.add(Body::new(1000.0, Point2::new(0.0, 0.0), Vector2::zeros())).unwrap();
    /// sim.add(Body::new(1.0, Point2::new(20.0, 0.0), Vector2::zeros())).unwrap();
    ///
    /// let telemetry = sim.step(Duration::from_millis(16));
    ///
    /// assert_eq!(telemetry.frame, 1);
    /// assert_eq!(telemetry.body_count, 2);
    /// // The light body falls toward the heavy one at G * 1000 / 20²
    /// assert!((sim.bodies()[1].velocity().x + 2.5).abs() < 1e-9);
    /// ```
    pub fn step(&mut self, elapsed: Duration) -> Telemetry {
        self.fastest_speed = 0.0;
        self.farthest = None;
        self.bodies.iter_mut().for_each(Body::reset_force);

        let inactive = self.bodies.iter().filter(|b| !b.is_active()).count();
        if inactive > 0 {
            warn!(inactive, "excluding massless or non-finite bodies from step");
        }

        let events = self.accumulate_forces();

        let mergers = resolve_collisions(&mut self.bodies, events);
        self.collision_count += mergers.len() as u64;

        let mut held = 0;
        for body in &mut self.bodies {
            if body.integrate() {
                self.fastest_speed = self.fastest_speed.max(body.speed());
            } else if body.is_movable() && body.is_active() {
                held += 1;
            }
        }
        if held > 0 {
            warn!(held, "force overflowed; bodies held in place this step");
        }

        self.frame += 1;
        self.telemetry = Telemetry {
            frame: self.frame,
            fps: frames_per_second(elapsed),
            body_count: self.bodies.len(),
            collision_count: self.collision_count,
            fastest_speed: self.fastest_speed,
            farthest: self.farthest,
        };

        debug!(
            frame = self.frame,
            bodies = self.bodies.len(),
            merged = mergers.len(),
            fastest = self.fastest_speed,
            "step complete"
        );

        self.telemetry.clone()
    }

    /// Fills force accumulators and returns the overlapping pairs
    ///
    /// Every ordered pair is visited, so each body sums the pull of all the
    /// others without any reciprocal bookkeeping. Overlapping pairs get no
    /// force and are reported once, from the lower index.
    fn accumulate_forces(&mut self) -> Vec<CollisionEvent> {
        let n = self.bodies.len();
        let mut events = Vec::new();
        let mut farthest: Option<FarthestPair> = None;

        for s in 0..n {
            if !self.bodies[s].is_active() {
                continue;
            }

            let mut total = Vector2::zeros();
            for o in 0..n {
                if s == o || !self.bodies[o].is_active() {
                    continue;
                }

                let (subject, object) = (&self.bodies[s], &self.bodies[o]);
                let separation = Vector::between(object.position(), subject.position());

                let longest = farthest.map_or(0.0, |f| f.vector.magnitude);
                if separation.magnitude > longest {
                    farthest = Some(FarthestPair {
                        object: o,
                        subject: s,
                        vector: separation,
                    });
                }

                match check_pair(s, subject, o, object, separation.magnitude) {
                    None => total += self.gravity.force_on(subject, object, &separation),
                    Some(event) if s < o => events.push(event),
                    Some(_) => {}
                }
            }

            self.bodies[s].apply_force(total);
        }

        self.farthest = farthest;
        events
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
