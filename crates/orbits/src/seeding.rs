//! Random body fields
//!
//! Scatters a swarm of small bodies over a rectangle with random drift.
//! Generation is driven by a seeded ChaCha generator, so a given seed always
//! yields the same field.

use nalgebra::{Point2, Vector2};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use serde::Deserialize;

use crate::body::Body;
use crate::error::SimulationError;

/// Parameters of a random field
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RandomField {
    pub count: usize,
    pub width: f64,
    pub height: f64,
    pub min_mass: f64,
    pub max_mass: f64,
    /// Bound on each velocity component, in either direction
    pub max_speed: f64,
    pub seed: u64,
}

impl Default for RandomField {
    fn default() -> Self {
        Self {
            count: 999,
            width: 800.0,
            height: 600.0,
            min_mass: 1.0,
            max_mass: 21.0,
            max_speed: 10.0,
            seed: 0,
        }
    }
}

impl RandomField {
    pub fn validate(&self) -> Result<(), SimulationError> {
        let finite = [self.width, self.height, self.min_mass, self.max_mass, self.max_speed]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(SimulationError::config("random field values must be finite"));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(SimulationError::config("random field needs a non-empty area"));
        }
        if self.min_mass <= 0.0 || self.max_mass <= self.min_mass {
            return Err(SimulationError::config(format!(
                "random field mass range [{}, {}) is empty or not positive",
                self.min_mass, self.max_mass
            )));
        }
        if self.max_speed < 0.0 {
            return Err(SimulationError::config("random field max_speed must not be negative"));
        }
        Ok(())
    }

    /// Generates the bodies of this field
    ///
    /// # Examples
    ///
    /// ```
    /// use orbits::seeding::RandomField;
    ///
    /// let field = RandomField { count: 10, seed: 42, ..RandomField::default() };
    /// let bodies = field.generate().unwrap();
    ///
    /// assert_eq!(bodies.len(), 10);
    /// assert_eq!(bodies, field.generate().unwrap());
    /// ```
    pub fn generate(&self) -> Result<Vec<Body>, SimulationError> {
        self.validate()?;
        let mut rng = ChaChaRng::seed_from_u64(self.seed);
        Ok((0..self.count).map(|_| self.sample(&mut rng)).collect())
    }

    fn sample(&self, rng: &mut ChaChaRng) -> Body {
        let mass = rng.gen_range(self.min_mass..self.max_mass);
        let velocity = if self.max_speed > 0.0 {
            Vector2::new(
                rng.gen_range(-self.max_speed..self.max_speed),
                rng.gen_range(-self.max_speed..self.max_speed),
            )
        } else {
            Vector2::zeros()
        };
        let position = Point2::new(
            rng.gen_range(0.0..self.width),
            rng.gen_range(0.0..self.height),
        );
        Body::new(mass, position, velocity)
    }
}
