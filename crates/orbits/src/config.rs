//! Scenario configuration loaded from YAML
//!
//! A scenario describes the starting state of a simulation:
//!
//! - [`Scenario`]     – gravitational constant plus the bodies below
//! - [`AnchorConfig`] – an optional heavy body, fixed in place by default
//! - [`BodyConfig`]   – explicit bodies with their initial state
//! - [`RandomField`]  – an optional seeded swarm of small bodies
//!
//! # YAML format
//!
//! ```yaml
//! g: 0.3
//! anchor:
//!   mass: 20000.0
//!   position: [400.0, 300.0]
//!   movable: false
//! bodies:
//!   - position: [500.0, 300.0]
//!     velocity: [0.0, 0.8]
//!     mass: 8.0
//! random:
//!   count: 200
//!   width: 800.0
//!   height: 600.0
//!   seed: 7
//! ```
//!
//! Every key is optional. Leaving out `anchor` keeps the default anchor;
//! `anchor: null` removes it.

use nalgebra::{Point2, Vector2};
use serde::Deserialize;
use tracing::info;

use crate::body::Body;
use crate::error::SimulationError;
use crate::forces::{DEFAULT_G, MAX_G};
use crate::seeding::RandomField;
use crate::simulation::Simulation;

/// Largest mass accepted for the anchor body
pub const MAX_ANCHOR_MASS: f64 = 100_000.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    pub mass: f64,
    pub position: [f64; 2],
    pub movable: bool,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            mass: 20_000.0,
            position: [400.0, 300.0],
            movable: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BodyConfig {
    pub position: [f64; 2],
    #[serde(default)]
    pub velocity: [f64; 2],
    pub mass: f64,
    #[serde(default = "default_movable")]
    pub movable: bool,
}

fn default_movable() -> bool {
    true
}

impl From<&BodyConfig> for Body {
    fn from(config: &BodyConfig) -> Self {
        Body::new(
            config.mass,
            Point2::from(config.position),
            Vector2::from(config.velocity),
        )
        .with_movable(config.movable)
    }
}

/// Top-level scenario
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub g: f64,
    pub anchor: Option<AnchorConfig>,
    pub bodies: Vec<BodyConfig>,
    pub random: Option<RandomField>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            g: DEFAULT_G,
            anchor: Some(AnchorConfig::default()),
            bodies: Vec::new(),
            random: None,
        }
    }
}

impl Scenario {
    /// Parses a scenario from YAML text
    ///
    /// # Examples
    ///
    /// ```
    /// use orbits::config::Scenario;
    ///
    /// let scenario = Scenario::from_yaml_str("g: 1.5\nanchor: null\n").unwrap();
    /// assert_eq!(scenario.g, 1.5);
    /// assert!(scenario.anchor.is_none());
    /// ```
    pub fn from_yaml_str(source: &str) -> Result<Self, SimulationError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Checks the scenario-level bounds
    ///
    /// Individual bodies are checked when they are added to the simulation.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(0.0..=MAX_G).contains(&self.g) {
            return Err(SimulationError::InvalidGravitationalConstant { value: self.g });
        }
        if let Some(anchor) = &self.anchor {
            if !(anchor.mass > 0.0 && anchor.mass <= MAX_ANCHOR_MASS) {
                return Err(SimulationError::InvalidMass { mass: anchor.mass });
            }
        }
        if let Some(field) = &self.random {
            field.validate()?;
        }
        Ok(())
    }

    /// Builds a simulation holding the anchor, then the listed bodies,
    /// then the random field, in that order
    ///
    /// # Examples
    ///
    /// ```
    /// use orbits::config::Scenario;
    ///
    /// let scenario = Scenario::from_yaml_str(
    ///     "bodies:\n  - position: [100.0, 100.0]\n    mass: 8.0\n",
    /// )
    /// .unwrap();
    /// let sim = scenario.build().unwrap();
    ///
    /// assert_eq!(sim.body_count(), 2);
    /// assert!(!sim.bodies()[0].is_movable());
    /// ```
    pub fn build(&self) -> Result<Simulation, SimulationError> {
        self.validate()?;
        let mut sim = Simulation::with_g(self.g)?;

        if let Some(anchor) = &self.anchor {
            let body = Body::fixed(anchor.mass, Point2::from(anchor.position))
                .with_movable(anchor.movable);
            sim.add(body)?;
        }

        for config in &self.bodies {
            sim.add(Body::from(config))?;
        }

        if let Some(field) = &self.random {
            for body in field.generate()? {
                sim.add(body)?;
            }
        }

        info!(
            g = sim.g(),
            bodies = sim.body_count(),
            total_mass = sim.total_mass(),
            "scenario built"
        );
        Ok(sim)
    }
}
