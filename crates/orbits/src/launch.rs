//! Interactive body creation
//!
//! A pointer gesture builds a body in two drags: the first sizes it, the
//! second pulls back a rubber band that sets its launch velocity. The
//! finished body is handed to [`Simulation::add`]; nothing else in the
//! simulation is touched. Pointer positions are expected in world
//! coordinates, any display scaling having been undone by the caller.
//!
//! ```text
//! Idle --press--> PlacingSize --release--> PlacingVelocity --release--> Launched
//!                  (drag: mass)             (press, drag: velocity)
//! ```

use std::mem;

use nalgebra::{Point2, Vector2};

use crate::body::Body;
use crate::error::SimulationError;
use crate::simulation::Simulation;
use crate::vector::Vector;

/// Mass given to a body released without being sized
pub const DEFAULT_LAUNCH_MASS: f64 = 500.0;

/// Drag distance per unit of radius while sizing
const SIZE_DRAG_SCALE: f64 = 3.0;

const VELOCITY_EXPONENT: f64 = 1.1;
const VELOCITY_SCALE: f64 = 75.0;

#[derive(Debug, Clone, PartialEq)]
pub enum LaunchState {
    /// Waiting for a press to place a new body
    Idle,
    /// Dragging out the size of a body placed at `anchor`
    PlacingSize { body: Body, anchor: Point2<f64> },
    /// Sized; `band` is the rubber band while the velocity drag is held
    PlacingVelocity { body: Body, band: Option<Vector> },
    /// The body was added to the simulation at `index`
    Launched { index: usize },
}

/// Mass for a body sized by dragging `drag` units away from its centre
///
/// # Examples
///
/// ```
/// use orbits::launch::mass_from_drag;
///
/// assert_eq!(mass_from_drag(6.0), 8.0);
/// ```
pub fn mass_from_drag(drag: f64) -> f64 {
    (drag / SIZE_DRAG_SCALE).powi(3)
}

/// Launch velocity for a body at `position` pulled back to `pointer`
///
/// The body flies away from the pointer, faster than linearly with the
/// pull distance on each axis.
pub fn launch_velocity(position: Point2<f64>, pointer: Point2<f64>) -> Vector2<f64> {
    let pull = position - pointer;
    pull.map(|d| {
        if d == 0.0 {
            0.0
        } else {
            d.signum() * d.abs().powf(VELOCITY_EXPONENT) / VELOCITY_SCALE
        }
    })
}

/// Drives one body at a time through the creation gesture
#[derive(Debug, Clone)]
pub struct Launcher {
    state: LaunchState,
}

impl Launcher {
    pub fn new() -> Self {
        Self {
            state: LaunchState::Idle,
        }
    }

    pub fn state(&self) -> &LaunchState {
        &self.state
    }

    /// Body being built, if any
    pub fn pending(&self) -> Option<&Body> {
        match &self.state {
            LaunchState::PlacingSize { body, .. } | LaunchState::PlacingVelocity { body, .. } => {
                Some(body)
            }
            LaunchState::Idle | LaunchState::Launched { .. } => None,
        }
    }

    /// Pointer pressed at `at`
    ///
    /// Starts a new body when idle, or grabs the rubber band of a sized
    /// body. Returns `false` when the press means nothing in this state.
    pub fn press(&mut self, at: Point2<f64>) -> bool {
        match &mut self.state {
            LaunchState::Idle | LaunchState::Launched { .. } => {
                self.state = LaunchState::PlacingSize {
                    body: Body::new(0.0, at, Vector2::zeros()),
                    anchor: at,
                };
                true
            }
            LaunchState::PlacingVelocity { body, band } if band.is_none() => {
                *band = Some(Vector::between(body.position(), body.position()));
                true
            }
            _ => false,
        }
    }

    /// Pointer moved to `at` with the button held
    pub fn drag(&mut self, at: Point2<f64>) -> Result<bool, SimulationError> {
        match &mut self.state {
            LaunchState::PlacingSize { body, anchor } => {
                body.set_mass(mass_from_drag((at - *anchor).magnitude()))?;
                Ok(true)
            }
            LaunchState::PlacingVelocity {
                body,
                band: Some(band),
            } => {
                body.set_velocity(launch_velocity(body.position(), at))?;
                *band = Vector::between(body.position(), at);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Pointer released
    ///
    /// Finishing the size drag moves on to the velocity drag; finishing the
    /// velocity drag adds the body to `sim` and returns its index. If the
    /// simulation refuses the body the gesture is dropped and the launcher
    /// goes back to idle.
    pub fn release(&mut self, sim: &mut Simulation) -> Result<Option<usize>, SimulationError> {
        match mem::replace(&mut self.state, LaunchState::Idle) {
            LaunchState::PlacingSize { mut body, .. } => {
                if !body.is_massive() {
                    body.set_mass(DEFAULT_LAUNCH_MASS)?;
                }
                self.state = LaunchState::PlacingVelocity { body, band: None };
                Ok(None)
            }
            LaunchState::PlacingVelocity {
                body,
                band: Some(_),
            } => {
                let index = sim.add(body)?;
                self.state = LaunchState::Launched { index };
                Ok(Some(index))
            }
            other => {
                self.state = other;
                Ok(None)
            }
        }
    }

    /// Abandons the body being built
    pub fn cancel(&mut self) {
        self.state = LaunchState::Idle;
    }
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new()
    }
}
