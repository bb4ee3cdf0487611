//! Forces acting between bodies
//!
//! Only Newtonian attraction is modelled. The gravitational constant is a
//! free parameter of the simulation rather than a physical constant, since
//! positions and masses are in arbitrary display units.

pub mod gravity;


pub use gravity::Gravity;

/// Gravitational constant used when none is configured
pub const DEFAULT_G: f64 = 0.3;

/// Upper bound accepted for G in scenarios
pub const MAX_G: f64 = 3.0;
