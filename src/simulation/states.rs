//! Core state types for the spring-chain simulation.
//!
//! Defines the body/system structs:
//! - `Body` holds position and velocity using `NVec2`
//! - `System` holds the two-body chain: origin -> body1 -> body2
//!
//! Coordinates are in pixels with +y pointing down, so gravity is a positive
//! y acceleration. The anchor sits at the origin and never moves.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub position: NVec2, // position, pixels
    pub velocity: NVec2, // velocity, pixels per step
}

#[derive(Debug, Clone)]
pub struct System {
    pub body1: Body, // hangs from the fixed origin
    pub body2: Body, // hangs from body1
}

impl System {
    /// Place the chain at rest along +x: body1 at `(length1, 0)`, body2 at
    /// `(length1 + length2, 0)`, both with zero velocity. Used for the
    /// initial state and for every restart.
    pub fn initialize(length1: f64, length2: f64) -> Self {
        Self {
            body1: Body {
                position: NVec2::new(length1, 0.0),
                velocity: NVec2::zeros(),
            },
            body2: Body {
                position: NVec2::new(length1 + length2, 0.0),
                velocity: NVec2::zeros(),
            },
        }
    }
}
