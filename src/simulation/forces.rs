//! Spring force model
//!
//! A single pure function evaluates the force a damped Hooke spring exerts
//! on one of its endpoints. Both bodies of the chain and the fixed origin
//! are wired through it by the integrator

use crate::simulation::states::NVec2;

/// Force on the body at `self_pos` from a spring connecting it to `other_pos`
///
/// `diff = self_pos - other_pos` points from the other endpoint toward the
/// body. With `extension = rest_length - |diff|` (positive when compressed)
/// the spring term `normalize(diff) * stiffness * extension` pushes the body
/// away when compressed and pulls it back when stretched. The damping term
/// `self_vel * damping` opposes the body's current motion
///
/// Coincident endpoints have no defined direction; the force is zero
pub fn spring_force(
    self_pos: NVec2,
    other_pos: NVec2,
    self_vel: NVec2,
    rest_length: f64,
    stiffness: f64,
    damping: f64,
) -> NVec2 {
    // diff points from other to self
    let diff = self_pos - other_pos;

    let current_length = diff.norm();
    if current_length == 0.0 {
        return NVec2::zeros();
    }

    let extension = rest_length - current_length;

    let spring = (diff / current_length) * stiffness * extension;
    let damping_force = self_vel * damping;

    spring - damping_force
}
