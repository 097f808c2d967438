//! Fixed-step time integrator for the spring chain
//!
//! Explicit Euler in velocity-then-position order: forces are evaluated from
//! the pre-step state, both velocities are advanced, then both positions are
//! advanced using the fresh velocities. Changing this ordering changes the
//! stability of the scheme, so it is part of the behavior contract

use super::states::{System, NVec2};
use super::forces::spring_force;
use super::params::Parameters;

/// Advance the system by one step with `dt = params.sim_speed`
///
/// Three spring forces are evaluated per step:
/// - origin spring acting on body1
/// - middle spring acting on body1, damped by body1's own coefficient
/// - middle spring acting on body2, damped by body2's coefficient
///
/// Gravity adds `(0, gravity)` to both accelerations (+y points down).
/// Parameters are read fresh on every call; nothing is cached between steps
pub fn euler_step(sys: &mut System, params: &Parameters) {
    let origin = NVec2::zeros();

    // All three forces see the same pre-step positions and velocities
    let f_origin_to_1 = spring_force(
        sys.body1.position,
        origin,
        sys.body1.velocity,
        params.length1,
        params.stiffness1,
        params.damping1,
    );

    let f_2_to_1 = spring_force(
        sys.body1.position,
        sys.body2.position,
        sys.body1.velocity,
        params.length2,
        params.stiffness2,
        params.damping1, // both forces on body1 are damped by damping1
    );

    let f_1_to_2 = spring_force(
        sys.body2.position,
        sys.body1.position,
        sys.body2.velocity,
        params.length2,
        params.stiffness2,
        params.damping2,
    );

    let gravity = NVec2::new(0.0, params.gravity);

    // a1 = (f1 + f2) / m1 + g, a2 = f3 / m2 + g
    let a1 = (f_origin_to_1 + f_2_to_1) / params.mass1 + gravity;
    let a2 = f_1_to_2 / params.mass2 + gravity;

    let dt = params.sim_speed;

    // Kick both velocities, then drift both positions with the new velocities
    sys.body1.velocity += a1 * dt;
    sys.body2.velocity += a2 * dt;

    sys.body1.position += sys.body1.velocity * dt;
    sys.body2.position += sys.body2.velocity * dt;
}
