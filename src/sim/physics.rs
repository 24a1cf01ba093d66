//! Bird physics
//!
//! Semi-implicit Euler with a unit timestep: velocity first, then position.

use super::state::Bird;

/// Advance the bird by one tick under gravity
#[inline]
pub fn integrate(bird: &mut Bird, gravity: f32) {
    bird.vy += gravity;
    bird.pos.y += bird.vy;
}

/// Flap: velocity is set, not added, so rapid flaps never stack
#[inline]
pub fn apply_impulse(bird: &mut Bird, flap_velocity: f32) {
    bird.vy = flap_velocity;
}
