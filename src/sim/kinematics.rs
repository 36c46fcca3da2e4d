//! Ball integration under the active dimension

use super::dimension::Dimension;
use super::state::Ball;
use crate::consts::*;

/// Apply gravity, friction and the anti-degeneracy rules, clamp to the speed
/// ceiling, then move the ball and record its trail.
pub fn integrate(ball: &mut Ball, dimension: &Dimension, dt: f32) {
    let mut vel = ball.vel;
    vel.y += dimension.gravity * dt;
    vel *= dimension.friction;

    // Horizontal floor; exact zero counts as positive
    if vel.x.abs() < MIN_BALL_SPEED_X {
        vel.x = MIN_BALL_SPEED_X.copysign(vel.x);
    }

    // Break vertical loops
    if vel.y.abs() / vel.x.abs() > MAX_VERTICALITY {
        vel.x *= VERTICALITY_KICK;
    }

    ball.set_velocity(vel, MAX_BALL_SPEED);
    ball.pos += ball.vel * dt;
    ball.record_trail(dimension.trail_length);
}
