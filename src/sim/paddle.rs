//! Paddle control resolution
//!
//! Turns resolved intents into paddle velocity and integrates position.

use super::input::SideIntent;
use super::state::{Arena, Paddle};
use crate::consts::{PADDLE_DECAY, PADDLE_STOP_SPEED};

/// Velocity for one axis. A held direction snaps to full speed; otherwise the
/// velocity decays once per call and snaps to zero when small.
#[inline]
pub fn resolve_axis(current: f32, direction: Option<f32>, max_speed: f32) -> f32 {
    match direction {
        Some(dir) => dir * max_speed,
        None => {
            let decayed = current * PADDLE_DECAY;
            if decayed.abs() < PADDLE_STOP_SPEED {
                0.0
            } else {
                decayed
            }
        }
    }
}

/// Apply human intents to the paddle velocity
pub fn steer(paddle: &mut Paddle, intent: &SideIntent) {
    paddle.vel.y = resolve_axis(paddle.vel.y, intent.vertical.axis(), paddle.max_speed.y);
    paddle.vel.x = resolve_axis(paddle.vel.x, intent.horizontal.axis(), paddle.max_speed.x);
}

/// Integrate position and clamp to the arena and the own half
pub fn integrate(paddle: &mut Paddle, arena: &Arena, dt: f32) {
    paddle.pos += paddle.vel * dt;
    paddle.clamp_to(arena);
}
