//! Scripted opponent
//!
//! Pure steering function: reads the ball and its own paddle, returns the
//! velocities to apply. Only the jitter draws from the RNG.

use rand::Rng;

use super::state::{Arena, Ball, Paddle};
use crate::consts::*;

/// Velocities chosen by the AI for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiCommand {
    pub vertical: f32,
    /// `None` leaves the horizontal velocity as it was
    pub horizontal: Option<f32>,
}

/// Plan the paddle's motion. `difficulty` in [0, 1] scales prediction,
/// speed and accuracy.
pub fn plan<R: Rng + ?Sized>(
    ball: &Ball,
    paddle: &Paddle,
    arena: &Arena,
    difficulty: f32,
    rng: &mut R,
) -> AiCommand {
    let side = paddle.side;
    let mut target_y = ball.pos.y - paddle.size.y / 2.0;
    let mut horizontal = None;

    // Ball heading at us: predict, reposition, wobble
    let approach_speed = -ball.vel.x * side.toward_opponent();
    if approach_speed > 0.0 {
        let time_to_intercept = (paddle.front_x() - ball.pos.x) / ball.vel.x;
        target_y = ball.pos.y + ball.vel.y * time_to_intercept * difficulty - paddle.size.y / 2.0;

        let in_own_half = (ball.pos.x - arena.width / 2.0) * side.toward_opponent() < 0.0;
        let standoff = if difficulty > AI_AGGRESSIVE_DIFFICULTY
            && approach_speed > AI_FAST_BALL_SPEED
            && in_own_half
        {
            AI_STANDOFF_AGGRESSIVE
        } else {
            AI_STANDOFF
        };
        let optimal_x = paddle.home_x() + side.toward_opponent() * standoff;
        let dx = optimal_x - paddle.pos.x;
        horizontal = Some(if dx.abs() > AI_DEAD_ZONE_X {
            dx.signum() * paddle.max_speed.x * difficulty
        } else {
            0.0
        });

        target_y += (rng.random::<f32>() - 0.5) * paddle.size.y * (1.0 - difficulty);
    }

    let dy = target_y - paddle.pos.y;
    let vertical = if dy.abs() > AI_DEAD_ZONE_Y {
        dy.signum() * paddle.max_speed.y * difficulty
    } else {
        0.0
    };

    AiCommand {
        vertical,
        horizontal,
    }
}

/// Apply a plan to the paddle velocity
pub fn apply(paddle: &mut Paddle, command: AiCommand) {
    paddle.vel.y = command.vertical;
    if let Some(horizontal) = command.horizontal {
        paddle.vel.x = horizontal;
    }
}
