//! Goals
//!
//! There is no serve after a goal: the ball comes straight back in from the
//! edge it left through, a little faster.

use log::info;
use rand::Rng;

use super::dimension::ParticleKind;
use super::events::{EventKind, GameEvent};
use super::state::{Arena, Ball, Score, Side};
use crate::consts::*;

/// Which goal the ball has fully left through, if any
pub fn exit_side(ball: &Ball, arena: &Arena) -> Option<Side> {
    if ball.pos.x - ball.radius > arena.width {
        Some(Side::Right)
    } else if ball.pos.x + ball.radius < 0.0 {
        Some(Side::Left)
    } else {
        None
    }
}

/// Award the goal and bounce the ball back into play. Returns the scorer.
pub fn check<R: Rng + ?Sized>(
    ball: &mut Ball,
    score: &mut Score,
    arena: &Arena,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) -> Option<Side> {
    let exit = exit_side(ball, arena)?;
    let scorer = exit.opponent();
    score.increment(scorer);

    // Flush inside the goal line, heading back into the court
    let inward = exit.toward_opponent();
    ball.pos.x = match exit {
        Side::Right => arena.width - ball.radius,
        Side::Left => ball.radius,
    };
    ball.vel.x = inward * ball.vel.x.abs() * SCORE_RETURN_FACTOR;
    ball.vel.y += (rng.random::<f32>() - 0.5) * SCORE_VERTICAL_JITTER;
    ball.clamp_speed(MAX_BALL_SPEED);

    info!(
        "{:?} scores, {} - {}",
        scorer, score.left, score.right
    );
    events.push(GameEvent::new(
        EventKind::Score { scorer },
        ball.pos,
        ParticleKind::Fire,
        15,
    ));
    Some(scorer)
}
