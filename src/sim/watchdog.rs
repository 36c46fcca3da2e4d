//! Stuck-ball watchdog
//!
//! Gravity dimensions can leave the ball skidding along the floor. Time spent
//! in the band just above the floor accumulates; past the threshold the ball
//! is blasted back up.

use glam::Vec2;
use log::warn;
use rand::Rng;

use super::collision::WallContact;
use super::dimension::ParticleKind;
use super::events::{EventKind, GameEvent};
use super::state::{Arena, Ball};
use crate::consts::*;

/// The ball is at or near the floor
pub fn in_floor_band(ball: &Ball, arena: &Arena) -> bool {
    ball.pos.y >= arena.height - ball.radius * STUCK_BAND_RADII
}

/// Update the stuck timer for this frame's wall contact
pub fn track(timer: &mut f32, ball: &Ball, arena: &Arena, contact: WallContact, dt: f32) {
    if contact == WallContact::Top || !in_floor_band(ball, arena) {
        *timer = 0.0;
    } else {
        *timer += dt;
    }
}

/// Launch the ball if it overstayed
pub fn recover<R: Rng + ?Sized>(
    timer: &mut f32,
    screen_shake: &mut f32,
    ball: &mut Ball,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    if *timer <= STUCK_THRESHOLD {
        return;
    }

    let vy = -(STUCK_LAUNCH_SPEED + rng.random::<f32>() * STUCK_LAUNCH_SPREAD);
    let vel = Vec2::new(ball.vel.x * STUCK_KICK_X, vy);
    ball.set_velocity(vel, MAX_BALL_SPEED);

    warn!(
        "ball stuck near the floor for {:.2}s, relaunching at ({:.0}, {:.0})",
        *timer, ball.vel.x, ball.vel.y
    );

    *timer = 0.0;
    *screen_shake = SCREEN_SHAKE_KICK;
    events.push(GameEvent::new(
        EventKind::StuckRecovery,
        ball.pos,
        ParticleKind::Lightning,
        30,
    ));
}

/// Per-update decay of the renderer shake
pub fn decay_shake(screen_shake: &mut f32) {
    if *screen_shake > 0.0 {
        *screen_shake *= SCREEN_SHAKE_DECAY;
        if *screen_shake < SCREEN_SHAKE_CUTOFF {
            *screen_shake = 0.0;
        }
    }
}
