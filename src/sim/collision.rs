//! Collision detection and response
//!
//! Walls reflect with the dimension's bounce intensity. Paddles are
//! axis-aligned rectangles that can be hit from either face: the back face
//! (or a paddle dashing toward its own goal) sends the ball home again.

use std::f32::consts::PI;

use glam::Vec2;

use super::dimension::{Dimension, ParticleKind};
use super::events::{EventKind, GameEvent};
use super::state::{Arena, Ball, Paddle};
use crate::consts::*;

/// Which horizontal wall the ball touched this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallContact {
    None,
    Top,
    Bottom,
}

/// Result of a paddle contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleContact {
    /// Where along the paddle height the ball struck (0 = top, 1 = bottom)
    pub hit_pos: f32,
    pub momentum: f32,
    /// Ball was on the opponent-facing half of the paddle
    pub front: bool,
    /// Ball returns toward the hitter's own goal
    pub reverse: bool,
}

/// Bounce off the top and bottom walls
pub fn resolve_walls(
    ball: &mut Ball,
    dimension: &Dimension,
    arena: &Arena,
    events: &mut Vec<GameEvent>,
) -> WallContact {
    let mut contact = WallContact::None;

    if ball.pos.y - ball.radius < 0.0 {
        ball.pos.y = ball.radius;
        let vel = Vec2::new(ball.vel.x, -ball.vel.y * dimension.wall_bounce);
        ball.set_velocity(vel, MAX_BALL_SPEED);
        emit_wall_bounce(ball, dimension, events);
        contact = WallContact::Top;
    }

    if ball.pos.y + ball.radius > arena.height {
        ball.pos.y = arena.height - ball.radius;
        let mut vel = Vec2::new(ball.vel.x, -ball.vel.y * dimension.wall_bounce);

        // Gravity must not pin the ball to the floor
        let min_rebound = dimension.gravity * FLOOR_REBOUND_GRAVITY + FLOOR_REBOUND_BASE;
        if vel.y > -min_rebound {
            vel.y = -min_rebound;
        }
        if vel.x.abs() < FLOOR_SLOW_SPEED_X {
            vel.x *= FLOOR_KICK_X;
            if vel.x.abs() < FLOOR_MIN_SPEED_X {
                vel.x = FLOOR_MIN_SPEED_X.copysign(vel.x);
            }
        }

        ball.set_velocity(vel, MAX_BALL_SPEED);
        emit_wall_bounce(ball, dimension, events);
        contact = WallContact::Bottom;
    }

    contact
}

fn emit_wall_bounce(ball: &Ball, dimension: &Dimension, events: &mut Vec<GameEvent>) {
    if dimension.particle.is_visible() {
        events.push(GameEvent::new(
            EventKind::WallBounce,
            ball.pos,
            dimension.particle,
            1,
        ));
    }
}

/// Ball bounding box overlaps the paddle rectangle
pub fn ball_paddle_overlap(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.y + ball.radius > paddle.pos.y
        && ball.pos.y - ball.radius < paddle.pos.y + paddle.size.y
        && ball.pos.x - ball.radius < paddle.pos.x + paddle.size.x
        && ball.pos.x + ball.radius > paddle.pos.x
}

/// Speed multiplier from the paddle's motion at impact
pub fn momentum_factor(paddle: &Paddle) -> f32 {
    let paddle_speed = paddle.vel.length();
    if paddle_speed <= MOMENTUM_MIN_PADDLE_SPEED {
        return 1.0;
    }
    let ratio = paddle_speed / paddle.max_speed.y;
    let moving_toward_ball = paddle.vel.x * paddle.side.toward_opponent() > 0.0;
    if moving_toward_ball {
        (1.0 + ratio * MOMENTUM_TOWARD_GAIN).min(MOMENTUM_TOWARD_CAP)
    } else {
        (1.0 + ratio * MOMENTUM_AWAY_GAIN).min(MOMENTUM_AWAY_CAP)
    }
}

/// Resolve a paddle hit, if any
pub fn resolve_paddle(
    ball: &mut Ball,
    paddle: &Paddle,
    dimension: &Dimension,
    events: &mut Vec<GameEvent>,
) -> Option<PaddleContact> {
    if !ball_paddle_overlap(ball, paddle) {
        return None;
    }

    let toward = paddle.side.toward_opponent();
    // Clamped so corner overlaps deflect like edge hits
    let hit_pos = ((ball.pos.y - paddle.pos.y) / paddle.size.y).clamp(0.0, 1.0);
    let momentum = momentum_factor(paddle);

    let front = (ball.pos.x - paddle.center().x) * toward > 0.0;
    let dashing_home = paddle.vel.x * toward < -REVERSE_PADDLE_SPEED;
    let reverse = !front || dashing_home;

    // Flush against the touched face so the next frame starts clear
    ball.pos.x = if front {
        paddle.front_x() + toward * ball.radius
    } else {
        paddle.front_x() - toward * (paddle.size.x + ball.radius)
    };

    let base_speed = (HIT_BASE_SPEED + ball.vel.x.abs() * HIT_CARRY).min(HIT_MAX_BASE_SPEED);
    ball.speed = base_speed;

    let vx = if reverse {
        -toward * base_speed * REVERSE_HIT_SCALE
    } else {
        toward * base_speed * dimension.paddle_bounce * momentum
    };
    let angle = (hit_pos - 0.5) * PI * DEFLECTION_SPREAD;
    let vy = ball.speed * angle.sin() + paddle.vel.y * SPIN_TRANSFER;
    ball.set_velocity(Vec2::new(vx, vy), MAX_BALL_SPEED);

    events.push(GameEvent::new(
        EventKind::PaddleHit {
            side: paddle.side,
            reverse,
        },
        ball.pos,
        dimension.particle,
        1,
    ));
    if reverse {
        events.push(GameEvent::new(
            EventKind::ReverseHit { side: paddle.side },
            ball.pos,
            ParticleKind::Fire,
            1,
        ));
    }
    if momentum > HARD_HIT_MOMENTUM {
        events.push(GameEvent::new(
            EventKind::HardHit { side: paddle.side },
            ball.pos,
            ParticleKind::Fire,
            5,
        ));
    }

    Some(PaddleContact {
        hit_pos,
        momentum,
        front,
        reverse,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::dimension::DimensionId;
    use crate::sim::state::Side;

    fn setup() -> (Arena, Ball, Paddle, Paddle) {
        let arena = Arena::new(1200.0, 720.0);
        let ball = Ball::new(&arena);
        let left = Paddle::new(Side::Left, &arena);
        let right = Paddle::new(Side::Right, &arena);
        (arena, ball, left, right)
    }

    #[test]
    fn test_top_wall_reflects() {
        let (arena, mut ball, _, _) = setup();
        let mut events = Vec::new();
        ball.pos = Vec2::new(600.0, 5.0);
        ball.vel = Vec2::new(300.0, -400.0);

        let contact = resolve_walls(&mut ball, DimensionId::Prime.config(), &arena, &mut events);
        assert_eq!(contact, WallContact::Top);
        assert_eq!(ball.pos.y, ball.radius);
        assert_eq!(ball.vel, Vec2::new(300.0, 400.0));
        // Prime has no particles
        assert!(events.is_empty());
    }

    #[test]
    fn test_floor_enforces_rebound() {
        let (arena, mut ball, _, _) = setup();
        let mut events = Vec::new();
        let heavy = DimensionId::Heavy.config();
        ball.pos = Vec2::new(600.0, 715.0);
        ball.vel = Vec2::new(120.0, 50.0);

        let contact = resolve_walls(&mut ball, heavy, &arena, &mut events);
        assert_eq!(contact, WallContact::Bottom);
        // 300 * 0.8 + 250
        assert!((ball.vel.y + 490.0).abs() < 1e-3);
        // 120 * 1.2 = 144 -> floor of 150
        assert_eq!(ball.vel.x, 150.0);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].particle, ParticleKind::Fire);
        assert!((ball.speed - ball.vel.length()).abs() < 1e-3);
    }

    #[test]
    fn test_front_hit_crosses_court() {
        let (_, mut ball, left, _) = setup();
        let mut events = Vec::new();
        ball.pos = Vec2::new(left.front_x() + 5.0, left.center().y);
        ball.vel = Vec2::new(-500.0, 0.0);

        let contact = resolve_paddle(&mut ball, &left, DimensionId::Prime.config(), &mut events)
            .expect("should hit");
        assert!(contact.front);
        assert!(!contact.reverse);
        assert_eq!(contact.momentum, 1.0);
        // min(400 + 100, 600) * 1.05
        assert!((ball.vel.x - 525.0).abs() < 1e-3);
        assert!(ball.vel.y.abs() < 1e-3);
        assert_eq!(ball.pos.x, left.front_x() + ball.radius);
        assert!((ball.speed - ball.vel.length()).abs() < 1e-3);
        assert!(matches!(
            events[0].kind,
            EventKind::PaddleHit {
                side: Side::Left,
                reverse: false
            }
        ));
    }

    #[test]
    fn test_back_hit_reverses() {
        let (_, mut ball, _, right) = setup();
        let mut events = Vec::new();
        // Behind the right paddle, moving toward the right goal
        ball.pos = Vec2::new(right.pos.x + right.size.x - 2.0, right.center().y);
        ball.vel = Vec2::new(300.0, 0.0);

        let contact = resolve_paddle(&mut ball, &right, DimensionId::Prime.config(), &mut events)
            .expect("should hit");
        assert!(!contact.front);
        assert!(contact.reverse);
        // Sent back toward the right paddle's own goal
        assert!((ball.vel.x - 460.0 * 0.7).abs() < 1e-3);
        assert!((ball.pos.x - (right.pos.x + right.size.x + ball.radius)).abs() < 1e-3);
    }

    #[test]
    fn test_reverse_hit_bursts_fire_in_prime() {
        let (_, mut ball, _, right) = setup();
        let mut events = Vec::new();
        ball.pos = Vec2::new(right.pos.x + right.size.x - 2.0, right.center().y);
        ball.vel = Vec2::new(300.0, 0.0);

        resolve_paddle(&mut ball, &right, DimensionId::Prime.config(), &mut events);
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0].kind,
            EventKind::PaddleHit {
                side: Side::Right,
                reverse: true
            }
        ));
        assert_eq!(events[0].particle, ParticleKind::None);
        assert_eq!(events[1].kind, EventKind::ReverseHit { side: Side::Right });
        assert_eq!(events[1].particle, ParticleKind::Fire);
    }

    #[test]
    fn test_corner_overlap_clamps_hit_pos() {
        let (_, mut ball, left, _) = setup();
        let mut events = Vec::new();
        // Centre above the paddle top, bounding box still overlapping
        ball.pos = Vec2::new(left.front_x() + 5.0, left.pos.y - 10.0);
        ball.vel = Vec2::new(-500.0, 0.0);

        let contact = resolve_paddle(&mut ball, &left, DimensionId::Prime.config(), &mut events)
            .expect("should hit");
        assert_eq!(contact.hit_pos, 0.0);
        assert!(ball.vel.y < 0.0);
    }

    #[test]
    fn test_dash_home_reverses_front_hit() {
        let (_, mut ball, mut left, _) = setup();
        let mut events = Vec::new();
        left.vel.x = -450.0;
        ball.pos = Vec2::new(left.front_x() + 5.0, left.center().y);
        ball.vel = Vec2::new(-300.0, 0.0);

        let contact = resolve_paddle(&mut ball, &left, DimensionId::Prime.config(), &mut events)
            .expect("should hit");
        assert!(contact.front);
        assert!(contact.reverse);
        assert!(ball.vel.x < 0.0);
    }

    #[test]
    fn test_momentum_factor_caps() {
        let (_, _, mut left, _) = setup();
        left.vel = Vec2::new(400.0, 800.0);
        assert_eq!(momentum_factor(&left), 1.5);
        left.vel = Vec2::new(-400.0, 800.0);
        assert_eq!(momentum_factor(&left), 1.25);
        left.vel = Vec2::new(0.0, 40.0);
        assert_eq!(momentum_factor(&left), 1.0);
    }

    #[test]
    fn test_hard_hit_emits_burst() {
        let (_, mut ball, mut left, _) = setup();
        let mut events = Vec::new();
        left.vel = Vec2::new(400.0, 800.0);
        ball.pos = Vec2::new(left.front_x() + 5.0, left.center().y);
        ball.vel = Vec2::new(-500.0, 0.0);

        resolve_paddle(&mut ball, &left, DimensionId::Chaos.config(), &mut events);
        assert_eq!(events.len(), 2);
        assert!(matches!(events[1].kind, EventKind::HardHit { side: Side::Left }));
        assert!(ball.vel.length() <= MAX_BALL_SPEED + 1e-3);
    }

    #[test]
    fn test_spin_transfer() {
        let (_, mut ball, mut left, _) = setup();
        let mut events = Vec::new();
        left.vel = Vec2::new(0.0, 40.0);
        ball.pos = Vec2::new(left.front_x() + 5.0, left.center().y);
        ball.vel = Vec2::new(-500.0, 0.0);

        resolve_paddle(&mut ball, &left, DimensionId::Prime.config(), &mut events);
        assert!((ball.vel.y - 12.0).abs() < 1e-2);
    }

    #[test]
    fn test_miss() {
        let (_, mut ball, left, _) = setup();
        let mut events = Vec::new();
        assert!(resolve_paddle(&mut ball, &left, DimensionId::Prime.config(), &mut events).is_none());
        assert!(events.is_empty());
    }
}
