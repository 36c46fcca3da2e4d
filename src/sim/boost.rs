//! Boost areas
//!
//! Arming opens a short-lived zone just in front of a paddle. A ball passing
//! through it on the way to the opponent is sped up once, then the side goes
//! on cooldown.

use glam::Vec2;
use log::debug;

use super::dimension::ParticleKind;
use super::events::{EventKind, GameEvent};
use super::state::{Ball, BoostState, Paddle};
use crate::consts::*;

/// Hit-test anchor: middle of the paddle's front face
pub fn anchor(paddle: &Paddle) -> Vec2 {
    Vec2::new(paddle.front_x(), paddle.center().y)
}

/// Where the area is drawn, half an area in front of the face
pub fn area_center(paddle: &Paddle) -> Vec2 {
    anchor(paddle) + Vec2::new(paddle.side.toward_opponent() * BOOST_AREA_SIZE / 2.0, 0.0)
}

/// Open the area if the side is off cooldown
pub fn arm(boost: &mut BoostState, paddle: &Paddle, events: &mut Vec<GameEvent>) -> bool {
    if !boost.ready() {
        return false;
    }
    boost.area_timer = BOOST_AREA_DURATION;
    debug!("boost armed for {:?}", paddle.side);
    events.push(GameEvent::new(
        EventKind::BoostArmed { side: paddle.side },
        area_center(paddle),
        ParticleKind::Glow,
        1,
    ));
    true
}

/// Count both timers down, never below zero
pub fn tick_timers(boost: &mut BoostState, dt: f32) {
    boost.cooldown = (boost.cooldown - dt).max(0.0);
    boost.area_timer = (boost.area_timer - dt).max(0.0);
}

/// Fire the boost if the ball is crossing the armed area
pub fn try_trigger(
    boost: &mut BoostState,
    paddle: &Paddle,
    ball: &mut Ball,
    events: &mut Vec<GameEvent>,
) -> bool {
    if !boost.area_visible() {
        return false;
    }
    if ball.vel.x * paddle.side.toward_opponent() <= 0.0 {
        return false;
    }

    let offset = ball.pos - anchor(paddle);
    let reach = BOOST_AREA_SIZE / 2.0;
    if offset.length() >= reach {
        return false;
    }

    ball.vel.x *= BOOST_FACTOR;
    // The nudge below reads the boosted speed
    ball.sync_speed();
    ball.vel.y += ball.speed * (offset.y / reach) * BOOST_NUDGE;
    ball.clamp_speed(MAX_BALL_SPEED);

    debug!(
        "boost fired for {:?}, ball now ({:.0}, {:.0})",
        paddle.side, ball.vel.x, ball.vel.y
    );
    events.push(GameEvent::new(
        EventKind::BoostTrigger { side: paddle.side },
        ball.pos,
        ParticleKind::Fire,
        20,
    ));

    boost.cooldown = BOOST_COOLDOWN;
    boost.area_timer = 0.0;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Arena, Side};

    fn setup() -> (Ball, Paddle, Paddle) {
        let arena = Arena::new(1200.0, 720.0);
        (
            Ball::new(&arena),
            Paddle::new(Side::Left, &arena),
            Paddle::new(Side::Right, &arena),
        )
    }

    #[test]
    fn test_area_sits_in_front_of_paddle() {
        let (_, left, right) = setup();
        assert_eq!(area_center(&left), Vec2::new(100.0, 360.0));
        assert_eq!(area_center(&right), Vec2::new(1100.0, 360.0));
    }

    #[test]
    fn test_arm_respects_cooldown() {
        let (_, left, _) = setup();
        let mut boost = BoostState::default();
        let mut events = Vec::new();

        assert!(arm(&mut boost, &left, &mut events));
        assert_eq!(boost.area_timer, BOOST_AREA_DURATION);
        assert!(matches!(events[0].kind, EventKind::BoostArmed { side: Side::Left }));

        boost.cooldown = 1.0;
        boost.area_timer = 0.0;
        assert!(!arm(&mut boost, &left, &mut events));
        assert!(!boost.area_visible());
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_timers_floor_at_zero() {
        let mut boost = BoostState {
            cooldown: 0.05,
            area_timer: 0.3,
        };
        tick_timers(&mut boost, 0.1);
        assert_eq!(boost.cooldown, 0.0);
        assert!((boost.area_timer - 0.2).abs() < 1e-6);
        tick_timers(&mut boost, 0.5);
        assert_eq!(boost.area_timer, 0.0);
        assert!(!boost.area_visible());
    }

    #[test]
    fn test_trigger_multiplies_horizontal_speed() {
        let (mut ball, left, _) = setup();
        let mut boost = BoostState::default();
        let mut events = Vec::new();
        arm(&mut boost, &left, &mut events);

        ball.pos = Vec2::new(80.0, 360.0);
        ball.vel = Vec2::new(300.0, 0.0);
        ball.sync_speed();

        assert!(try_trigger(&mut boost, &left, &mut ball, &mut events));
        assert_eq!(ball.vel.x, 675.0);
        assert_eq!(ball.vel.y, 0.0);
        assert_eq!(ball.speed, 675.0);
        assert_eq!(boost.cooldown, BOOST_COOLDOWN);
        assert!(!boost.area_visible());
        assert_eq!(events[1].burst, 20);

        // Spent until re-armed
        assert!(!try_trigger(&mut boost, &left, &mut ball, &mut events));
    }

    #[test]
    fn test_off_center_transit_nudges() {
        let (mut ball, _, right) = setup();
        let mut boost = BoostState::default();
        let mut events = Vec::new();
        arm(&mut boost, &right, &mut events);

        // 25 below the anchor, heading left toward the opponent
        ball.pos = Vec2::new(1140.0, 385.0);
        ball.vel = Vec2::new(-200.0, 0.0);

        assert!(try_trigger(&mut boost, &right, &mut ball, &mut events));
        assert_eq!(ball.vel.x, -450.0);
        // 450 * 0.5 * 0.5
        assert!((ball.vel.y - 112.5).abs() < 1e-3);
        assert!((ball.speed - ball.vel.length()).abs() < 1e-3);
    }

    #[test]
    fn test_ball_moving_home_is_ignored() {
        let (mut ball, left, _) = setup();
        let mut boost = BoostState::default();
        let mut events = Vec::new();
        arm(&mut boost, &left, &mut events);

        ball.pos = Vec2::new(80.0, 360.0);
        ball.vel = Vec2::new(-300.0, 0.0);
        assert!(!try_trigger(&mut boost, &left, &mut ball, &mut events));
        assert!(boost.area_visible());
    }
}
