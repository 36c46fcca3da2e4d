//! Portals between dimensions

use glam::Vec2;
use log::{debug, info};
use rand::Rng;

use super::dimension::DimensionId;
use super::events::{EventKind, GameEvent};
use super::state::{MatchState, Portal, Side};
use crate::consts::*;

/// Switch dimension through the first portal the ball is inside.
/// That portal closes behind it.
pub fn check_transit(state: &mut MatchState, events: &mut Vec<GameEvent>) {
    let ball_pos = state.ball.pos;
    let Some(index) = state.portals.iter().position(|p| p.contains(ball_pos)) else {
        return;
    };
    let portal = state.portals.swap_remove(index);

    let previous = state.dimension;
    let next = portal.target_dimension();
    state.dimension = next;
    info!(
        "portal transit: {} -> {}",
        previous.config().name,
        next.config().name
    );

    events.push(GameEvent::new(
        EventKind::PortalTransit { dimension: next },
        portal.pos,
        next.config().particle,
        20,
    ));
}

/// Try to open a portal at a random point. Candidates near a goal line or an
/// existing portal are dropped, not retried.
pub fn try_spawn<R: Rng + ?Sized>(state: &mut MatchState, rng: &mut R) {
    if state.portals.len() >= MAX_PORTALS {
        return;
    }

    let radius = state.ball.radius * PORTAL_RADIUS_BALLS;
    let arena = state.arena;
    let x = rng.random::<f32>() * (arena.width - radius * 4.0) + radius * 2.0;
    let y = rng.random::<f32>() * (arena.height - radius * 4.0) + radius * 2.0;
    let pos = Vec2::new(x, y);

    let left_limit = state.paddle(Side::Left).front_x() + PORTAL_GOAL_MARGIN;
    let right_limit = state.paddle(Side::Right).front_x() - PORTAL_GOAL_MARGIN;
    if x < left_limit || x > right_limit {
        return;
    }
    let min_separation = radius * PORTAL_SEPARATION_RADII;
    if state
        .portals
        .iter()
        .any(|p| p.pos.distance(pos) < min_separation)
    {
        return;
    }

    let target = rng.random_range(1..=DimensionId::ALL.len() as u32);
    debug!("portal opened at ({:.0}, {:.0}) to dimension {}", x, y, target);
    state.portals.push(Portal {
        pos,
        radius,
        target,
        lifetime: PORTAL_LIFETIME_FRAMES,
        pulse_phase: 0.0,
    });
}

/// One frame of aging: lifetimes count down, expired portals close
pub fn age(portals: &mut Vec<Portal>) {
    portals.retain_mut(|portal| {
        portal.lifetime = portal.lifetime.saturating_sub(1);
        portal.pulse_phase += PORTAL_PULSE_STEP;
        if portal.lifetime == 0 {
            debug!("portal at ({:.0}, {:.0}) closed", portal.pos.x, portal.pos.y);
        }
        portal.lifetime > 0
    });
}
