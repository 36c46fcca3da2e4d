//! One simulation update
//!
//! Runs every subsystem in a fixed order against the evolving frame state
//! and returns the events produced, in production order.

use log::debug;
use rand::Rng;

use super::events::GameEvent;
use super::input::ControlIntents;
use super::state::{MatchState, Side, right_paddle_speed};
use super::{ai, boost, collision, kinematics, paddle, portal, scoring, watchdog};
use crate::consts::MAX_DT;

/// Advance the match by `dt` seconds.
///
/// `dt <= 0`, NaN, or a degenerate arena make this a no-op. Larger steps are
/// capped at `MAX_DT`.
pub fn tick<R: Rng + ?Sized>(
    state: &mut MatchState,
    intents: &ControlIntents,
    dt: f32,
    rng: &mut R,
) -> Vec<GameEvent> {
    if !(dt > 0.0) || state.arena.is_degenerate() {
        debug!("skipping update: dt={dt}, arena={:?}", state.arena);
        return Vec::new();
    }
    let dt = dt.min(MAX_DT);
    let mut events = Vec::new();

    state.mode = intents.mode;
    let difficulty = intents.difficulty();
    // Physics for the whole frame come from the dimension it started in
    let dimension = state.dimension_config();

    watchdog::decay_shake(&mut state.screen_shake);

    // Boost arming, timers, triggers
    for side in Side::BOTH {
        let wants_boost = intents.for_side(side).is_some_and(|intent| intent.boost);
        if wants_boost {
            let i = side.index();
            boost::arm(&mut state.boosts[i], &state.paddles[i], &mut events);
        }
    }
    for boost_state in &mut state.boosts {
        boost::tick_timers(boost_state, dt);
    }
    for side in Side::BOTH {
        let i = side.index();
        boost::try_trigger(
            &mut state.boosts[i],
            &state.paddles[i],
            &mut state.ball,
            &mut events,
        );
    }

    // Paddles
    state.paddle_mut(Side::Right).max_speed.y = right_paddle_speed(intents.mode);
    for side in Side::BOTH {
        let i = side.index();
        match intents.for_side(side) {
            Some(intent) => paddle::steer(&mut state.paddles[i], &intent),
            None => {
                let command = ai::plan(&state.ball, &state.paddles[i], &state.arena, difficulty, rng);
                ai::apply(&mut state.paddles[i], command);
            }
        }
        paddle::integrate(&mut state.paddles[i], &state.arena, dt);
    }

    // Ball
    kinematics::integrate(&mut state.ball, dimension, dt);
    let contact = collision::resolve_walls(&mut state.ball, dimension, &state.arena, &mut events);
    watchdog::track(&mut state.ball_stuck_timer, &state.ball, &state.arena, contact, dt);
    watchdog::recover(
        &mut state.ball_stuck_timer,
        &mut state.screen_shake,
        &mut state.ball,
        rng,
        &mut events,
    );
    for side in Side::BOTH {
        collision::resolve_paddle(
            &mut state.ball,
            &state.paddles[side.index()],
            dimension,
            &mut events,
        );
    }
    scoring::check(&mut state.ball, &mut state.score, &state.arena, rng, &mut events);

    // Portals
    portal::check_transit(state, &mut events);
    if state.portals_enabled && rng.random::<f32>() < dimension.portal_spawn_chance {
        portal::try_spawn(state, rng);
    }
    portal::age(&mut state.portals);

    state.frame += 1;
    events
}
