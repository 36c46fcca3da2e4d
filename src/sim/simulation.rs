//! Match driver: owns the state, the settings and the RNG

use log::info;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::events::GameEvent;
use super::input::{ControlIntents, GameMode};
use super::state::{Arena, MatchState};
use super::tick::tick;
use crate::settings::Settings;

/// A single match. Hosts call `update` once per frame and draw `state()`.
pub struct MatchSimulation {
    state: MatchState,
    settings: Settings,
    rng: Pcg32,
}

impl MatchSimulation {
    /// Start a match. Uses the settings seed if there is one.
    pub fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        Self::with_seed(settings, seed)
    }

    pub fn with_seed(settings: Settings, seed: u64) -> Self {
        let (width, height) = settings.arena_size();
        let mut state = MatchState::new(Arena::new(width, height), settings.mode);
        state.portals_enabled = settings.portals;
        let mut sim = Self {
            state,
            settings,
            rng: Pcg32::seed_from_u64(seed),
        };
        sim.restart();
        sim
    }

    /// Advance one frame
    pub fn update(&mut self, intents: &ControlIntents, dt: f32) -> Vec<GameEvent> {
        tick(&mut self.state, intents, dt, &mut self.rng)
    }

    /// Fresh match in the current mode and arena
    pub fn restart(&mut self) {
        self.state.restart(self.settings.mode, &mut self.rng);
        info!(
            "match started: mode={}, difficulty={:.2}, arena={}x{}",
            self.settings.mode.as_str(),
            self.settings.ai_difficulty(),
            self.state.arena.width,
            self.state.arena.height
        );
    }

    /// Switch mode; always starts a new match
    pub fn set_mode(&mut self, mode: GameMode) {
        self.settings.mode = mode;
        self.restart();
    }

    /// Change the AI level without interrupting play
    pub fn set_difficulty(&mut self, level: f32) {
        let level = if level.is_nan() {
            self.settings.ai_difficulty()
        } else {
            level.clamp(0.0, 1.0)
        };
        self.settings.ai_level = Some(level);
        info!("ai difficulty set to {level:.2}");
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(Arena::new(width, height));
        info!("arena resized to {width}x{height}");
    }

    /// Idle intents for the current mode and difficulty; hosts fill in keys
    pub fn intents(&self) -> ControlIntents {
        ControlIntents::idle(self.settings.mode, self.settings.ai_difficulty())
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Direct access for hosts and tests that stage positions
    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }
}
