//! Match state and core simulation types
//!
//! Everything a renderer needs to draw a frame lives here.

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::dimension::{Dimension, DimensionId};
use super::input::GameMode;
use crate::consts::*;

/// Court side. Left is player one, right is the AI or player two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn index(&self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn opponent(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Sign of +x pointing at the opponent's goal
    pub fn toward_opponent(&self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Playfield size in units (canvas pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero/negative/non-finite sizes freeze the simulation
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite())
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn paddle_size(&self) -> Vec2 {
        Vec2::new(
            self.width * PADDLE_WIDTH_RATIO,
            self.height * PADDLE_HEIGHT_RATIO,
        )
    }

    pub fn paddle_offset(&self) -> f32 {
        self.width * PADDLE_OFFSET_RATIO
    }

    pub fn ball_radius(&self) -> f32 {
        self.width * BALL_RADIUS_RATIO
    }
}

/// A paddle. `pos` is the top-left corner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub size: Vec2,
    /// x = horizontal speed, y = vertical speed
    pub vel: Vec2,
    /// x = horizontal limit, y = vertical limit
    pub max_speed: Vec2,
    /// Horizontal travel range for `pos.x`; never crosses the midline
    pub min_x: f32,
    pub max_x: f32,
}

impl Paddle {
    pub fn new(side: Side, arena: &Arena) -> Self {
        let max_speed = match side {
            Side::Left => Vec2::new(PLAYER_MAX_HORIZONTAL_SPEED, PLAYER_MAX_SPEED),
            Side::Right => Vec2::new(RIGHT_MAX_HORIZONTAL_SPEED, AI_MAX_SPEED),
        };
        let mut paddle = Self {
            side,
            pos: Vec2::ZERO,
            size: Vec2::ZERO,
            vel: Vec2::ZERO,
            max_speed,
            min_x: 0.0,
            max_x: 0.0,
        };
        paddle.fit_arena(arena);
        paddle.recenter(arena);
        paddle
    }

    /// Recompute size and travel range for the arena, then re-clamp
    pub fn fit_arena(&mut self, arena: &Arena) {
        let size = arena.paddle_size();
        let offset = arena.paddle_offset();
        self.size = size;
        match self.side {
            Side::Left => {
                self.min_x = offset;
                self.max_x = arena.width / 2.0 - size.x - offset;
            }
            Side::Right => {
                self.min_x = arena.width / 2.0 + offset;
                self.max_x = arena.width - offset - size.x;
            }
        }
        self.clamp_to(arena);
    }

    /// Back at the home column, vertically centred
    pub fn recenter(&mut self, arena: &Arena) {
        self.pos = Vec2::new(self.home_x(), arena.height / 2.0 - self.size.y / 2.0);
        self.vel = Vec2::ZERO;
    }

    /// Resting x next to the own goal line
    pub fn home_x(&self) -> f32 {
        match self.side {
            Side::Left => self.min_x,
            Side::Right => self.max_x,
        }
    }

    /// x of the face that looks at the opponent
    pub fn front_x(&self) -> f32 {
        match self.side {
            Side::Left => self.pos.x + self.size.x,
            Side::Right => self.pos.x,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Vertical to the arena, horizontal to the own half
    pub fn clamp_to(&mut self, arena: &Arena) {
        self.pos.y = self.pos.y.min(arena.height - self.size.y).max(0.0);
        self.pos.x = self.pos.x.min(self.max_x).max(self.min_x);
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Always |vel| once a mutation finishes
    pub speed: f32,
    pub radius: f32,
    /// Past positions, oldest first
    #[serde(skip)]
    pub trail: VecDeque<Vec2>,
}

impl Ball {
    pub fn new(arena: &Arena) -> Self {
        let vel = Vec2::splat(BALL_SERVE_SPEED);
        Self {
            pos: arena.center(),
            vel,
            speed: vel.length(),
            radius: arena.ball_radius(),
            trail: VecDeque::new(),
        }
    }

    /// Re-establish `speed == |vel|`
    #[inline]
    pub fn sync_speed(&mut self) {
        self.speed = self.vel.length();
    }

    /// Replace the velocity, rescaling to `max_speed` if needed, and resync speed
    pub fn set_velocity(&mut self, vel: Vec2, max_speed: f32) {
        self.vel = vel;
        self.clamp_speed(max_speed);
    }

    /// Uniformly rescale the velocity down to `max_speed`, then resync speed
    pub fn clamp_speed(&mut self, max_speed: f32) {
        let current = self.vel.length();
        if current > max_speed {
            self.vel *= max_speed / current;
        }
        self.sync_speed();
    }

    /// Push the current position into the trail (FIFO, bounded by `len`)
    pub fn record_trail(&mut self, len: usize) {
        if len == 0 {
            self.trail.clear();
            return;
        }
        self.trail.push_back(self.pos);
        while self.trail.len() > len {
            self.trail.pop_front();
        }
    }

    /// Center-court serve with random diagonal direction
    pub fn serve<R: Rng + ?Sized>(&mut self, arena: &Arena, rng: &mut R) {
        let sx = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.pos = arena.center();
        self.vel = Vec2::new(BALL_SERVE_SPEED * sx, BALL_SERVE_SPEED * sy);
        self.sync_speed();
        self.radius = arena.ball_radius();
        self.trail.clear();
    }
}

/// Per-side boost state machine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoostState {
    /// Seconds until the next arming is allowed
    pub cooldown: f32,
    /// Seconds the activation area stays up
    pub area_timer: f32,
}

impl BoostState {
    /// The area is up exactly while its timer runs
    pub fn area_visible(&self) -> bool {
        self.area_timer > 0.0
    }

    pub fn ready(&self) -> bool {
        self.cooldown <= 0.0
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A teleportation portal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portal {
    pub pos: Vec2,
    pub radius: f32,
    /// Raw 1-based dimension id; resolved through `DimensionId::from_raw`
    pub target: u32,
    /// Frames left before the portal closes
    pub lifetime: u32,
    pub pulse_phase: f32,
}

impl Portal {
    pub fn target_dimension(&self) -> DimensionId {
        DimensionId::from_raw(self.target)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.distance(self.pos) < self.radius
    }
}

/// Match score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// Complete match state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub arena: Arena,
    /// Mode seen on the last update
    pub mode: GameMode,
    pub score: Score,
    pub dimension: DimensionId,
    pub ball: Ball,
    /// Indexed by `Side::index`
    pub paddles: [Paddle; 2],
    pub boosts: [BoostState; 2],
    pub portals: Vec<Portal>,
    pub portals_enabled: bool,
    /// Seconds spent in the near-floor band
    pub ball_stuck_timer: f32,
    /// Renderer shake magnitude, decays every update
    pub screen_shake: f32,
    /// Updates applied since the last restart
    pub frame: u64,
}

impl MatchState {
    /// Fresh match for the arena. The ball starts at center with (+300, +300);
    /// call `restart` for a randomized serve.
    pub fn new(arena: Arena, mode: GameMode) -> Self {
        Self {
            arena,
            mode,
            score: Score::default(),
            dimension: DimensionId::Prime,
            ball: Ball::new(&arena),
            paddles: [Paddle::new(Side::Left, &arena), Paddle::new(Side::Right, &arena)],
            boosts: [BoostState::default(), BoostState::default()],
            portals: Vec::new(),
            portals_enabled: true,
            ball_stuck_timer: 0.0,
            screen_shake: 0.0,
            frame: 0,
        }
    }

    pub fn dimension_config(&self) -> &'static Dimension {
        self.dimension.config()
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        &mut self.paddles[side.index()]
    }

    pub fn boost(&self, side: Side) -> &BoostState {
        &self.boosts[side.index()]
    }

    pub fn boost_mut(&mut self, side: Side) -> &mut BoostState {
        &mut self.boosts[side.index()]
    }

    /// Visual centre of the side's boost area while it is up
    pub fn boost_area_center(&self, side: Side) -> Option<Vec2> {
        self.boost(side)
            .area_visible()
            .then(|| super::boost::area_center(self.paddle(side)))
    }

    /// Reset everything that belongs to a single match
    pub fn restart<R: Rng + ?Sized>(&mut self, mode: GameMode, rng: &mut R) {
        self.mode = mode;
        self.score = Score::default();
        self.dimension = DimensionId::Prime;
        for boost in &mut self.boosts {
            boost.clear();
        }
        self.ball_stuck_timer = 0.0;
        self.screen_shake = 0.0;
        self.portals.clear();
        self.frame = 0;

        let arena = self.arena;
        self.ball.serve(&arena, rng);
        for paddle in &mut self.paddles {
            paddle.fit_arena(&arena);
            paddle.recenter(&arena);
        }
        self.paddle_mut(Side::Right).max_speed.y = right_paddle_speed(mode);
    }

    /// Apply a new arena size, re-clamping paddles and ball
    pub fn resize(&mut self, arena: Arena) {
        self.arena = arena;
        for paddle in &mut self.paddles {
            paddle.fit_arena(&arena);
        }
        let r = arena.ball_radius();
        self.ball.radius = r;
        self.ball.pos.x = self.ball.pos.x.min(arena.width - r).max(r);
        self.ball.pos.y = self.ball.pos.y.min(arena.height - r).max(r);
        for portal in &mut self.portals {
            portal.radius = r * PORTAL_RADIUS_BALLS;
        }
    }
}

/// Right paddle vertical limit: the AI is slower than a human
pub fn right_paddle_speed(mode: GameMode) -> f32 {
    match mode {
        GameMode::TwoPlayer => PLAYER_MAX_SPEED,
        GameMode::SinglePlayer | GameMode::Demo => AI_MAX_SPEED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn arena() -> Arena {
        Arena::new(1200.0, 720.0)
    }

    #[test]
    fn test_paddle_geometry_follows_arena() {
        let arena = arena();
        let left = Paddle::new(Side::Left, &arena);
        let right = Paddle::new(Side::Right, &arena);

        assert!((left.size.y - 120.0).abs() < 1e-4);
        assert!((left.size.x - 20.0).abs() < 1e-4);
        assert!((left.pos.x - 30.0).abs() < 1e-4);
        assert!((right.pos.x - 1150.0).abs() < 1e-4);
        assert!(left.max_x < arena.width / 2.0);
        assert!(right.min_x > arena.width / 2.0);
    }

    #[test]
    fn test_front_faces() {
        let arena = arena();
        let left = Paddle::new(Side::Left, &arena);
        let right = Paddle::new(Side::Right, &arena);
        assert!((left.front_x() - 50.0).abs() < 1e-4);
        assert!((right.front_x() - 1150.0).abs() < 1e-4);
    }

    #[test]
    fn test_clamp_speed_rescales_and_syncs() {
        let mut ball = Ball::new(&arena());
        ball.set_velocity(Vec2::new(3000.0, 4000.0), MAX_BALL_SPEED);
        assert!((ball.vel.length() - MAX_BALL_SPEED).abs() < 1e-2);
        assert!((ball.speed - ball.vel.length()).abs() < 1e-4);
        // Direction preserved
        assert!((ball.vel.y / ball.vel.x - 4.0 / 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_trail_is_bounded_fifo() {
        let mut ball = Ball::new(&arena());
        for i in 0..10 {
            ball.pos = Vec2::new(i as f32, 0.0);
            ball.record_trail(4);
        }
        assert_eq!(ball.trail.len(), 4);
        assert_eq!(ball.trail.front().map(|p| p.x), Some(6.0));
        assert_eq!(ball.trail.back().map(|p| p.x), Some(9.0));

        ball.record_trail(0);
        assert!(ball.trail.is_empty());
    }

    #[test]
    fn test_restart_resets_match() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut state = MatchState::new(arena(), GameMode::SinglePlayer);
        state.score = Score { left: 3, right: 2 };
        state.dimension = DimensionId::Chaos;
        state.ball_stuck_timer = 0.4;
        state.boost_mut(Side::Left).cooldown = 2.0;
        state.ball.pos = Vec2::new(10.0, 10.0);

        state.restart(GameMode::TwoPlayer, &mut rng);

        assert_eq!(state.score, Score::default());
        assert_eq!(state.dimension, DimensionId::Prime);
        assert_eq!(state.ball_stuck_timer, 0.0);
        assert!(state.boost(Side::Left).ready());
        assert_eq!(state.ball.pos, state.arena.center());
        assert_eq!(state.ball.vel.x.abs(), BALL_SERVE_SPEED);
        assert_eq!(state.ball.vel.y.abs(), BALL_SERVE_SPEED);
        assert_eq!(state.paddle(Side::Right).max_speed.y, PLAYER_MAX_SPEED);
    }

    #[test]
    fn test_resize_reclamps_positions() {
        let mut state = MatchState::new(arena(), GameMode::TwoPlayer);
        state.ball.pos = Vec2::new(1190.0, 700.0);
        state.paddle_mut(Side::Right).pos.y = 600.0;

        state.resize(Arena::new(600.0, 360.0));

        let right = state.paddle(Side::Right);
        assert!(right.pos.x <= right.max_x && right.pos.x >= right.min_x);
        assert!(right.pos.y + right.size.y <= 360.0 + 1e-3);
        assert!(state.ball.pos.x <= 600.0 - state.ball.radius);
        assert!(state.ball.pos.y <= 360.0 - state.ball.radius);
    }

    #[test]
    fn test_boost_visibility_tracks_timer() {
        let mut boost = BoostState::default();
        assert!(!boost.area_visible());
        boost.area_timer = 0.2;
        assert!(boost.area_visible());
        boost.clear();
        assert!(!boost.area_visible());
    }

    #[test]
    fn test_boost_area_center_only_while_visible() {
        let mut state = MatchState::new(arena(), GameMode::TwoPlayer);
        assert_eq!(state.boost_area_center(Side::Right), None);
        state.boost_mut(Side::Right).area_timer = 0.3;
        assert_eq!(
            state.boost_area_center(Side::Right),
            Some(Vec2::new(1100.0, 360.0))
        );
    }
}
