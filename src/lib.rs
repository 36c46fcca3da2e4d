//! nPong - A multidimensional Pong simulation
//!
//! Core modules:
//! - `sim`: Per-frame simulation (paddles, ball physics, portals, boosts, scoring)
//! - `clock`: Host timestamp to clamped frame delta
//! - `settings`: Match configuration and presets

pub mod clock;
pub mod settings;
pub mod sim;

pub use clock::FrameClock;
pub use settings::{Difficulty, MapSize, Settings, SettingsError};
pub use sim::{ControlIntents, GameEvent, GameMode, MatchSimulation, MatchState};

/// Game configuration constants
pub mod consts {
    /// Largest frame delta accepted by the simulation (seconds)
    pub const MAX_DT: f32 = 0.1;

    /// Arena-relative geometry (fractions of arena width/height)
    pub const PADDLE_HEIGHT_RATIO: f32 = 1.0 / 6.0;
    pub const PADDLE_WIDTH_RATIO: f32 = 1.0 / 60.0;
    pub const PADDLE_OFFSET_RATIO: f32 = 1.0 / 40.0;
    pub const BALL_RADIUS_RATIO: f32 = 1.0 / 60.0;

    /// Paddle speeds (units/s)
    pub const PLAYER_MAX_SPEED: f32 = 800.0;
    pub const PLAYER_MAX_HORIZONTAL_SPEED: f32 = 400.0;
    pub const AI_MAX_SPEED: f32 = 400.0;
    pub const RIGHT_MAX_HORIZONTAL_SPEED: f32 = 200.0;
    /// Per-update velocity decay when no key is held
    pub const PADDLE_DECAY: f32 = 0.8;
    /// Below this the decayed velocity snaps to zero
    pub const PADDLE_STOP_SPEED: f32 = 5.0;

    /// AI tuning
    pub const DEFAULT_AI_DIFFICULTY: f32 = 0.7;
    pub const AI_DEAD_ZONE_Y: f32 = 5.0;
    pub const AI_DEAD_ZONE_X: f32 = 10.0;
    pub const AI_STANDOFF: f32 = 50.0;
    pub const AI_STANDOFF_AGGRESSIVE: f32 = 30.0;
    pub const AI_AGGRESSIVE_DIFFICULTY: f32 = 0.7;
    pub const AI_FAST_BALL_SPEED: f32 = 300.0;

    /// Ball defaults
    pub const BALL_SERVE_SPEED: f32 = 300.0;
    pub const MAX_BALL_SPEED: f32 = 1200.0;
    /// Horizontal speed floor applied every frame
    pub const MIN_BALL_SPEED_X: f32 = 100.0;
    /// |vy| / |vx| above this counts as a vertical loop
    pub const MAX_VERTICALITY: f32 = 2.5;
    pub const VERTICALITY_KICK: f32 = 1.5;

    /// Floor bounce anti-stall
    pub const FLOOR_REBOUND_BASE: f32 = 250.0;
    pub const FLOOR_REBOUND_GRAVITY: f32 = 0.8;
    pub const FLOOR_SLOW_SPEED_X: f32 = 200.0;
    pub const FLOOR_KICK_X: f32 = 1.2;
    pub const FLOOR_MIN_SPEED_X: f32 = 150.0;

    /// Stuck-ball watchdog
    pub const STUCK_THRESHOLD: f32 = 1.0;
    /// Near-floor band height in ball radii
    pub const STUCK_BAND_RADII: f32 = 3.0;
    pub const STUCK_LAUNCH_SPEED: f32 = 800.0;
    pub const STUCK_LAUNCH_SPREAD: f32 = 400.0;
    pub const STUCK_KICK_X: f32 = 1.5;
    pub const SCREEN_SHAKE_KICK: f32 = 15.0;
    pub const SCREEN_SHAKE_DECAY: f32 = 0.9;
    pub const SCREEN_SHAKE_CUTOFF: f32 = 0.5;

    /// Paddle hit response
    pub const HIT_BASE_SPEED: f32 = 400.0;
    pub const HIT_CARRY: f32 = 0.2;
    pub const HIT_MAX_BASE_SPEED: f32 = 600.0;
    pub const REVERSE_HIT_SCALE: f32 = 0.7;
    /// Paddle moving faster than this toward its own goal turns a front hit into a reverse hit
    pub const REVERSE_PADDLE_SPEED: f32 = 400.0;
    pub const MOMENTUM_MIN_PADDLE_SPEED: f32 = 50.0;
    pub const MOMENTUM_TOWARD_GAIN: f32 = 0.5;
    pub const MOMENTUM_TOWARD_CAP: f32 = 1.5;
    pub const MOMENTUM_AWAY_GAIN: f32 = 0.25;
    pub const MOMENTUM_AWAY_CAP: f32 = 1.25;
    pub const HARD_HIT_MOMENTUM: f32 = 1.3;
    /// Deflection spread as a fraction of PI
    pub const DEFLECTION_SPREAD: f32 = 0.6;
    pub const SPIN_TRANSFER: f32 = 0.3;

    /// Boost
    pub const BOOST_FACTOR: f32 = 2.25;
    pub const BOOST_COOLDOWN: f32 = 3.0;
    pub const BOOST_AREA_DURATION: f32 = 0.5;
    pub const BOOST_AREA_SIZE: f32 = 100.0;
    pub const BOOST_NUDGE: f32 = 0.5;

    /// Scoring bounce-back
    pub const SCORE_RETURN_FACTOR: f32 = 1.1;
    /// Full width of the random vertical perturbation (±half)
    pub const SCORE_VERTICAL_JITTER: f32 = 200.0;

    /// Portals
    pub const MAX_PORTALS: usize = 3;
    /// Lifetime in frames, not seconds
    pub const PORTAL_LIFETIME_FRAMES: u32 = 500;
    pub const PORTAL_PULSE_STEP: f32 = 0.05;
    /// Portal radius in ball radii
    pub const PORTAL_RADIUS_BALLS: f32 = 2.0;
    /// Minimum spacing between portals in portal radii
    pub const PORTAL_SEPARATION_RADII: f32 = 4.0;
    /// Keep-out distance in front of each paddle face
    pub const PORTAL_GOAL_MARGIN: f32 = 50.0;
}
