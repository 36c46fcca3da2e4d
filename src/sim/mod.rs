//! Match simulation
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Randomness only through the RNG handed in by the caller
//! - One `tick` per host frame, subsystems in a fixed order
//! - Events returned in production order

pub mod ai;
pub mod boost;
pub mod collision;
pub mod dimension;
pub mod events;
pub mod input;
pub mod kinematics;
pub mod paddle;
pub mod portal;
pub mod scoring;
pub mod simulation;
pub mod state;
pub mod tick;
pub mod watchdog;

pub use collision::{PaddleContact, WallContact};
pub use dimension::{DIMENSIONS, Dimension, DimensionId, ParticleKind};
pub use events::{EventKind, GameEvent};
pub use input::{ControlIntents, GameMode, HorizontalIntent, SideIntent, VerticalIntent};
pub use simulation::MatchSimulation;
pub use state::{Arena, Ball, BoostState, MatchState, Paddle, Portal, Score, Side};
pub use tick::tick;
