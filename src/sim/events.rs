//! Events emitted during a frame, in production order
//!
//! A renderer turns these into particles, sounds and HUD updates.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::dimension::{DimensionId, ParticleKind};
use super::state::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    WallBounce,
    PaddleHit { side: Side, reverse: bool },
    /// Extra burst when a paddle hit carries high momentum
    HardHit { side: Side },
    /// Fire burst on a hit that sends the ball home, in every dimension
    ReverseHit { side: Side },
    Score { scorer: Side },
    PortalTransit { dimension: DimensionId },
    BoostArmed { side: Side },
    BoostTrigger { side: Side },
    StuckRecovery,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    pub kind: EventKind,
    pub pos: Vec2,
    pub particle: ParticleKind,
    /// Number of particle emissions the effect asks for
    pub burst: u16,
}

impl GameEvent {
    pub fn new(kind: EventKind, pos: Vec2, particle: ParticleKind, burst: u16) -> Self {
        Self {
            kind,
            pos,
            particle,
            burst,
        }
    }
}
