//! Physics regimes ("dimensions")
//!
//! Four fixed configuration records. The match switches between them through
//! portals; nothing ever mutates a record.

use serde::{Deserialize, Serialize};

/// Particle style a renderer should use for effects emitted in a dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    None,
    Glow,
    Fire,
    Lightning,
}

impl ParticleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticleKind::None => "none",
            ParticleKind::Glow => "glow",
            ParticleKind::Fire => "fire",
            ParticleKind::Lightning => "lightning",
        }
    }

    pub fn is_visible(&self) -> bool {
        *self != ParticleKind::None
    }
}

/// Dimension identifier (1-based, matches the in-game display)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DimensionId {
    #[default]
    Prime,
    Floaty,
    Heavy,
    Chaos,
}

impl DimensionId {
    pub const ALL: [DimensionId; 4] = [
        DimensionId::Prime,
        DimensionId::Floaty,
        DimensionId::Heavy,
        DimensionId::Chaos,
    ];

    /// Resolve a raw 1-based id, wrapping anything out of range back into 1..=4
    pub fn from_raw(raw: u32) -> Self {
        let index = (raw as i64 - 1).rem_euclid(Self::ALL.len() as i64);
        Self::ALL[index as usize]
    }

    pub fn raw(&self) -> u32 {
        self.index() as u32 + 1
    }

    fn index(&self) -> usize {
        match self {
            DimensionId::Prime => 0,
            DimensionId::Floaty => 1,
            DimensionId::Heavy => 2,
            DimensionId::Chaos => 3,
        }
    }

    pub fn config(&self) -> &'static Dimension {
        &DIMENSIONS[self.index()]
    }
}

/// Immutable physics constants for one dimension
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimension {
    pub id: DimensionId,
    pub name: &'static str,
    /// Ball colour hint for renderers (#rrggbb)
    pub ball_color: &'static str,
    /// Downward acceleration (units/s²)
    pub gravity: f32,
    /// Per-frame velocity multiplier
    pub friction: f32,
    pub paddle_bounce: f32,
    pub wall_bounce: f32,
    /// Trail points kept for the ball (0 = no trail)
    pub trail_length: usize,
    /// Per-frame probability of a portal spawn attempt
    pub portal_spawn_chance: f32,
    pub particle: ParticleKind,
}

pub static DIMENSIONS: [Dimension; 4] = [
    Dimension {
        id: DimensionId::Prime,
        name: "Prime",
        ball_color: "#ffffff",
        gravity: 0.0,
        friction: 1.0,
        paddle_bounce: 1.05,
        wall_bounce: 1.0,
        trail_length: 0,
        portal_spawn_chance: 0.003,
        particle: ParticleKind::None,
    },
    Dimension {
        id: DimensionId::Floaty,
        name: "Floaty",
        ball_color: "#80ffff",
        gravity: 60.0,
        friction: 0.995,
        paddle_bounce: 1.15,
        wall_bounce: 1.25,
        trail_length: 5,
        portal_spawn_chance: 0.005,
        particle: ParticleKind::Glow,
    },
    Dimension {
        id: DimensionId::Heavy,
        name: "Heavy",
        ball_color: "#ff80ff",
        gravity: 300.0,
        friction: 0.995,
        paddle_bounce: 1.2,
        wall_bounce: 1.15,
        trail_length: 8,
        portal_spawn_chance: 0.008,
        particle: ParticleKind::Fire,
    },
    Dimension {
        id: DimensionId::Chaos,
        name: "Chaos",
        ball_color: "#ff8040",
        gravity: 120.0,
        friction: 0.995,
        paddle_bounce: 1.3,
        wall_bounce: 1.4,
        trail_length: 15,
        portal_spawn_chance: 0.01,
        particle: ParticleKind::Lightning,
    },
];
