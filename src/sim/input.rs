//! Per-frame control intents
//!
//! The host maps keys (or anything else) onto these; the simulation never
//! sees raw input events.

use serde::{Deserialize, Serialize};

use super::state::Side;
use crate::consts::DEFAULT_AI_DIFFICULTY;

/// Who drives which paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Human on the left (either key set), AI on the right
    #[default]
    SinglePlayer,
    /// One human per paddle
    TwoPlayer,
    /// AI on both sides (attract loop)
    Demo,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::SinglePlayer => "single-player",
            GameMode::TwoPlayer => "two-player",
            GameMode::Demo => "demo",
        }
    }

    /// Whether the paddle on `side` is steered by the AI
    pub fn ai_controls(&self, side: Side) -> bool {
        match self {
            GameMode::SinglePlayer => side == Side::Right,
            GameMode::TwoPlayer => false,
            GameMode::Demo => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalIntent {
    #[default]
    None,
    Up,
    Down,
}

impl VerticalIntent {
    /// -1 toward y = 0, +1 toward the floor
    pub fn axis(&self) -> Option<f32> {
        match self {
            VerticalIntent::None => None,
            VerticalIntent::Up => Some(-1.0),
            VerticalIntent::Down => Some(1.0),
        }
    }

    /// Up wins over Down, anything wins over None
    fn merge(self, other: Self) -> Self {
        match (self, other) {
            (VerticalIntent::Up, _) | (_, VerticalIntent::Up) => VerticalIntent::Up,
            (VerticalIntent::Down, _) | (_, VerticalIntent::Down) => VerticalIntent::Down,
            _ => VerticalIntent::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HorizontalIntent {
    #[default]
    None,
    Left,
    Right,
}

impl HorizontalIntent {
    pub fn axis(&self) -> Option<f32> {
        match self {
            HorizontalIntent::None => None,
            HorizontalIntent::Left => Some(-1.0),
            HorizontalIntent::Right => Some(1.0),
        }
    }

    fn merge(self, other: Self) -> Self {
        match (self, other) {
            (HorizontalIntent::Left, _) | (_, HorizontalIntent::Left) => HorizontalIntent::Left,
            (HorizontalIntent::Right, _) | (_, HorizontalIntent::Right) => HorizontalIntent::Right,
            _ => HorizontalIntent::None,
        }
    }
}

/// Intents for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlIntents {
    pub left_vertical: VerticalIntent,
    pub left_horizontal: HorizontalIntent,
    pub right_vertical: VerticalIntent,
    pub right_horizontal: HorizontalIntent,
    /// Edge-triggered: true only on the frame the key went down
    pub left_boost: bool,
    pub right_boost: bool,
    pub mode: GameMode,
    /// AI skill in [0, 1]
    pub ai_difficulty: f32,
}

impl Default for ControlIntents {
    fn default() -> Self {
        Self {
            left_vertical: VerticalIntent::None,
            left_horizontal: HorizontalIntent::None,
            right_vertical: VerticalIntent::None,
            right_horizontal: HorizontalIntent::None,
            left_boost: false,
            right_boost: false,
            mode: GameMode::SinglePlayer,
            ai_difficulty: DEFAULT_AI_DIFFICULTY,
        }
    }
}

/// Intents resolved for one human-driven paddle
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SideIntent {
    pub vertical: VerticalIntent,
    pub horizontal: HorizontalIntent,
    pub boost: bool,
}

impl ControlIntents {
    /// Neutral intents for a mode
    pub fn idle(mode: GameMode, ai_difficulty: f32) -> Self {
        Self {
            mode,
            ai_difficulty,
            ..Default::default()
        }
    }

    /// Difficulty clamped into [0, 1]; NaN falls back to the default
    pub fn difficulty(&self) -> f32 {
        if self.ai_difficulty.is_nan() {
            DEFAULT_AI_DIFFICULTY
        } else {
            self.ai_difficulty.clamp(0.0, 1.0)
        }
    }

    /// Human intents for `side`, or `None` when the AI drives it
    pub fn for_side(&self, side: Side) -> Option<SideIntent> {
        if self.mode.ai_controls(side) {
            return None;
        }
        let left = SideIntent {
            vertical: self.left_vertical,
            horizontal: self.left_horizontal,
            boost: self.left_boost,
        };
        let right = SideIntent {
            vertical: self.right_vertical,
            horizontal: self.right_horizontal,
            boost: self.right_boost,
        };
        match (self.mode, side) {
            // Lone human accepts either key set
            (GameMode::SinglePlayer, Side::Left) => Some(SideIntent {
                vertical: left.vertical.merge(right.vertical),
                horizontal: left.horizontal.merge(right.horizontal),
                boost: left.boost || right.boost,
            }),
            (_, Side::Left) => Some(left),
            (_, Side::Right) => Some(right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_player_keeps_sides_apart() {
        let intents = ControlIntents {
            left_vertical: VerticalIntent::Up,
            right_vertical: VerticalIntent::Down,
            right_boost: true,
            mode: GameMode::TwoPlayer,
            ..Default::default()
        };
        let left = intents.for_side(Side::Left).unwrap();
        let right = intents.for_side(Side::Right).unwrap();
        assert_eq!(left.vertical, VerticalIntent::Up);
        assert!(!left.boost);
        assert_eq!(right.vertical, VerticalIntent::Down);
        assert!(right.boost);
    }

    #[test]
    fn test_single_player_merges_key_sets() {
        let intents = ControlIntents {
            right_vertical: VerticalIntent::Down,
            right_horizontal: HorizontalIntent::Right,
            right_boost: true,
            mode: GameMode::SinglePlayer,
            ..Default::default()
        };
        let human = intents.for_side(Side::Left).unwrap();
        assert_eq!(human.vertical, VerticalIntent::Down);
        assert_eq!(human.horizontal, HorizontalIntent::Right);
        assert!(human.boost);
        assert!(intents.for_side(Side::Right).is_none());
    }

    #[test]
    fn test_up_beats_down_when_merged() {
        assert_eq!(
            VerticalIntent::Down.merge(VerticalIntent::Up),
            VerticalIntent::Up
        );
        assert_eq!(
            HorizontalIntent::Right.merge(HorizontalIntent::Left),
            HorizontalIntent::Left
        );
    }

    #[test]
    fn test_demo_has_no_humans() {
        let intents = ControlIntents::idle(GameMode::Demo, 0.5);
        assert!(intents.for_side(Side::Left).is_none());
        assert!(intents.for_side(Side::Right).is_none());
    }

    #[test]
    fn test_difficulty_is_clamped() {
        let mut intents = ControlIntents::default();
        intents.ai_difficulty = 3.0;
        assert_eq!(intents.difficulty(), 1.0);
        intents.ai_difficulty = f32::NAN;
        assert_eq!(intents.difficulty(), DEFAULT_AI_DIFFICULTY);
    }
}
