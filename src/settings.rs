//! Match settings
//!
//! Loaded from JSON. Every field has a default, so a partial file (or none at
//! all) is fine.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::GameMode;

/// Settings could not be loaded or are out of range
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("ai level {0} is outside [0, 1]")]
    AiLevelOutOfRange(f32),

    #[error("container width {0} must be positive")]
    InvalidContainerWidth(f32),
}

/// AI skill presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// AI level in [0, 1]
    pub fn level(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.4,
            Difficulty::Medium => 0.7,
            Difficulty::Hard => 0.9,
        }
    }
}

/// Arena proportions relative to the container width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MapSize {
    Small,
    #[default]
    Normal,
    Large,
}

impl MapSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            MapSize::Small => "Small",
            MapSize::Normal => "Normal",
            MapSize::Large => "Large",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "small" => Some(MapSize::Small),
            "normal" => Some(MapSize::Normal),
            "large" => Some(MapSize::Large),
            _ => None,
        }
    }

    /// (width ratio, height ratio)
    pub fn ratios(&self) -> (f32, f32) {
        match self {
            MapSize::Small => (0.8, 0.5),
            MapSize::Normal => (1.0, 0.6),
            MapSize::Large => (1.2, 0.7),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Explicit AI level; overrides `difficulty` when set
    pub ai_level: Option<f32>,
    pub map_size: MapSize,
    /// Width of the hosting container in units
    pub container_width: f32,
    pub portals: bool,
    /// Fixed RNG seed for reproducible matches
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: GameMode::SinglePlayer,
            difficulty: Difficulty::Medium,
            ai_level: None,
            map_size: MapSize::Normal,
            container_width: 1000.0,
            portals: true,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(level) = self.ai_level {
            if !(0.0..=1.0).contains(&level) {
                return Err(SettingsError::AiLevelOutOfRange(level));
            }
        }
        if !(self.container_width > 0.0 && self.container_width.is_finite()) {
            return Err(SettingsError::InvalidContainerWidth(self.container_width));
        }
        Ok(())
    }

    /// Effective AI level
    pub fn ai_difficulty(&self) -> f32 {
        self.ai_level.unwrap_or_else(|| self.difficulty.level())
    }

    /// Arena (width, height) for the container and map size
    pub fn arena_size(&self) -> (f32, f32) {
        let (w, h) = self.map_size.ratios();
        (self.container_width * w, self.container_width * h)
    }
}
