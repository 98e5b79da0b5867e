use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ai::Difficulty;
use crate::error::ConfigError;
use crate::game::{Player, MAX_DIM, MIN_DIM};

/// Whether both sides are human, or one is the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Two players at the same machine.
    Pvp,
    /// One human versus the AI.
    Pva,
}

/// Match settings, loadable from a TOML file or the host's persisted
/// JSON blob. Unknown fields in the blob (theme and the like) are
/// ignored; missing fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameSettings {
    pub mode: Mode,
    pub difficulty: Difficulty,
    /// Side the human controls in [`Mode::Pva`]; ignored in pvp.
    pub play_as: Player,
    pub red_name: String,
    pub yellow_name: String,
    pub rows: usize,
    pub cols: usize,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            mode: Mode::Pvp,
            difficulty: Difficulty::Medium,
            play_as: Player::Red,
            red_name: "Player 1".to_string(),
            yellow_name: "Player 2".to_string(),
            rows: 6,
            cols: 7,
        }
    }
}

impl GameSettings {
    /// The computer-controlled side, if any.
    pub fn ai_side(&self) -> Option<Player> {
        match self.mode {
            Mode::Pvp => None,
            Mode::Pva => Some(self.play_as.other()),
        }
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let settings: GameSettings = toml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Parse settings from the host's persisted JSON blob.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize settings for host persistence.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("settings serialize")
    }

    /// Validate settings values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_DIM..=MAX_DIM).contains(&self.rows) {
            return Err(ConfigError::Validation(format!(
                "rows must be in {MIN_DIM}..={MAX_DIM}, got {}",
                self.rows
            )));
        }
        if !(MIN_DIM..=MAX_DIM).contains(&self.cols) {
            return Err(ConfigError::Validation(format!(
                "cols must be in {MIN_DIM}..={MAX_DIM}, got {}",
                self.cols
            )));
        }
        Ok(())
    }

    /// Sanitized copy: dimensions clamped into range, blank names
    /// replaced with defaults.
    pub fn normalized(&self) -> Self {
        let defaults = Self::default();
        let pick_name = |name: &str, fallback: String| {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                fallback
            } else {
                trimmed.to_string()
            }
        };
        GameSettings {
            rows: self.rows.clamp(MIN_DIM, MAX_DIM),
            cols: self.cols.clamp(MIN_DIM, MAX_DIM),
            red_name: pick_name(&self.red_name, defaults.red_name),
            yellow_name: pick_name(&self.yellow_name, defaults.yellow_name),
            ..self.clone()
        }
    }
}
