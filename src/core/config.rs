//! Round configuration: grid size, clock, and starting skill charges.
//!
//! Configs can be built in code or loaded from JSON. Missing JSON fields
//! fall back to the defaults of the classic 17x10, 60-second round.

use super::constants::{
    DEFAULT_COLS, DEFAULT_FREEZE_CHARGES, DEFAULT_HINT_CHARGES, DEFAULT_RESHUFFLE_CHARGES,
    DEFAULT_ROUND_SECONDS, DEFAULT_ROWS, MAX_GRID_DIMENSION,
};
use super::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Remaining uses of each skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCharges {
    pub hint: u32,
    pub freeze_time: u32,
    pub reshuffle: u32,
}

impl Default for SkillCharges {
    fn default() -> Self {
        Self {
            hint: DEFAULT_HINT_CHARGES,
            freeze_time: DEFAULT_FREEZE_CHARGES,
            reshuffle: DEFAULT_RESHUFFLE_CHARGES,
        }
    }
}

impl SkillCharges {
    pub fn none() -> Self {
        Self {
            hint: 0,
            freeze_time: 0,
            reshuffle: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    pub rows: usize,
    pub cols: usize,
    pub duration_seconds: u32,
    pub skill_charges: SkillCharges,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            duration_seconds: DEFAULT_ROUND_SECONDS,
            skill_charges: SkillCharges::default(),
        }
    }
}

impl RoundConfig {
    /// Config with the given grid size and default clock/skills.
    pub fn with_grid(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Default::default()
        }
    }

    /// Reject configs the engine cannot run.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(EngineError::InvalidConfig(format!(
                "grid must have at least one row and column, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.rows > MAX_GRID_DIMENSION || self.cols > MAX_GRID_DIMENSION {
            return Err(EngineError::InvalidConfig(format!(
                "grid {}x{} exceeds the {} cell limit per side",
                self.rows, self.cols, MAX_GRID_DIMENSION
            )));
        }
        if self.duration_seconds == 0 {
            return Err(EngineError::InvalidConfig(
                "round duration must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
