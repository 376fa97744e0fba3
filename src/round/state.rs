//! Round state owned by the engine.

use crate::core::config::{RoundConfig, SkillCharges};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No round started yet
    Idle,
    /// Clock running, selections accepted
    Running,
    /// Timer ran out or the board was cleared
    Ended,
}

/// Why a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    TimeUp,
    BoardCleared,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub phase: RoundPhase,
    pub score: u64,
    pub time_remaining_seconds: u32,
    /// Consecutive successful matches; reset by any failed attempt.
    pub combo: u32,
    pub max_combo: u32,
    pub skill_charges: SkillCharges,
    /// Clock is suspended by the freeze-time skill.
    pub freeze_active: bool,
    pub end_reason: Option<EndReason>,
    /// Resolution attempts made while running (successful or not).
    pub attempts: u32,
    pub matches: u32,
    /// Tiles removed by matches and bomb blasts.
    pub tiles_cleared: u32,
    pub duration_seconds: u32,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            phase: RoundPhase::Idle,
            score: 0,
            time_remaining_seconds: 0,
            combo: 0,
            max_combo: 0,
            skill_charges: SkillCharges::none(),
            freeze_active: false,
            end_reason: None,
            attempts: 0,
            matches: 0,
            tiles_cleared: 0,
            duration_seconds: 0,
        }
    }
}

impl RoundState {
    /// Fresh running state for a new round.
    pub fn start(config: &RoundConfig) -> Self {
        Self {
            phase: RoundPhase::Running,
            time_remaining_seconds: config.duration_seconds,
            skill_charges: config.skill_charges,
            duration_seconds: config.duration_seconds,
            ..Default::default()
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == RoundPhase::Running
    }

    pub fn is_ended(&self) -> bool {
        self.phase == RoundPhase::Ended
    }

    pub(crate) fn end(&mut self, reason: EndReason) {
        self.phase = RoundPhase::Ended;
        self.end_reason = Some(reason);
        self.freeze_active = false;
    }

    /// Seconds actually played. Time bonuses can push the clock past the
    /// configured duration, so this saturates at zero.
    pub fn played_seconds(&self) -> u32 {
        self.duration_seconds
            .saturating_sub(self.time_remaining_seconds)
    }
}
