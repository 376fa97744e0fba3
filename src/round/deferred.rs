//! Skills and the timed actions they leave behind.
//!
//! The engine owns no timers. A skill with a lasting effect returns a
//! [`DeferredAction`] that the caller's scheduler hands back to
//! `PuzzleEngine::fire_deferred` once `delay` has elapsed. Each action is
//! stamped with the round epoch and is ignored if that round is gone.

use crate::board::Position;
use crate::core::constants::{FREEZE_DURATION_SECONDS, HINT_DURATION_SECONDS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillKind {
    /// Highlight one clearable rectangle
    Hint,
    /// Stop the clock for a few seconds
    FreezeTime,
    /// Redraw every alive tile's value
    Reshuffle,
}

impl SkillKind {
    pub const ALL: [SkillKind; 3] = [SkillKind::Hint, SkillKind::FreezeTime, SkillKind::Reshuffle];

    pub fn name(&self) -> &'static str {
        match self {
            SkillKind::Hint => "Hint",
            SkillKind::FreezeTime => "Freeze Time",
            SkillKind::Reshuffle => "Reshuffle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeferredKind {
    /// Remove the highlight placed by a hint.
    ClearHint { positions: Vec<Position> },
    /// Restart the clock, unless a newer freeze superseded this one.
    EndFreeze { generation: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeferredAction {
    /// Round the action belongs to.
    pub epoch: u64,
    pub delay: Duration,
    pub kind: DeferredKind,
}

impl DeferredAction {
    pub fn clear_hint(epoch: u64, positions: Vec<Position>) -> Self {
        Self {
            epoch,
            delay: Duration::from_secs(HINT_DURATION_SECONDS),
            kind: DeferredKind::ClearHint { positions },
        }
    }

    pub fn end_freeze(epoch: u64, generation: u64) -> Self {
        Self {
            epoch,
            delay: Duration::from_secs(FREEZE_DURATION_SECONDS),
            kind: DeferredKind::EndFreeze { generation },
        }
    }
}

/// Outcome of a skill request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillResult {
    /// False when the skill had no charges, no target, or no running round.
    pub applied: bool,
    pub affected_positions: Vec<Position>,
    pub deferred: Option<DeferredAction>,
}

impl SkillResult {
    pub fn unavailable() -> Self {
        Self::default()
    }
}
