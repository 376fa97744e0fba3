//! Events recorded by the engine for the presentation layer.
//!
//! The engine never draws or prints. Frontends drain these after each call
//! and map them to log lines, popups, and sounds.

use super::deferred::SkillKind;
use super::state::EndReason;
use crate::board::Position;
use crate::matching::FailureReason;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EngineEvent {
    // ── Round lifecycle ─────────────────────────────────────────
    RoundStarted {
        epoch: u64,
        rows: usize,
        cols: usize,
    },
    RoundEnded {
        reason: EndReason,
        score: u64,
    },

    // ── Matches ─────────────────────────────────────────────────
    MatchCleared {
        tiles: usize,
        score_gained: u64,
        combo: u32,
        multiplier: f64,
    },
    MatchFailed {
        reason: FailureReason,
    },
    BombDetonated {
        center: Position,
        extra_cleared: usize,
    },
    TimeGranted {
        seconds: u32,
    },
    GoldenBonus {
        golden_tiles: usize,
    },

    // ── Board recovery ──────────────────────────────────────────
    DeadlockReshuffled {
        alive_tiles: usize,
    },

    // ── Skills and timers ───────────────────────────────────────
    SkillUsed {
        kind: SkillKind,
        remaining: u32,
    },
    HintExpired,
    FreezeEnded,
}

impl EngineEvent {
    /// One-line description for logs.
    pub fn message(&self) -> String {
        match self {
            EngineEvent::RoundStarted { epoch, rows, cols } => {
                format!("Round {} started on a {}x{} board", epoch, rows, cols)
            }
            EngineEvent::RoundEnded { reason, score } => match reason {
                EndReason::TimeUp => format!("Time's up! Final score: {}", score),
                EndReason::BoardCleared => format!("Board cleared! Final score: {}", score),
            },
            EngineEvent::MatchCleared {
                tiles,
                score_gained,
                combo,
                multiplier,
            } => {
                if *combo > 1 {
                    format!(
                        "Cleared {} tiles for {} points ({} combo, x{})",
                        tiles, score_gained, combo, multiplier
                    )
                } else {
                    format!("Cleared {} tiles for {} points", tiles, score_gained)
                }
            }
            EngineEvent::MatchFailed { reason } => match reason {
                FailureReason::TooFew { .. } => "Select at least two tiles".to_string(),
                FailureReason::SumMismatch { effective_sum } => {
                    format!("Sum is {}, not 10", effective_sum)
                }
                FailureReason::RoundNotRunning => "No round in progress".to_string(),
            },
            EngineEvent::BombDetonated {
                center,
                extra_cleared,
            } => format!(
                "BOOM! Bomb at ({}, {}) cleared {} more tiles",
                center.0, center.1, extra_cleared
            ),
            EngineEvent::TimeGranted { seconds } => format!("+{} seconds", seconds),
            EngineEvent::GoldenBonus { golden_tiles } => {
                format!("Golden x{} score bonus", 1u64 << (*golden_tiles).min(63))
            }
            EngineEvent::DeadlockReshuffled { alive_tiles } => {
                format!("No moves left, reshuffled {} tiles", alive_tiles)
            }
            EngineEvent::SkillUsed { kind, remaining } => {
                format!("{} used ({} left)", kind.name(), remaining)
            }
            EngineEvent::HintExpired => "Hint faded".to_string(),
            EngineEvent::FreezeEnded => "Clock resumed".to_string(),
        }
    }
}
