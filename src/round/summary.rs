//! End-of-round statistics.

use super::state::{EndReason, RoundState};
use crate::core::constants::POINTS_PER_TILE;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub score: u64,
    pub played_seconds: u32,
    pub attempts: u32,
    /// Score relative to a plain 10-point clear per attempt, in percent.
    pub efficiency_percent: u32,
    pub max_combo: u32,
    pub matches: u32,
    pub tiles_cleared: u32,
    pub cleared_board: bool,
}

/// `round(score / (attempts * 10) * 100)`, or 0 with no attempts.
pub fn efficiency_percent(score: u64, attempts: u32) -> u32 {
    if attempts == 0 {
        return 0;
    }
    let ratio = score as f64 / (attempts as u64 * POINTS_PER_TILE) as f64;
    (ratio * 100.0).round() as u32
}

impl RoundSummary {
    pub fn from_state(state: &RoundState) -> Self {
        Self {
            score: state.score,
            played_seconds: state.played_seconds(),
            attempts: state.attempts,
            efficiency_percent: efficiency_percent(state.score, state.attempts),
            max_combo: state.max_combo,
            matches: state.matches,
            tiles_cleared: state.tiles_cleared,
            cleared_board: state.end_reason == Some(EndReason::BoardCleared),
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Final score:  {}\n", self.score));
        out.push_str(&format!("Played:       {}s\n", self.played_seconds));
        out.push_str(&format!("Attempts:     {}\n", self.attempts));
        out.push_str(&format!("Efficiency:   {}%\n", self.efficiency_percent));
        out.push_str(&format!("Max combo:    {}\n", self.max_combo));
        out.push_str(&format!(
            "Cleared:      {} tiles in {} matches{}\n",
            self.tiles_cleared,
            self.matches,
            if self.cleared_board { " (board cleared)" } else { "" }
        ));
        out
    }
}
