//! Simulation report generation.

use crate::round::{EngineEvent, RoundSummary};
use serde::Serialize;

/// Statistics from a single simulated round.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunStats {
    pub score: u64,
    pub matches: u32,
    pub attempts: u32,
    pub max_combo: u32,
    pub tiles_cleared: u32,
    pub cleared_board: bool,
    pub played_seconds: u32,
    pub efficiency_percent: u32,

    // Tallied from engine events
    pub reshuffles: u32,
    pub skills_used: u32,
    pub time_bonus_seconds: u32,
    pub bombs: u32,
    pub golden_matches: u32,

    pub moves: u32,
}

impl RunStats {
    /// Fold one engine event into the running tallies.
    pub fn record_event(&mut self, event: &EngineEvent) {
        match event {
            EngineEvent::DeadlockReshuffled { .. } => self.reshuffles += 1,
            EngineEvent::TimeGranted { seconds } => self.time_bonus_seconds += seconds,
            EngineEvent::BombDetonated { .. } => self.bombs += 1,
            EngineEvent::GoldenBonus { .. } => self.golden_matches += 1,
            _ => {}
        }
    }

    /// Copy the end-of-round numbers from the engine's summary.
    pub fn finish(&mut self, summary: &RoundSummary, moves: u32) {
        self.score = summary.score;
        self.matches = summary.matches;
        self.attempts = summary.attempts;
        self.max_combo = summary.max_combo;
        self.tiles_cleared = summary.tiles_cleared;
        self.cleared_board = summary.cleared_board;
        self.played_seconds = summary.played_seconds;
        self.efficiency_percent = summary.efficiency_percent;
        self.moves = moves;
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub boards_cleared: u32,

    // Aggregated stats
    pub avg_score: f64,
    pub avg_matches: f64,
    pub avg_max_combo: f64,
    pub avg_tiles_cleared: f64,
    pub avg_played_seconds: f64,
    pub avg_efficiency: f64,
    pub avg_time_bonus: f64,
    pub avg_bombs: f64,
    pub avg_reshuffles: f64,
    pub min_score: u64,
    pub max_score: u64,

    // Individual run stats for detailed analysis
    pub run_stats: Vec<RunStats>,
}

fn average(runs: &[RunStats], field: impl Fn(&RunStats) -> f64) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(field).sum::<f64>() / runs.len() as f64
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let boards_cleared = runs.iter().filter(|r| r.cleared_board).count() as u32;

        Self {
            num_runs,
            boards_cleared,
            avg_score: average(&runs, |r| r.score as f64),
            avg_matches: average(&runs, |r| r.matches as f64),
            avg_max_combo: average(&runs, |r| r.max_combo as f64),
            avg_tiles_cleared: average(&runs, |r| r.tiles_cleared as f64),
            avg_played_seconds: average(&runs, |r| r.played_seconds as f64),
            avg_efficiency: average(&runs, |r| r.efficiency_percent as f64),
            avg_time_bonus: average(&runs, |r| r.time_bonus_seconds as f64),
            avg_bombs: average(&runs, |r| r.bombs as f64),
            avg_reshuffles: average(&runs, |r| r.reshuffles as f64),
            min_score: runs.iter().map(|r| r.score).min().unwrap_or(0),
            max_score: runs.iter().map(|r| r.score).max().unwrap_or(0),
            run_stats: runs,
        }
    }

    pub fn clear_rate(&self) -> f64 {
        if self.num_runs == 0 {
            return 0.0;
        }
        self.boards_cleared as f64 / self.num_runs as f64 * 100.0
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} boards cleared ({:.1}%)\n\n",
            self.num_runs,
            self.boards_cleared,
            self.clear_rate()
        ));

        report.push_str("── SCORING ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Score:         {:.1}\n", self.avg_score));
        report.push_str(&format!(
            "  Score Range:       {} - {}\n",
            self.min_score, self.max_score
        ));
        report.push_str(&format!("  Avg Efficiency:    {:.1}%\n", self.avg_efficiency));
        report.push_str(&format!("  Avg Max Combo:     {:.2}\n\n", self.avg_max_combo));

        report.push_str("── BOARD ────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Matches:       {:.1}\n", self.avg_matches));
        report.push_str(&format!(
            "  Avg Tiles Cleared: {:.1}\n",
            self.avg_tiles_cleared
        ));
        report.push_str(&format!("  Avg Bombs:         {:.2}\n", self.avg_bombs));
        report.push_str(&format!(
            "  Avg Auto-Reshuffles: {:.2}\n\n",
            self.avg_reshuffles
        ));

        report.push_str("── CLOCK ────────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Played:        {:.1}s\n",
            self.avg_played_seconds
        ));
        report.push_str(&format!("  Avg Time Bonus:    {:.1}s\n", self.avg_time_bonus));

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
