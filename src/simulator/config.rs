//! Simulation configuration.

use crate::core::config::RoundConfig;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of rounds to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Round settings shared by every run
    pub round: RoundConfig,

    /// Seconds the scripted player spends finding each move
    pub seconds_per_move: u32,

    /// Whether the scripted player spends skill charges
    pub use_skills: bool,

    /// Safety cap on player actions per round
    pub max_moves_per_round: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            round: RoundConfig::default(),
            seconds_per_move: 2,
            use_skills: true,
            max_moves_per_round: 10_000,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for smoke-testing balance changes
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 20,
            seed: Some(seed),
            verbosity: 0,
            ..Default::default()
        }
    }
}
