//! Headless auto-play for balance analysis.
//!
//! Plays many rounds with a scripted player that always takes the first
//! clearable rectangle, then aggregates the results. Runs drive the real
//! `PuzzleEngine`, so numbers match interactive play.

mod config;
mod report;
mod runner;
mod scheduler;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_round};
pub use scheduler::DeferredQueue;
