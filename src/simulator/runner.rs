//! Main simulation runner driving the real `PuzzleEngine`.
//!
//! Statistics are tracked from the engine's reports and events rather than
//! by re-implementing any game rules here.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use super::scheduler::DeferredQueue;
use crate::board::find_solvable_subrect;
use crate::core::error::Result;
use crate::round::{PuzzleEngine, SkillKind};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport> {
    config.round.validate()?;
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        // Create RNG for this run
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run_stats = simulate_single_round(config, &mut rng)?;

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Score {}, Matches {}, Max Combo {}, Cleared {}, Played {}s",
                run_idx + 1,
                config.num_runs,
                run_stats.score,
                run_stats.matches,
                run_stats.max_combo,
                run_stats.tiles_cleared,
                run_stats.played_seconds
            );
        }
        all_runs.push(run_stats);
    }

    Ok(SimReport::from_runs(all_runs))
}

/// Play one round with the scripted player.
///
/// Each step the simulated clock advances by `seconds_per_move`, due deferred
/// actions fire, the engine ticks, and the player acts: clear the first
/// clearable rectangle, or spend a reshuffle when nothing is clearable. The
/// freeze skill is used once the clock drops below half the duration.
pub fn simulate_single_round(config: &SimConfig, rng: &mut impl Rng) -> Result<RunStats> {
    let mut engine = PuzzleEngine::new();
    engine.start_round(&config.round, rng)?;

    let mut queue = DeferredQueue::new();
    let mut clock = Duration::ZERO;
    let step = Duration::from_secs(config.seconds_per_move.max(1) as u64);
    let mut stats = RunStats::default();
    let mut moves = 0u32;

    while engine.state().is_running() && moves < config.max_moves_per_round {
        moves += 1;
        clock += step;
        queue.fire_due(&mut engine, clock);
        if engine.tick(config.seconds_per_move.max(1)) {
            break;
        }

        if config.use_skills
            && !engine.state().freeze_active
            && engine.state().time_remaining_seconds * 2 < config.round.duration_seconds
        {
            let result = engine.use_skill(SkillKind::FreezeTime, rng);
            if result.applied {
                stats.skills_used += 1;
                if let Some(action) = result.deferred {
                    queue.push(clock, action);
                }
            }
        }

        let target = engine.board().and_then(find_solvable_subrect);
        match target {
            Some(found) => {
                engine.attempt_match(&found.selection, rng)?;
            }
            None => {
                if !config.use_skills || !engine.use_skill(SkillKind::Reshuffle, rng).applied {
                    // Nothing to clear and nothing to spend: wait out the clock.
                    continue;
                }
                stats.skills_used += 1;
            }
        }

        for event in engine.drain_events() {
            stats.record_event(&event);
        }
    }

    for event in engine.drain_events() {
        stats.record_event(&event);
    }
    stats.finish(&engine.summary(), moves);
    Ok(stats)
}
