//! The round controller.
//!
//! `PuzzleEngine` owns the board and round state for one session and is the
//! only thing frontends talk to:
//!
//! - `start_round()` builds a fresh board and resets the round
//! - `attempt_match()` resolves a selection, applies effects, then checks for
//!   a cleared board (round over) or a deadlock (reshuffle once)
//! - `tick()` runs the clock
//! - `use_skill()` / `fire_deferred()` handle skills and their timed expiry
//! - `snapshot()`, `summary()`, `drain_events()` expose state for rendering
//!
//! Everything runs synchronously. Randomness comes in through `&mut impl Rng`
//! so callers choose between seeded and entropy-backed generators.

use super::deferred::{DeferredAction, DeferredKind, SkillKind, SkillResult};
use super::events::EngineEvent;
use super::state::{EndReason, RoundState};
use super::summary::RoundSummary;
use crate::board::{find_solvable_subrect, generate_board, Board, Selection};
use crate::core::config::RoundConfig;
use crate::core::error::Result;
use crate::effects::{apply_failure, apply_success, EffectReport};
use crate::matching::{resolve_selection, FailureReason, MatchOutcome};
use rand::Rng;
use serde::Serialize;

/// Everything that happened as a result of one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub outcome: MatchOutcome,
    /// Present only for successful matches.
    pub effects: Option<EffectReport>,
    /// The board had no clearable rectangle left and was reshuffled.
    pub reshuffled: bool,
    pub round_ended: bool,
}

impl MatchReport {
    fn not_running() -> Self {
        Self {
            outcome: MatchOutcome::Failure {
                reason: FailureReason::RoundNotRunning,
            },
            effects: None,
            reshuffled: false,
            round_ended: false,
        }
    }
}

/// Read-only view for renderers.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    /// `None` before the first round starts.
    pub board: Option<&'a Board>,
    pub round: &'a RoundState,
    pub epoch: u64,
}

#[derive(Debug, Clone, Default)]
pub struct PuzzleEngine {
    board: Option<Board>,
    state: RoundState,
    /// Bumped on every round start; stale deferred actions carry an older value.
    epoch: u64,
    /// Bumped on every freeze so only the latest expiry restarts the clock.
    freeze_generation: u64,
    events: Vec<EngineEvent>,
}

impl PuzzleEngine {
    /// An idle engine with no board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new round on a freshly generated board.
    ///
    /// A board generated without any clearable rectangle is reshuffled once.
    pub fn start_round(&mut self, config: &RoundConfig, rng: &mut impl Rng) -> Result<RoundState> {
        config.validate()?;
        let mut board = generate_board(config.rows, config.cols, rng)?;
        let deadlocked = !board.any_solvable_subrect();
        if deadlocked {
            board.reshuffle_alive(rng);
        }

        self.begin(config, board);
        if deadlocked {
            self.events.push(EngineEvent::DeadlockReshuffled {
                alive_tiles: config.rows * config.cols,
            });
        }
        Ok(self.state.clone())
    }

    /// Start a new round on a prepared board (replays, puzzles, tests).
    ///
    /// The config's grid size is taken from the board; the board is used as-is.
    pub fn start_round_with_board(&mut self, config: &RoundConfig, board: Board) -> Result<RoundState> {
        let config = RoundConfig {
            rows: board.rows(),
            cols: board.cols(),
            ..config.clone()
        };
        config.validate()?;
        self.begin(&config, board);
        Ok(self.state.clone())
    }

    fn begin(&mut self, config: &RoundConfig, board: Board) {
        self.epoch += 1;
        self.state = RoundState::start(config);
        self.events.push(EngineEvent::RoundStarted {
            epoch: self.epoch,
            rows: board.rows(),
            cols: board.cols(),
        });
        self.board = Some(board);
    }

    /// Resolve a player selection.
    ///
    /// Returns `Err` only for selections outside the grid. Every other outcome,
    /// including attempts outside a running round, is a `MatchReport`.
    pub fn attempt_match(&mut self, selection: &Selection, rng: &mut impl Rng) -> Result<MatchReport> {
        if !self.state.is_running() {
            return Ok(MatchReport::not_running());
        }
        let board = match self.board.as_mut() {
            Some(board) => board,
            None => return Ok(MatchReport::not_running()),
        };

        let outcome = resolve_selection(board, selection)?;
        self.state.attempts += 1;

        let effects = match &outcome {
            MatchOutcome::Success {
                tiles,
                special_effects,
            } => {
                let report = apply_success(&mut self.state, board, tiles, special_effects);
                self.record_success(&report);
                Some(report)
            }
            MatchOutcome::Failure { reason } => {
                apply_failure(&mut self.state);
                self.events.push(EngineEvent::MatchFailed { reason: *reason });
                None
            }
        };

        let (round_ended, reshuffled) = self.check_board(rng);
        Ok(MatchReport {
            outcome,
            effects,
            reshuffled,
            round_ended,
        })
    }

    fn record_success(&mut self, report: &EffectReport) {
        self.events.push(EngineEvent::MatchCleared {
            tiles: report.removed.len(),
            score_gained: report.score_gained,
            combo: report.combo,
            multiplier: report.multiplier,
        });
        if report.golden_count > 0 {
            self.events.push(EngineEvent::GoldenBonus {
                golden_tiles: report.golden_count,
            });
        }
        if report.time_granted > 0 {
            self.events.push(EngineEvent::TimeGranted {
                seconds: report.time_granted,
            });
        }
        for (center, cleared) in &report.blasts {
            self.events.push(EngineEvent::BombDetonated {
                center: *center,
                extra_cleared: cleared.len(),
            });
        }
    }

    /// Post-resolution policy: a dead board ends the round, otherwise a
    /// deadlocked board is reshuffled exactly once.
    fn check_board(&mut self, rng: &mut impl Rng) -> (bool, bool) {
        let board = match self.board.as_mut() {
            Some(board) => board,
            None => return (false, false),
        };
        if !self.state.is_running() {
            return (false, false);
        }

        if board.all_dead() {
            self.end_round(EndReason::BoardCleared);
            return (true, false);
        }

        if !board.any_solvable_subrect() {
            let alive = board.alive_positions();
            board.clear_hints(&alive);
            board.reshuffle_alive(rng);
            self.events.push(EngineEvent::DeadlockReshuffled {
                alive_tiles: alive.len(),
            });
            return (false, true);
        }

        (false, false)
    }

    fn end_round(&mut self, reason: EndReason) {
        self.state.end(reason);
        self.events.push(EngineEvent::RoundEnded {
            reason,
            score: self.state.score,
        });
    }

    /// Advance the clock by whole seconds. Returns true if this call ended the round.
    pub fn tick(&mut self, delta_seconds: u32) -> bool {
        if !self.state.is_running() || self.state.freeze_active || delta_seconds == 0 {
            return false;
        }
        self.state.time_remaining_seconds =
            self.state.time_remaining_seconds.saturating_sub(delta_seconds);
        if self.state.time_remaining_seconds == 0 {
            self.end_round(EndReason::TimeUp);
            return true;
        }
        false
    }

    /// Use a skill. Fails silently without charges or a running round.
    ///
    /// A hint with nothing to show still costs its charge and returns
    /// `applied: false`.
    pub fn use_skill(&mut self, kind: SkillKind, rng: &mut impl Rng) -> SkillResult {
        if !self.state.is_running() {
            return SkillResult::unavailable();
        }
        let charges = match kind {
            SkillKind::Hint => self.state.skill_charges.hint,
            SkillKind::FreezeTime => self.state.skill_charges.freeze_time,
            SkillKind::Reshuffle => self.state.skill_charges.reshuffle,
        };
        if charges == 0 {
            return SkillResult::unavailable();
        }
        let board = match self.board.as_mut() {
            Some(board) => board,
            None => return SkillResult::unavailable(),
        };

        let result = match kind {
            SkillKind::Hint => {
                // The charge is spent before the scan, even if nothing turns up.
                self.state.skill_charges.hint -= 1;
                match find_solvable_subrect(board) {
                    Some(found) => {
                        board.set_hints(&found.positions);
                        SkillResult {
                            applied: true,
                            deferred: Some(DeferredAction::clear_hint(
                                self.epoch,
                                found.positions.clone(),
                            )),
                            affected_positions: found.positions,
                        }
                    }
                    None => SkillResult::unavailable(),
                }
            }
            SkillKind::FreezeTime => {
                self.freeze_generation += 1;
                self.state.freeze_active = true;
                self.state.skill_charges.freeze_time -= 1;
                SkillResult {
                    applied: true,
                    affected_positions: Vec::new(),
                    deferred: Some(DeferredAction::end_freeze(
                        self.epoch,
                        self.freeze_generation,
                    )),
                }
            }
            SkillKind::Reshuffle => {
                let alive = board.alive_positions();
                board.clear_hints(&alive);
                board.reshuffle_alive(rng);
                self.state.skill_charges.reshuffle -= 1;
                SkillResult {
                    applied: true,
                    affected_positions: alive,
                    deferred: None,
                }
            }
        };

        self.events.push(EngineEvent::SkillUsed {
            kind,
            remaining: charges - 1,
        });
        result
    }

    /// Run a deferred action handed out by `use_skill`.
    ///
    /// Returns true only if it changed state. Actions from an earlier round,
    /// actions fired after the round ended, and repeat firings are no-ops.
    pub fn fire_deferred(&mut self, action: &DeferredAction) -> bool {
        if action.epoch != self.epoch || !self.state.is_running() {
            return false;
        }
        match &action.kind {
            DeferredKind::ClearHint { positions } => {
                let cleared = self
                    .board
                    .as_mut()
                    .map(|board| board.clear_hints(positions))
                    .unwrap_or(false);
                if cleared {
                    self.events.push(EngineEvent::HintExpired);
                }
                cleared
            }
            DeferredKind::EndFreeze { generation } => {
                if !self.state.freeze_active || *generation != self.freeze_generation {
                    return false;
                }
                self.state.freeze_active = false;
                self.events.push(EngineEvent::FreezeEnded);
                true
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            board: self.board.as_ref(),
            round: &self.state,
            epoch: self.epoch,
        }
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn summary(&self) -> RoundSummary {
        RoundSummary::from_state(&self.state)
    }

    /// Take all events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }
}
