//! Consequences of a resolved match: combo, score, time, and tile removal.

use crate::board::{neighborhood, Board, Position, TileKind};
use crate::core::constants::{GOLDEN_SCORE_FACTOR, POINTS_PER_TILE};
use crate::matching::{MatchedTile, SpecialEffect};
use crate::round::state::RoundState;
use serde::{Deserialize, Serialize};

/// Score multiplier for the current combo length.
///
/// | combo | multiplier |
/// |-------|------------|
/// | 0-1   | 1.0        |
/// | 2-3   | 1.5        |
/// | 4-5   | 2.0        |
/// | 6-7   | 2.5        |
/// | 8+    | 3.0        |
pub fn combo_multiplier(combo: u32) -> f64 {
    match combo {
        0..=1 => 1.0,
        2..=3 => 1.5,
        4..=5 => 2.0,
        6..=7 => 2.5,
        _ => 3.0,
    }
}

/// Points for a match: 10 per tile, doubled per Golden tile, times the combo multiplier.
pub fn match_score(tile_count: usize, golden_count: usize, combo: u32) -> u64 {
    let mut base = tile_count as u64 * POINTS_PER_TILE;
    for _ in 0..golden_count {
        base *= GOLDEN_SCORE_FACTOR;
    }
    (base as f64 * combo_multiplier(combo)).round() as u64
}

/// What a successful match changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectReport {
    pub score_gained: u64,
    pub multiplier: f64,
    pub combo: u32,
    pub golden_count: usize,
    pub time_granted: u32,
    /// Matched tiles that were cleared.
    pub removed: Vec<Position>,
    /// Extra tiles cleared by bomb blasts, beyond the selection.
    pub bomb_removed: Vec<Position>,
    /// Each bomb's centre with the extra tiles its own blast cleared.
    pub blasts: Vec<(Position, Vec<Position>)>,
}

/// Apply a successful match to the round and the board.
pub fn apply_success(
    state: &mut RoundState,
    board: &mut Board,
    tiles: &[MatchedTile],
    special_effects: &[SpecialEffect],
) -> EffectReport {
    state.combo += 1;
    state.max_combo = state.max_combo.max(state.combo);
    state.matches += 1;

    let golden_count = tiles.iter().filter(|t| t.kind == TileKind::Golden).count();
    let score_gained = match_score(tiles.len(), golden_count, state.combo);
    state.score += score_gained;

    let matched: Vec<Position> = tiles.iter().map(|t| t.position).collect();
    let removed = board.remove(&matched);

    let mut time_granted = 0;
    let mut bomb_removed = Vec::new();
    let mut blasts = Vec::new();
    for effect in special_effects {
        match *effect {
            SpecialEffect::TimeGrant { seconds, .. } => {
                time_granted += seconds;
            }
            SpecialEffect::AreaClear { center } => {
                let area = neighborhood(center, board.rows(), board.cols());
                let cleared = board.remove(&area);
                bomb_removed.extend(cleared.iter().copied());
                blasts.push((center, cleared));
            }
        }
    }
    state.time_remaining_seconds += time_granted;
    state.tiles_cleared += (removed.len() + bomb_removed.len()) as u32;

    EffectReport {
        score_gained,
        multiplier: combo_multiplier(state.combo),
        combo: state.combo,
        golden_count,
        time_granted,
        removed,
        bomb_removed,
        blasts,
    }
}

/// A failed attempt breaks the combo and changes nothing else.
pub fn apply_failure(state: &mut RoundState) {
    state.combo = 0;
}
