//! Selection resolution: decides whether a rectangle clears.
//!
//! Non-Wild tiles always count at face value. Wild tiles first try to make up
//! the difference to 10 together (each may stand for 1-9); if the gap is out
//! of their reach they fall back to their own face values.

use crate::board::{Board, Position, Selection, TileKind};
use crate::core::constants::{MIN_MATCH_TILES, TARGET_SUM, TIME_BONUS_SECONDS};
use crate::core::error::Result;
use serde::{Deserialize, Serialize};

/// Side effect triggered by a special tile in a successful match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialEffect {
    /// Bomb tile: clear the 3x3 block around `center`.
    AreaClear { center: Position },
    /// Time tile: add seconds to the clock.
    TimeGrant { at: Position, seconds: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    /// Fewer than two alive tiles in the rectangle.
    TooFew { found: usize },
    /// The effective sum was not 10.
    SumMismatch { effective_sum: u32 },
    /// The round is idle or over.
    RoundNotRunning,
}

/// A matched tile with the kind it had when the match resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedTile {
    pub position: Position,
    pub value: u8,
    pub kind: TileKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Success {
        /// Matched tiles in row-major order.
        tiles: Vec<MatchedTile>,
        /// Special effects in the same order as `tiles`.
        special_effects: Vec<SpecialEffect>,
    },
    Failure {
        reason: FailureReason,
    },
}

impl MatchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, MatchOutcome::Success { .. })
    }

    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            MatchOutcome::Failure { reason } => Some(*reason),
            MatchOutcome::Success { .. } => None,
        }
    }
}

/// Effective total of a set of tiles under the Wild rule.
///
/// With `w` Wild tiles and a non-Wild sum of `base`, the Wilds can cover any
/// gap in `[w, 9w]`; if the gap fits, the total is exactly 10. Otherwise the
/// Wilds count at face value.
pub fn effective_sum(tiles: &[MatchedTile]) -> u32 {
    let (wilds, others): (Vec<&MatchedTile>, Vec<&MatchedTile>) =
        tiles.iter().partition(|t| t.kind == TileKind::Wild);

    let base_sum: u32 = others.iter().map(|t| t.value as u32).sum();
    if wilds.is_empty() {
        return base_sum;
    }

    let wild_count = wilds.len() as i64;
    let needed = TARGET_SUM as i64 - base_sum as i64;
    if needed >= wild_count && needed <= 9 * wild_count {
        return TARGET_SUM;
    }

    base_sum + wilds.iter().map(|t| t.value as u32).sum::<u32>()
}

/// Resolve a selection against the board without mutating it.
///
/// Returns `Err` only when the rectangle reaches outside the grid.
pub fn resolve_selection(board: &Board, selection: &Selection) -> Result<MatchOutcome> {
    board.check_selection(selection)?;

    let tiles: Vec<MatchedTile> = board
        .alive_in(selection)
        .into_iter()
        .map(|(position, tile)| MatchedTile {
            position,
            value: tile.value,
            kind: tile.kind,
        })
        .collect();

    if tiles.len() < MIN_MATCH_TILES {
        return Ok(MatchOutcome::Failure {
            reason: FailureReason::TooFew { found: tiles.len() },
        });
    }

    let total = effective_sum(&tiles);
    if total != TARGET_SUM {
        return Ok(MatchOutcome::Failure {
            reason: FailureReason::SumMismatch {
                effective_sum: total,
            },
        });
    }

    let special_effects = tiles
        .iter()
        .filter_map(|t| match t.kind {
            TileKind::Bomb => Some(SpecialEffect::AreaClear { center: t.position }),
            TileKind::TimeBonus => Some(SpecialEffect::TimeGrant {
                at: t.position,
                seconds: TIME_BONUS_SECONDS,
            }),
            _ => None,
        })
        .collect();

    Ok(MatchOutcome::Success {
        tiles,
        special_effects,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Tile;
    use crate::core::error::EngineError;

    fn tile(value: u8, kind: TileKind) -> MatchedTile {
        MatchedTile {
            position: (0, 0),
            value,
            kind,
        }
    }

    fn row_board(tiles: Vec<Tile>) -> Board {
        Board::from_tiles(vec![tiles]).unwrap()
    }

    fn whole_row(board: &Board) -> Selection {
        Selection::from_corners((0, 0), (0, board.cols() - 1))
    }

    #[test]
    fn test_normal_tiles_sum_exactly() {
        assert_eq!(
            effective_sum(&[tile(3, TileKind::Normal), tile(7, TileKind::Normal)]),
            10
        );
        assert_eq!(
            effective_sum(&[tile(3, TileKind::Normal), tile(8, TileKind::Normal)]),
            11
        );
    }

    #[test]
    fn test_wild_fills_gap() {
        // needed = 3, one wild covers [1, 9]
        assert_eq!(
            effective_sum(&[tile(7, TileKind::Normal), tile(5, TileKind::Wild)]),
            10
        );
        // needed = 3, two wilds cover [2, 18]
        assert_eq!(
            effective_sum(&[
                tile(7, TileKind::Normal),
                tile(1, TileKind::Wild),
                tile(1, TileKind::Wild)
            ]),
            10
        );
        // needed = 1
        assert_eq!(
            effective_sum(&[tile(9, TileKind::Normal), tile(2, TileKind::Wild)]),
            10
        );
    }

    #[test]
    fn test_wild_falls_back_to_face_value() {
        // base 11, needed = -1: wild counts as 5
        assert_eq!(
            effective_sum(&[
                tile(5, TileKind::Normal),
                tile(6, TileKind::Normal),
                tile(5, TileKind::Wild)
            ]),
            16
        );
        // needed = 1 but two wilds need at least 2: fall back to faces 9 + 1 + 1
        assert_eq!(
            effective_sum(&[
                tile(9, TileKind::Normal),
                tile(1, TileKind::Wild),
                tile(1, TileKind::Wild)
            ]),
            11
        );
    }

    #[test]
    fn test_wild_fallback_never_lands_on_ten() {
        // Wild faces are 1-9, so a face total of 10 always lies inside the
        // fill range and is caught by the first branch.
        for base in 0u8..=20 {
            for a in 1u8..=9 {
                for b in 1u8..=9 {
                    let mut tiles = vec![tile(a, TileKind::Wild), tile(b, TileKind::Wild)];
                    if base > 0 {
                        tiles.push(tile(base, TileKind::Normal));
                    }
                    let needed = 10i32 - base as i32;
                    let sum = effective_sum(&tiles);
                    if (2..=18).contains(&needed) {
                        assert_eq!(sum, 10);
                    } else {
                        assert_ne!(sum, 10);
                    }
                }
            }
        }
    }

    #[test]
    fn test_only_wilds_in_range() {
        // base 0, needed 10, two wilds cover [2, 18]
        assert_eq!(
            effective_sum(&[tile(9, TileKind::Wild), tile(9, TileKind::Wild)]),
            10
        );
    }

    #[test]
    fn test_resolve_too_few() {
        let board = Board::from_values(&[&[5, 0, 0]]).unwrap();
        let outcome = resolve_selection(&board, &whole_row(&board)).unwrap();
        assert_eq!(
            outcome,
            MatchOutcome::Failure {
                reason: FailureReason::TooFew { found: 1 }
            }
        );

        let outcome = resolve_selection(&board, &Selection::cell((0, 1))).unwrap();
        assert_eq!(
            outcome.failure_reason(),
            Some(FailureReason::TooFew { found: 0 })
        );
    }

    #[test]
    fn test_resolve_success_collects_tiles_row_major() {
        let board = Board::from_values(&[&[2, 3], &[1, 4]]).unwrap();
        let outcome =
            resolve_selection(&board, &Selection::from_corners((1, 1), (0, 0))).unwrap();
        match outcome {
            MatchOutcome::Success {
                tiles,
                special_effects,
            } => {
                let positions: Vec<Position> = tiles.iter().map(|t| t.position).collect();
                assert_eq!(positions, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
                assert!(special_effects.is_empty());
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_sum_mismatch_reports_sum() {
        let board = Board::from_values(&[&[6, 6]]).unwrap();
        let outcome = resolve_selection(&board, &whole_row(&board)).unwrap();
        assert_eq!(
            outcome.failure_reason(),
            Some(FailureReason::SumMismatch { effective_sum: 12 })
        );
    }

    #[test]
    fn test_resolve_emits_special_effects_in_order() {
        let board = row_board(vec![
            Tile::new(2, TileKind::TimeBonus),
            Tile::new(3, TileKind::Bomb),
            Tile::new(1, TileKind::Golden),
            Tile::new(4, TileKind::TimeBonus),
        ]);
        let outcome = resolve_selection(&board, &whole_row(&board)).unwrap();
        match outcome {
            MatchOutcome::Success {
                special_effects, ..
            } => assert_eq!(
                special_effects,
                vec![
                    SpecialEffect::TimeGrant {
                        at: (0, 0),
                        seconds: 5
                    },
                    SpecialEffect::AreaClear { center: (0, 1) },
                    SpecialEffect::TimeGrant {
                        at: (0, 3),
                        seconds: 5
                    },
                ]
            ),
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_wild_overshoot_fails() {
        let board = row_board(vec![
            Tile::normal(5),
            Tile::normal(6),
            Tile::new(5, TileKind::Wild),
        ]);
        let outcome = resolve_selection(&board, &whole_row(&board)).unwrap();
        assert_eq!(
            outcome.failure_reason(),
            Some(FailureReason::SumMismatch { effective_sum: 16 })
        );
    }

    #[test]
    fn test_resolve_rejects_out_of_bounds() {
        let board = Board::from_values(&[&[5, 5]]).unwrap();
        let result = resolve_selection(&board, &Selection::from_corners((0, 0), (0, 2)));
        assert!(matches!(result, Err(EngineError::OutOfBounds { .. })));
    }
}
