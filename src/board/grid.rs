//! The tile grid and its in-place mutations.

use super::types::{Position, Selection, Tile};
use crate::core::constants::{MAX_TILE_VALUE, MIN_TILE_VALUE};
use crate::core::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Fixed-size grid of tiles, indexed as grid[row][col].
///
/// Tiles never move. Clearing a tile turns it into a tombstone in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    grid: Vec<Vec<Tile>>,
}

impl Board {
    /// Build a board from explicit rows of tiles. All rows must share a length,
    /// alive tiles must hold 1-9 and dead tiles must hold 0.
    pub fn from_tiles(grid: Vec<Vec<Tile>>) -> Result<Self> {
        let rows = grid.len();
        let cols = grid.first().map(|row| row.len()).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(EngineError::InvalidConfig(
                "board must have at least one tile".to_string(),
            ));
        }
        if let Some(bad) = grid.iter().position(|row| row.len() != cols) {
            return Err(EngineError::InvalidConfig(format!(
                "board row {} has {} tiles, expected {}",
                bad,
                grid[bad].len(),
                cols
            )));
        }
        for (row, tiles) in grid.iter().enumerate() {
            for (col, tile) in tiles.iter().enumerate() {
                let valid = if tile.alive {
                    (MIN_TILE_VALUE..=MAX_TILE_VALUE).contains(&tile.value)
                } else {
                    tile.value == 0
                };
                if !valid {
                    return Err(EngineError::InvalidConfig(format!(
                        "tile ({}, {}) has value {} while {}",
                        row,
                        col,
                        tile.value,
                        if tile.alive { "alive" } else { "dead" }
                    )));
                }
            }
        }
        Ok(Self { rows, cols, grid })
    }

    /// Build an all-Normal board from face values; 0 marks an already-cleared cell.
    pub fn from_values(values: &[&[u8]]) -> Result<Self> {
        let grid = values
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&v| if v == 0 { Tile::dead() } else { Tile::normal(v) })
                    .collect()
            })
            .collect();
        Self::from_tiles(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, (row, col): Position) -> bool {
        row < self.rows && col < self.cols
    }

    fn check_bounds(&self, (row, col): Position) -> Result<()> {
        if self.in_bounds((row, col)) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Reject selections that reach past the grid edge.
    pub fn check_selection(&self, selection: &Selection) -> Result<()> {
        self.check_bounds(selection.top_left())?;
        self.check_bounds(selection.bottom_right())
    }

    pub fn tile_at(&self, row: usize, col: usize) -> Result<Tile> {
        self.check_bounds((row, col))?;
        Ok(self.grid[row][col])
    }

    pub(crate) fn tile_mut(&mut self, (row, col): Position) -> Option<&mut Tile> {
        self.grid.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Rows of tiles for rendering.
    pub fn tiles(&self) -> &[Vec<Tile>] {
        &self.grid
    }

    /// Alive tiles inside the selection, row-major.
    pub fn alive_in(&self, selection: &Selection) -> Vec<(Position, Tile)> {
        selection
            .positions()
            .filter(|&pos| self.in_bounds(pos))
            .map(|(row, col)| ((row, col), self.grid[row][col]))
            .filter(|(_, tile)| tile.alive)
            .collect()
    }

    /// Positions of every alive tile, row-major.
    pub fn alive_positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.grid[row][col].alive {
                    positions.push((row, col));
                }
            }
        }
        positions
    }

    /// Mark tiles dead. Returns the positions that were alive before the call.
    pub fn remove(&mut self, positions: &[Position]) -> Vec<Position> {
        let mut removed = Vec::new();
        for &pos in positions {
            if let Some(tile) = self.tile_mut(pos) {
                if tile.alive {
                    *tile = Tile {
                        kind: tile.kind,
                        ..Tile::dead()
                    };
                    removed.push(pos);
                }
            }
        }
        removed
    }

    pub fn all_dead(&self) -> bool {
        self.grid.iter().flatten().all(|tile| !tile.alive)
    }

    pub fn alive_count(&self) -> usize {
        self.grid.iter().flatten().filter(|tile| tile.alive).count()
    }

    /// Set the hint flag on alive tiles.
    pub fn set_hints(&mut self, positions: &[Position]) {
        for &pos in positions {
            if let Some(tile) = self.tile_mut(pos) {
                if tile.alive {
                    tile.hinted = true;
                }
            }
        }
    }

    /// Clear the hint flag. Returns true if any flag was actually cleared.
    pub fn clear_hints(&mut self, positions: &[Position]) -> bool {
        let mut cleared = false;
        for &pos in positions {
            if let Some(tile) = self.tile_mut(pos) {
                cleared |= tile.hinted;
                tile.hinted = false;
            }
        }
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::TileKind;

    #[test]
    fn test_from_values_marks_zero_dead() {
        let board = Board::from_values(&[&[1, 0], &[3, 4]]).unwrap();
        assert_eq!(board.rows(), 2);
        assert_eq!(board.cols(), 2);
        assert!(!board.tile_at(0, 1).unwrap().alive);
        assert_eq!(board.tile_at(1, 1).unwrap().value, 4);
        assert_eq!(board.alive_count(), 3);
    }

    #[test]
    fn test_from_tiles_rejects_ragged_rows() {
        let grid = vec![vec![Tile::normal(1), Tile::normal(2)], vec![Tile::normal(3)]];
        assert!(Board::from_tiles(grid).is_err());
        assert!(Board::from_tiles(Vec::new()).is_err());
    }

    #[test]
    fn test_from_values_rejects_out_of_range_values() {
        assert!(matches!(
            Board::from_values(&[&[15, 200], &[0, 3]]),
            Err(EngineError::InvalidConfig(_))
        ));
        assert!(Board::from_values(&[&[9, 10]]).is_err());
        assert!(Board::from_values(&[&[1, 9], &[0, 5]]).is_ok());
    }

    #[test]
    fn test_from_tiles_rejects_broken_tombstones() {
        let dead_with_value = Tile {
            value: 7,
            ..Tile::dead()
        };
        assert!(matches!(
            Board::from_tiles(vec![vec![Tile::normal(3), dead_with_value]]),
            Err(EngineError::InvalidConfig(_))
        ));

        let alive_zero = Tile::new(0, TileKind::Wild);
        assert!(matches!(
            Board::from_tiles(vec![vec![alive_zero, Tile::normal(3)]]),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_tile_at_out_of_bounds() {
        let board = Board::from_values(&[&[1, 2, 3]]).unwrap();
        assert!(board.tile_at(0, 2).is_ok());
        assert!(matches!(
            board.tile_at(1, 0),
            Err(EngineError::OutOfBounds { row: 1, col: 0, rows: 1, cols: 3 })
        ));
        assert!(board.tile_at(0, 3).is_err());
    }

    #[test]
    fn test_remove_sets_tombstone_and_is_idempotent() {
        let mut board = Board::from_values(&[&[4, 6], &[5, 5]]).unwrap();
        let removed = board.remove(&[(0, 0), (0, 1)]);
        assert_eq!(removed, vec![(0, 0), (0, 1)]);
        let tile = board.tile_at(0, 0).unwrap();
        assert!(!tile.alive);
        assert_eq!(tile.value, 0);

        let again = board.remove(&[(0, 0), (1, 1)]);
        assert_eq!(again, vec![(1, 1)]);
        assert_eq!(board.alive_count(), 1);
    }

    #[test]
    fn test_remove_keeps_kind_and_ignores_out_of_range() {
        let mut board =
            Board::from_tiles(vec![vec![Tile::new(3, TileKind::Bomb), Tile::normal(7)]]).unwrap();
        let removed = board.remove(&[(0, 0), (5, 5)]);
        assert_eq!(removed, vec![(0, 0)]);
        assert_eq!(board.tile_at(0, 0).unwrap().kind, TileKind::Bomb);
    }

    #[test]
    fn test_all_dead() {
        let mut board = Board::from_values(&[&[1, 9]]).unwrap();
        assert!(!board.all_dead());
        board.remove(&[(0, 0), (0, 1)]);
        assert!(board.all_dead());
    }

    #[test]
    fn test_alive_in_skips_dead_tiles() {
        let board = Board::from_values(&[&[1, 0, 3], &[4, 5, 6]]).unwrap();
        let sel = Selection::from_corners((0, 0), (1, 1));
        let alive: Vec<Position> = board.alive_in(&sel).into_iter().map(|(p, _)| p).collect();
        assert_eq!(alive, vec![(0, 0), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_hints_only_mark_alive_tiles() {
        let mut board = Board::from_values(&[&[2, 0, 8]]).unwrap();
        board.set_hints(&[(0, 0), (0, 1), (0, 2)]);
        assert!(board.tile_at(0, 0).unwrap().hinted);
        assert!(!board.tile_at(0, 1).unwrap().hinted);
        assert!(board.clear_hints(&[(0, 0), (0, 2)]));
        assert!(!board.clear_hints(&[(0, 0), (0, 2)]));
    }

    #[test]
    fn test_check_selection() {
        let board = Board::from_values(&[&[1, 2], &[3, 4]]).unwrap();
        assert!(board
            .check_selection(&Selection::from_corners((0, 0), (1, 1)))
            .is_ok());
        assert!(board
            .check_selection(&Selection::from_corners((0, 0), (2, 1)))
            .is_err());
    }
}
