//! Board queries: bomb neighbourhoods and the solvability scan.

use super::grid::Board;
use super::types::{Position, Selection};
use crate::core::constants::{MIN_MATCH_TILES, TARGET_SUM};

/// The clipped 3x3 block centred on `center`, including the centre, row-major.
pub fn neighborhood(center: Position, rows: usize, cols: usize) -> Vec<Position> {
    let (row, col) = center;
    let mut cells = Vec::with_capacity(9);

    for d_row in -1i32..=1 {
        for d_col in -1i32..=1 {
            let new_row = row as i32 + d_row;
            let new_col = col as i32 + d_col;

            if new_row >= 0 && new_row < rows as i32 && new_col >= 0 && new_col < cols as i32 {
                cells.push((new_row as usize, new_col as usize));
            }
        }
    }

    cells
}

/// A sub-rectangle whose alive tiles sum to the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvableRect {
    pub selection: Selection,
    /// Alive tiles inside the rectangle, row-major.
    pub positions: Vec<Position>,
}

/// Scan every sub-rectangle and return the first one holding at least two alive
/// tiles whose face values sum to exactly 10.
///
/// Rectangles are visited by top row, left column, bottom row, then right
/// column. This is O(rows^2 * cols^2); grid size is capped in the config.
pub fn find_solvable_subrect(board: &Board) -> Option<SolvableRect> {
    let (rows, cols) = (board.rows(), board.cols());
    let tiles = board.tiles();

    for top in 0..rows {
        for left in 0..cols {
            for bottom in top..rows {
                let mut sum = 0u32;
                let mut count = 0usize;
                for right in left..cols {
                    // Extend the rectangle by one column.
                    for row in top..=bottom {
                        let tile = &tiles[row][right];
                        if tile.alive {
                            sum += tile.value as u32;
                            count += 1;
                        }
                    }
                    if sum > TARGET_SUM {
                        // Values are positive, so wider rectangles only grow.
                        break;
                    }
                    if count >= MIN_MATCH_TILES && sum == TARGET_SUM {
                        let selection = Selection::from_corners((top, left), (bottom, right));
                        let positions = board
                            .alive_in(&selection)
                            .into_iter()
                            .map(|(pos, _)| pos)
                            .collect();
                        return Some(SolvableRect {
                            selection,
                            positions,
                        });
                    }
                }
            }
        }
    }

    None
}

impl Board {
    /// True if any sub-rectangle is still clearable at face value.
    pub fn any_solvable_subrect(&self) -> bool {
        find_solvable_subrect(self).is_some()
    }
}
