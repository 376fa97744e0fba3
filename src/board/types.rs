//! Board data structures: tiles, positions, and rectangular selections.

use crate::core::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Grid coordinate as (row, col), zero-based.
pub type Position = (usize, usize);

/// Gameplay role of a tile. Every kind carries a 1-9 face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    /// Plain numbered tile
    Normal,
    /// Doubles the match score (5% spawn rate)
    Golden,
    /// Grants bonus seconds when matched (3% spawn rate)
    TimeBonus,
    /// Contributes whatever completes the sum, if it can (2% spawn rate)
    Wild,
    /// Clears its 3x3 neighbourhood when matched (1% spawn rate)
    Bomb,
}

impl TileKind {
    pub const ALL: [TileKind; 5] = [
        TileKind::Normal,
        TileKind::Golden,
        TileKind::TimeBonus,
        TileKind::Wild,
        TileKind::Bomb,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TileKind::Normal => "Normal",
            TileKind::Golden => "Golden",
            TileKind::TimeBonus => "Time Bonus",
            TileKind::Wild => "Wild",
            TileKind::Bomb => "Bomb",
        }
    }

    pub fn is_special(&self) -> bool {
        !matches!(self, TileKind::Normal)
    }
}

/// A single grid cell.
///
/// Dead tiles keep their cell with `value == 0` and can never be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub value: u8,
    pub kind: TileKind,
    pub alive: bool,
    /// Transient highlight set by the hint skill.
    pub hinted: bool,
}

impl Tile {
    pub fn new(value: u8, kind: TileKind) -> Self {
        Self {
            value,
            kind,
            alive: true,
            hinted: false,
        }
    }

    pub fn normal(value: u8) -> Self {
        Self::new(value, TileKind::Normal)
    }

    /// Tombstone for a cleared cell.
    pub fn dead() -> Self {
        Self {
            value: 0,
            kind: TileKind::Normal,
            alive: false,
            hinted: false,
        }
    }
}

/// Inclusive axis-aligned rectangle of grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    top: usize,
    left: usize,
    bottom: usize,
    right: usize,
}

impl Selection {
    /// Build from explicit top-left and bottom-right corners.
    pub fn new(top_left: Position, bottom_right: Position) -> Result<Self> {
        let (top, left) = top_left;
        let (bottom, right) = bottom_right;
        if top > bottom || left > right {
            return Err(EngineError::InvalidSelection {
                top,
                left,
                bottom,
                right,
            });
        }
        Ok(Self {
            top,
            left,
            bottom,
            right,
        })
    }

    /// Build from the two corners of a drag, in either order.
    pub fn from_corners(a: Position, b: Position) -> Self {
        Self {
            top: a.0.min(b.0),
            left: a.1.min(b.1),
            bottom: a.0.max(b.0),
            right: a.1.max(b.1),
        }
    }

    /// Single-cell selection.
    pub fn cell(pos: Position) -> Self {
        Self::from_corners(pos, pos)
    }

    pub fn top_left(&self) -> Position {
        (self.top, self.left)
    }

    pub fn bottom_right(&self) -> Position {
        (self.bottom, self.right)
    }

    pub fn contains(&self, (row, col): Position) -> bool {
        row >= self.top && row <= self.bottom && col >= self.left && col <= self.right
    }

    /// Cells covered by the rectangle in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (self.top..=self.bottom).flat_map(move |row| (self.left..=self.right).map(move |col| (row, col)))
    }

    pub fn area(&self) -> usize {
        (self.bottom - self.top + 1) * (self.right - self.left + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_normalizes_drag_direction() {
        let sel = Selection::from_corners((4, 7), (1, 2));
        assert_eq!(sel.top_left(), (1, 2));
        assert_eq!(sel.bottom_right(), (4, 7));
        assert_eq!(sel, Selection::from_corners((1, 2), (4, 7)));
    }

    #[test]
    fn test_new_rejects_inverted_corners() {
        assert!(Selection::new((0, 0), (2, 3)).is_ok());
        assert!(matches!(
            Selection::new((3, 0), (2, 3)),
            Err(EngineError::InvalidSelection { .. })
        ));
    }

    #[test]
    fn test_positions_row_major() {
        let sel = Selection::from_corners((0, 0), (1, 1));
        let cells: Vec<Position> = sel.positions().collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(sel.area(), 4);
    }

    #[test]
    fn test_contains() {
        let sel = Selection::from_corners((1, 1), (2, 3));
        assert!(sel.contains((1, 1)));
        assert!(sel.contains((2, 3)));
        assert!(!sel.contains((0, 1)));
        assert!(!sel.contains((2, 4)));
    }

    #[test]
    fn test_dead_tile_is_tombstone() {
        let tile = Tile::dead();
        assert!(!tile.alive);
        assert_eq!(tile.value, 0);
    }

    #[test]
    fn test_only_normal_is_not_special() {
        for kind in TileKind::ALL {
            assert_eq!(kind.is_special(), kind != TileKind::Normal);
        }
    }
}
