//! Weighted-random board generation and reshuffling.
//!
//! Every tile consumes exactly two draws in a fixed order (kind roll, then
//! face value), so a seeded RNG always reproduces the same board.

use super::grid::Board;
use super::types::{Tile, TileKind};
use crate::core::constants::{
    BOMB_THRESHOLD, GOLDEN_THRESHOLD, MAX_TILE_VALUE, MIN_TILE_VALUE, TIME_BONUS_THRESHOLD,
    WILD_THRESHOLD,
};
use crate::core::error::Result;
use rand::Rng;

/// Classify a uniform [0, 1) roll into a tile kind (rarest first).
pub fn kind_for_roll(roll: f64) -> TileKind {
    if roll < BOMB_THRESHOLD {
        TileKind::Bomb
    } else if roll < WILD_THRESHOLD {
        TileKind::Wild
    } else if roll < TIME_BONUS_THRESHOLD {
        TileKind::TimeBonus
    } else if roll < GOLDEN_THRESHOLD {
        TileKind::Golden
    } else {
        TileKind::Normal
    }
}

pub fn roll_tile_value(rng: &mut impl Rng) -> u8 {
    rng.gen_range(MIN_TILE_VALUE..=MAX_TILE_VALUE)
}

pub fn generate_tile(rng: &mut impl Rng) -> Tile {
    let roll: f64 = rng.gen();
    let kind = kind_for_roll(roll);
    let value = roll_tile_value(rng);
    Tile::new(value, kind)
}

/// Fill a rows x cols board in row-major order.
pub fn generate_board(rows: usize, cols: usize, rng: &mut impl Rng) -> Result<Board> {
    let grid = (0..rows)
        .map(|_| (0..cols).map(|_| generate_tile(rng)).collect())
        .collect();
    Board::from_tiles(grid)
}

/// Redraw the face value of every alive tile. Kinds and dead cells are untouched.
pub fn reshuffle_alive(board: &mut Board, rng: &mut impl Rng) {
    for pos in board.alive_positions() {
        if let Some(tile) = board.tile_mut(pos) {
            tile.value = roll_tile_value(rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_kind_for_roll_boundaries() {
        assert_eq!(kind_for_roll(0.0), TileKind::Bomb);
        assert_eq!(kind_for_roll(0.0099), TileKind::Bomb);
        assert_eq!(kind_for_roll(0.01), TileKind::Wild);
        assert_eq!(kind_for_roll(0.0299), TileKind::Wild);
        assert_eq!(kind_for_roll(0.03), TileKind::TimeBonus);
        assert_eq!(kind_for_roll(0.0599), TileKind::TimeBonus);
        assert_eq!(kind_for_roll(0.06), TileKind::Golden);
        assert_eq!(kind_for_roll(0.1099), TileKind::Golden);
        assert_eq!(kind_for_roll(0.11), TileKind::Normal);
        assert_eq!(kind_for_roll(0.9999), TileKind::Normal);
    }

    #[test]
    fn test_generate_board_dimensions_and_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let board = generate_board(17, 10, &mut rng).unwrap();
        assert_eq!(board.rows(), 17);
        assert_eq!(board.cols(), 10);
        for tile in board.tiles().iter().flatten() {
            assert!(tile.alive);
            assert!(!tile.hinted);
            assert!((1..=9).contains(&tile.value));
        }
    }

    #[test]
    fn test_generation_is_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        let a = generate_board(8, 8, &mut rng1).unwrap();
        let b = generate_board(8, 8, &mut rng2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_tile_draw_order() {
        // The kind roll comes first, then the value, for every kind.
        let mut rng = StdRng::seed_from_u64(99);
        let mut mirror = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let tile = generate_tile(&mut rng);
            let roll: f64 = mirror.gen();
            let value: u8 = mirror.gen_range(1..=9);
            assert_eq!(tile.kind, kind_for_roll(roll));
            assert_eq!(tile.value, value);
        }
    }

    #[test]
    fn test_kind_frequencies_match_weights() {
        let mut rng = StdRng::seed_from_u64(12345);
        let samples = 200_000;
        let mut counts = [0usize; 5];
        for _ in 0..samples {
            let tile = generate_tile(&mut rng);
            let idx = TileKind::ALL.iter().position(|k| *k == tile.kind).unwrap();
            counts[idx] += 1;
        }
        let expected = [0.89, 0.05, 0.03, 0.02, 0.01];
        for (count, want) in counts.iter().zip(expected) {
            let got = *count as f64 / samples as f64;
            assert!(
                (got - want).abs() < 0.005,
                "frequency {} too far from {}",
                got,
                want
            );
        }
    }

    #[test]
    fn test_reshuffle_keeps_kinds_and_dead_cells() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = generate_board(6, 6, &mut rng).unwrap();
        board.remove(&[(0, 0), (2, 3), (5, 5)]);
        let before = board.clone();

        reshuffle_alive(&mut board, &mut rng);

        for row in 0..6 {
            for col in 0..6 {
                let old = before.tile_at(row, col).unwrap();
                let new = board.tile_at(row, col).unwrap();
                assert_eq!(old.kind, new.kind);
                assert_eq!(old.alive, new.alive);
                if new.alive {
                    assert!((1..=9).contains(&new.value));
                } else {
                    assert_eq!(new.value, 0);
                }
            }
        }
    }
}
