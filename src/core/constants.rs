// Board defaults
pub const DEFAULT_ROWS: usize = 17;
pub const DEFAULT_COLS: usize = 10;
pub const MAX_GRID_DIMENSION: usize = 32; // solvability scan is O(rows^2 * cols^2)

// Match rules
pub const TARGET_SUM: u32 = 10;
pub const MIN_MATCH_TILES: usize = 2;
pub const MIN_TILE_VALUE: u8 = 1;
pub const MAX_TILE_VALUE: u8 = 9;

// Special tile rolls (cumulative thresholds on a uniform [0, 1) roll)
pub const BOMB_THRESHOLD: f64 = 0.01;
pub const WILD_THRESHOLD: f64 = 0.03;
pub const TIME_BONUS_THRESHOLD: f64 = 0.06;
pub const GOLDEN_THRESHOLD: f64 = 0.11;

// Scoring
pub const POINTS_PER_TILE: u64 = 10;
pub const GOLDEN_SCORE_FACTOR: u64 = 2;

// Round timing (seconds)
pub const DEFAULT_ROUND_SECONDS: u32 = 60;
pub const TIME_BONUS_SECONDS: u32 = 5;
pub const FREEZE_DURATION_SECONDS: u64 = 5;
pub const HINT_DURATION_SECONDS: u64 = 3;

// Skill charges granted at round start
pub const DEFAULT_HINT_CHARGES: u32 = 3;
pub const DEFAULT_FREEZE_CHARGES: u32 = 1;
pub const DEFAULT_RESHUFFLE_CHARGES: u32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_thresholds_are_ordered() {
        assert!(BOMB_THRESHOLD < WILD_THRESHOLD);
        assert!(WILD_THRESHOLD < TIME_BONUS_THRESHOLD);
        assert!(TIME_BONUS_THRESHOLD < GOLDEN_THRESHOLD);
        assert!(GOLDEN_THRESHOLD < 1.0);
    }

    #[test]
    fn test_default_grid_fits_scan_limit() {
        assert!(DEFAULT_ROWS <= MAX_GRID_DIMENSION);
        assert!(DEFAULT_COLS <= MAX_GRID_DIMENSION);
    }
}
