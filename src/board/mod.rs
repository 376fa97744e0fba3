//! The puzzle board: tiles, generation, and grid queries.

pub mod generation;
pub mod grid;
pub mod logic;
pub mod types;

pub use generation::{generate_board, reshuffle_alive};
pub use grid::Board;
pub use logic::{find_solvable_subrect, neighborhood, SolvableRect};
pub use types::{Position, Selection, Tile, TileKind};

impl Board {
    /// Generate a fresh board (see [`generation::generate_board`]).
    pub fn generate(
        rows: usize,
        cols: usize,
        rng: &mut impl rand::Rng,
    ) -> crate::core::error::Result<Self> {
        generate_board(rows, cols, rng)
    }

    /// Redraw every alive tile's value (see [`generation::reshuffle_alive`]).
    pub fn reshuffle_alive(&mut self, rng: &mut impl rand::Rng) {
        reshuffle_alive(self, rng);
    }
}
