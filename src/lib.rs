//! Tenfold - sum-to-ten grid puzzle engine.
//!
//! Drag a rectangle over numbered tiles; if the tiles inside add up to 10
//! they clear. This crate holds the engine only: frontends bind to
//! [`PuzzleEngine`] for state queries and actions and do their own drawing.

pub mod board;
pub mod core;
pub mod effects;
pub mod matching;
pub mod round;
pub mod simulator;

pub use board::{Board, Position, Selection, Tile, TileKind};
pub use crate::core::{EngineError, RoundConfig, SkillCharges};
pub use matching::{FailureReason, MatchOutcome, SpecialEffect};
pub use round::{
    DeferredAction, EngineEvent, MatchReport, PuzzleEngine, RoundState, RoundSummary, SkillKind,
    SkillResult, Snapshot,
};
