//! Engine error type.
//!
//! Only malformed caller input ends up here. Failed matches and unavailable
//! skills are ordinary gameplay results, not errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("position ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("selection corners are inverted: ({top}, {left}) .. ({bottom}, {right})")]
    InvalidSelection {
        top: usize,
        left: usize,
        bottom: usize,
        right: usize,
    },
    #[error("invalid round config: {0}")]
    InvalidConfig(String),
    #[error("failed to read round config: {0}")]
    ConfigIo(#[from] std::io::Error),
    #[error("failed to parse round config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
