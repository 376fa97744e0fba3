//! Core constants, round configuration, and the engine error type.

pub mod config;
pub mod constants;
pub mod error;

pub use config::{RoundConfig, SkillCharges};
pub use constants::*;
pub use error::{EngineError, Result};
