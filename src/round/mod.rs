//! Round control: clock, skills, end conditions, and deadlock recovery.

pub mod deferred;
pub mod engine;
pub mod events;
pub mod state;
pub mod summary;

pub use deferred::{DeferredAction, DeferredKind, SkillKind, SkillResult};
pub use engine::{MatchReport, PuzzleEngine, Snapshot};
pub use events::EngineEvent;
pub use state::{EndReason, RoundPhase, RoundState};
pub use summary::RoundSummary;
