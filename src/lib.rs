// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Diamond: a deterministic baseball play-by-play replay engine.
//!
//! Given plate-appearance outcomes chosen elsewhere, this crate applies the
//! baserunning rules, keeps score, and replays whole games and seasons.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Season replay (parallel games)    │
//! ├─────────────────────────────────────┤
//! │   Game engine (innings, box score)  │
//! ├─────────────────────────────────────┤
//! │   Baserunning state machine         │
//! └─────────────────────────────────────┘
//! ```

pub mod baserunning;
pub mod error;
pub mod game;
pub mod player;
pub mod report;
pub mod script;
pub mod season;

pub use error::{GameError, ParseError, ScriptError, StateError};
pub use player::PlayerId;

// Re-export the core call contract at crate root for convenience
pub use baserunning::{
    Base, BaseOccupancy, BaserunningEvent, BaserunningState, Outcome, TransitionResult,
    transition, try_transition,
};
pub use game::{Game, GameConfig, GameResult, Lineup, Team, replay_game};
pub use season::{SeasonSummary, replay_season};
