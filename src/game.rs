//! Game layer for Diamond.
//!
//! Drives the baserunning state machine through a full game:
//! - Lineups cycled through the batting order
//! - Half-inning changes on the third out
//! - Regulation, walk-off and extra-inning endings
//! - Line score and box score bookkeeping

mod box_score;
mod config;
mod engine;
mod inning;
mod lineup;

pub use box_score::{BatterEntry, BattingLine, BoxScore, LineScore, TeamBox};
pub use config::GameConfig;
pub use engine::{Game, GameResult, PlayRecord, Score, replay_game};
pub use inning::{HalfInning, InningHalf, Team};
pub use lineup::Lineup;
