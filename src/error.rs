//! Error types for the replay engine.

use std::path::PathBuf;

use crate::baserunning::Base;
use crate::player::PlayerId;

/// Rejected construction of a [`BaserunningState`](crate::baserunning::BaserunningState).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// The same runner was placed on two bases.
    #[error("runner {runner} occupies both {first} and {second}")]
    DuplicateRunner {
        /// The duplicated runner.
        runner: PlayerId,
        /// The trailing base holding the runner.
        first: Base,
        /// The leading base holding the runner.
        second: Base,
    },
    /// Outs outside `0..=3`.
    #[error("outs must be between 0 and 3, got {0}")]
    OutsOutOfRange(u8),
    /// The batter is already one of the runners.
    #[error("batter {batter} is already on {base}")]
    BatterOnBase {
        /// The batter.
        batter: PlayerId,
        /// The base the batter occupies.
        base: Base,
    },
}

/// Failure to parse a textual outcome or base notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Not a known outcome name or scorer abbreviation.
    #[error("unknown outcome: {0:?}")]
    UnknownOutcome(String),
    /// Base notation contained something other than `1`, `2`, `3`, `-` or `_`.
    #[error("invalid base notation: {0:?}")]
    InvalidBases(String),
}

/// Errors raised while driving a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A batting order with no players.
    #[error("lineup for {team} is empty")]
    EmptyLineup {
        /// Team name.
        team: String,
    },
    /// A batting order listing the same player twice.
    #[error("lineup for {team} lists {player} more than once")]
    DuplicateInLineup {
        /// Team name.
        team: String,
        /// The repeated player.
        player: PlayerId,
    },
    /// Configuration values that cannot describe a game.
    #[error("invalid game config: {0}")]
    InvalidConfig(String),
    /// The batter due up is still standing on a base.
    #[error("batter {batter} is due up but already on base")]
    BatterOnBase {
        /// The batter.
        batter: PlayerId,
    },
    /// A play was applied after the final out.
    #[error("game is already over")]
    GameOver,
    /// The script ended before the game did.
    #[error("script ran out of plays after {plays} plays with the game still in progress")]
    ScriptExhausted {
        /// Plays consumed.
        plays: usize,
    },
    /// The game ended with plays still left in the script.
    #[error("game ended with {remaining} unused plays in the script")]
    TrailingPlays {
        /// Plays left unused.
        remaining: usize,
    },
}

/// Errors raised while loading a game or season script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// The script file could not be read.
    #[error("failed to read script {path}: {source}")]
    Read {
        /// Script path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The script was not valid JSON for the expected shape.
    #[error("failed to parse script {path}: {source}")]
    Parse {
        /// Script path.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let err = StateError::DuplicateRunner {
            runner: PlayerId::from("ruth"),
            first: Base::First,
            second: Base::Third,
        };
        assert_eq!(err.to_string(), "runner ruth occupies both first and third");
        assert_eq!(
            StateError::OutsOutOfRange(4).to_string(),
            "outs must be between 0 and 3, got 4"
        );
        let err = StateError::BatterOnBase {
            batter: PlayerId::from("r1"),
            base: Base::First,
        };
        assert_eq!(err.to_string(), "batter r1 is already on first");
    }

    #[test]
    fn test_game_error_display() {
        let err = GameError::TrailingPlays { remaining: 3 };
        assert_eq!(err.to_string(), "game ended with 3 unused plays in the script");
    }
}
