//! CLI command implementations for Diamond.

pub(crate) mod play;
pub(crate) mod season;
pub(crate) mod table;
pub(crate) mod transition;

mod output;

use clap::ValueEnum;
use diamond::{GameConfig, GameError, ScriptError, StateError};

/// Output format for the `transition` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum TransitionFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Output format for the `table` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum TableFormat {
    /// Aligned text table.
    Text,
    /// CSV format.
    Csv,
    /// Machine-readable JSON output.
    Json,
}

/// Output format for the `play` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum PlayFormat {
    /// Play-by-play, line score and box score.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Output format for the `season` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SeasonFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
    /// CSV standings.
    Csv,
}

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    /// Script could not be loaded.
    #[error(transparent)]
    Script(#[from] ScriptError),
    /// Game could not be replayed.
    #[error(transparent)]
    Game(#[from] GameError),
    /// Start state was invalid.
    #[error(transparent)]
    State(#[from] StateError),
    /// Output could not be serialized.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    /// Worker pool could not be created.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    /// Progress bar template was rejected.
    #[error("invalid progress bar template: {0}")]
    Progress(#[from] indicatif::style::TemplateError),
}

/// Apply command-line overrides to a base configuration and validate it.
pub(crate) fn game_config(
    base: GameConfig,
    innings: Option<u16>,
    max_innings: Option<u16>,
) -> Result<GameConfig, CliError> {
    let mut config = base;
    if let Some(innings) = innings {
        config.innings = innings;
    }
    if max_innings.is_some() {
        config.max_innings = max_innings;
    }
    config.validate()?;
    Ok(config)
}
