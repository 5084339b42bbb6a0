//! Play command implementation.

use super::{CliError, PlayFormat, game_config};
use diamond::report::render_game;
use diamond::script::GameScript;
use diamond::{GameConfig, replay_game};
use std::path::Path;

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the script cannot be loaded or does not describe
/// exactly one complete game.
pub(crate) fn execute(
    script: &Path,
    innings: Option<u16>,
    max_innings: Option<u16>,
    format: PlayFormat,
) -> Result<(), CliError> {
    let config = game_config(GameConfig::default(), innings, max_innings)?;
    let script = GameScript::load(script)?;
    let result = replay_game(&script, config)?;

    match format {
        PlayFormat::Text => print!("{}", render_game(&result)),
        PlayFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }
    Ok(())
}
