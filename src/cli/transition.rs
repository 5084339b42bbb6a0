//! Transition command implementation.

use super::output::format_transition_text;
use super::{CliError, TransitionFormat};
use diamond::{BaseOccupancy, BaserunningState, Outcome, PlayerId, try_transition};

/// Execute the transition command.
///
/// # Errors
///
/// Returns an error if the start state is invalid or the batter is already
/// one of its runners.
pub(crate) fn execute(
    outcome: Outcome,
    outs: u8,
    bases: BaseOccupancy,
    batter: &str,
    format: TransitionFormat,
) -> Result<(), CliError> {
    let before = BaserunningState::with_placeholder_runners(outs, bases)?;
    let batter = PlayerId::from(batter);
    let result = try_transition(&before, outcome, &batter)?;

    match format {
        TransitionFormat::Text => {
            print!("{}", format_transition_text(&before, outcome, &batter, &result));
        }
        TransitionFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }
    Ok(())
}
