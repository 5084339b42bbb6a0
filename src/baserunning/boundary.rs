//! Third-out resolution.
//!
//! Runs on the raw handler output. Once a play records the third out the
//! half-inning is over: runs from out-family plays are erased and the state is
//! reset to empty bases and no outs.

use serde::Serialize;

use crate::baserunning::{
    BaserunningState, OUTS_PER_HALF_INNING, Outcome, RawTransition, TransitionResult,
};

/// What happens to the runs of a play that makes the third out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThirdOutRuns {
    /// The runs do not count.
    Nullify,
    /// The runs stand.
    Keep,
}

/// Third-out run policy per outcome.
///
/// Every out by the batter erases the runs on the play, whether or not the
/// out was a force. Real scoring lets a run stand on a non-force third out
/// when the runner crossed the plate first; that distinction is not modeled.
#[must_use]
pub const fn third_out_policy(outcome: Outcome) -> ThirdOutRuns {
    match outcome {
        Outcome::Strikeout
        | Outcome::GroundOut
        | Outcome::FlyOut
        | Outcome::LineOut
        | Outcome::PopOut
        | Outcome::SacrificeFly
        | Outcome::SacrificeBunt => ThirdOutRuns::Nullify,
        Outcome::Single
        | Outcome::Double
        | Outcome::Triple
        | Outcome::HomeRun
        | Outcome::Walk
        | Outcome::IntentionalWalk
        | Outcome::HitByPitch
        | Outcome::FieldersChoice
        | Outcome::ReachedOnError
        | Outcome::CatcherInterference => ThirdOutRuns::Keep,
    }
}

/// Stage 2: resolve the inning boundary for a raw transition.
///
/// Below three outs the raw transition passes through unchanged. At three
/// outs the runners still on base are counted as left on base, runs are
/// dropped when [`third_out_policy`] says so (along with their `Home`
/// movements), and the state resets to a fresh half-inning.
#[must_use]
pub fn resolve_inning_boundary(outcome: Outcome, raw: RawTransition) -> TransitionResult {
    let RawTransition {
        state,
        scorers,
        advancement,
        out_runner,
        outs_on_play,
        reached_on_error,
    } = raw;

    if state.outs() < OUTS_PER_HALF_INNING {
        return TransitionResult {
            state,
            runs_scored: run_count(&scorers),
            scorers,
            advancement,
            out_runner,
            outs_on_play,
            half_inning_over: false,
            left_on_base: 0,
            reached_on_error,
        };
    }

    let (scorers, advancement) = match third_out_policy(outcome) {
        ThirdOutRuns::Nullify => (
            Vec::new(),
            advancement.into_iter().filter(|event| !event.is_run()).collect(),
        ),
        ThirdOutRuns::Keep => (scorers, advancement),
    };

    TransitionResult {
        state: BaserunningState::empty(),
        runs_scored: run_count(&scorers),
        scorers,
        advancement,
        out_runner,
        outs_on_play,
        half_inning_over: true,
        left_on_base: state.occupancy().count(),
        reached_on_error,
    }
}

fn run_count<T>(scorers: &[T]) -> u8 {
    // Three runners and the batter at most.
    u8::try_from(scorers.len()).unwrap_or(u8::MAX)
}
