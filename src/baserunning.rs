//! Baserunning state machine.
//!
//! Resolves one plate appearance in two stages:
//!
//! ```text
//! (state, outcome, batter)
//!        │
//!        ▼
//!   rule handler ──► RawTransition      (outs may reach 3)
//!        │
//!        ▼
//!   inning boundary ──► TransitionResult (third out resolved, state reset)
//! ```
//!
//! Both stages are pure: equal inputs always produce equal outputs, and the
//! input state is only borrowed.

mod advancement;
mod boundary;
mod invariants;
mod outcome;
mod rules;
mod state;

pub use advancement::{AdvancementRecorder, BaserunningEvent, Destination, Origin};
pub use boundary::{ThirdOutRuns, resolve_inning_boundary, third_out_policy};
pub use invariants::{InvariantViolation, assert_transition, check_transition};
pub use outcome::{Outcome, OutcomeFamily};
pub use state::{Base, BaseOccupancy, BaserunningState, OUTS_PER_HALF_INNING};

use serde::Serialize;
use tracing::trace;

use crate::error::StateError;
use crate::player::PlayerId;

/// Stage 1 output: the handler's transition, unaware of the inning boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTransition {
    /// Post-play state; outs may be 3.
    pub state: BaserunningState,
    /// Runners who crossed the plate, in order.
    pub scorers: Vec<PlayerId>,
    /// Every runner movement on the play.
    pub advancement: Vec<BaserunningEvent>,
    /// Baserunner retired instead of the batter.
    pub out_runner: Option<PlayerId>,
    /// Outs recorded on the play.
    pub outs_on_play: u8,
    /// Batter reached on a defensive misplay.
    pub reached_on_error: bool,
}

/// Final result of one plate appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionResult {
    /// State the next plate appearance starts from.
    pub state: BaserunningState,
    /// Runs that count. Always equals `scorers.len()`.
    pub runs_scored: u8,
    /// Runners who scored, in the order they crossed the plate.
    pub scorers: Vec<PlayerId>,
    /// Every runner movement on the play.
    pub advancement: Vec<BaserunningEvent>,
    /// Baserunner retired instead of the batter (fielder's choice).
    pub out_runner: Option<PlayerId>,
    /// Outs recorded on the play.
    pub outs_on_play: u8,
    /// The play made the third out and `state` is a fresh half-inning.
    pub half_inning_over: bool,
    /// Runners stranded when the half-inning ended, else 0.
    pub left_on_base: u8,
    /// Batter reached on a defensive misplay; the runs it produces feed
    /// earned-run accounting.
    pub reached_on_error: bool,
}

/// Resolve a plate appearance.
///
/// `batter` must not already be on base in `state`.
#[must_use]
pub fn transition(state: &BaserunningState, outcome: Outcome, batter: &PlayerId) -> TransitionResult {
    let raw = raw_transition(state, outcome, batter);
    let result = resolve_inning_boundary(outcome, raw);
    trace!(
        %outcome,
        %batter,
        before = %state,
        after = %result.state,
        runs = result.runs_scored,
        half_inning_over = result.half_inning_over,
        "transition"
    );
    result
}

/// [`transition`] for untrusted input: rejects a batter who is already on
/// base, which would otherwise put one runner on two bases.
///
/// # Errors
///
/// Returns [`StateError::BatterOnBase`] if `batter` is one of the runners.
pub fn try_transition(
    state: &BaserunningState,
    outcome: Outcome,
    batter: &PlayerId,
) -> Result<TransitionResult, StateError> {
    if let Some(base) = state.base_of(batter) {
        return Err(StateError::BatterOnBase {
            batter: batter.clone(),
            base,
        });
    }
    Ok(transition(state, outcome, batter))
}

/// Stage 1 only: apply the outcome's rule without resolving the third out.
#[must_use]
pub fn raw_transition(
    state: &BaserunningState,
    outcome: Outcome,
    batter: &PlayerId,
) -> RawTransition {
    let mut recorder = AdvancementRecorder::new();
    let handled = rules::handler_for(outcome)(state, batter, &mut recorder);
    RawTransition {
        state: handled.state,
        scorers: handled.scorers,
        advancement: recorder.into_events(),
        out_runner: handled.out_runner,
        outs_on_play: handled.outs_on_play,
        reached_on_error: handled.reached_on_error,
    }
}
