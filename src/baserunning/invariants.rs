//! Transition invariants - sanity checks that detect rule bugs.
//!
//! These should NEVER trigger for a correctly implemented rules table. They
//! back the property tests and fuzz targets, and the game engine asserts them
//! on every play in debug builds.

use std::collections::HashSet;

use crate::baserunning::{
    Base, BaserunningState, OUTS_PER_HALF_INNING, Outcome, ThirdOutRuns, TransitionResult,
    third_out_policy,
};

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invariant violation: {message}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl InvariantViolation {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Check a transition result against the state it was produced from.
///
/// Returns every violation found, or an empty list if all invariants hold.
#[must_use]
pub fn check_transition(
    before: &BaserunningState,
    outcome: Outcome,
    result: &TransitionResult,
) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let after = &result.state;

    // Bitmap agrees with slots
    for base in Base::ALL {
        if after.occupancy().is_occupied(base) != after.runner(base).is_some() {
            violations.push(InvariantViolation::new(format!(
                "occupancy {} disagrees with the runner slot on {base}",
                after.occupancy()
            )));
        }
    }

    // No runner on two bases
    let mut seen = HashSet::new();
    for (base, runner) in after.runners() {
        if !seen.insert(runner) {
            violations.push(InvariantViolation::new(format!(
                "runner {runner} appears twice (again on {base})"
            )));
        }
    }

    if usize::from(result.runs_scored) != result.scorers.len() {
        violations.push(InvariantViolation::new(format!(
            "runs_scored {} but {} scorers",
            result.runs_scored,
            result.scorers.len()
        )));
    }

    // Run conservation against the movement log
    let crossed: Vec<_> = result
        .advancement
        .iter()
        .filter(|event| event.is_run())
        .map(|event| &event.runner)
        .collect();
    if crossed.len() != result.scorers.len() || !crossed.iter().zip(&result.scorers).all(|(a, b)| *a == b)
    {
        violations.push(InvariantViolation::new(format!(
            "scorers {:?} do not match runners sent home in the log {crossed:?}",
            result.scorers
        )));
    }

    if after.outs() >= OUTS_PER_HALF_INNING {
        violations.push(InvariantViolation::new(format!(
            "{} outs survived the inning boundary",
            after.outs()
        )));
    }

    if result.half_inning_over {
        if *after != BaserunningState::empty() {
            violations.push(InvariantViolation::new(format!(
                "half-inning over but next state is {after}"
            )));
        }
        if third_out_policy(outcome) == ThirdOutRuns::Nullify && result.runs_scored != 0 {
            violations.push(InvariantViolation::new(format!(
                "{outcome} made the third out but {} runs counted",
                result.runs_scored
            )));
        }
    } else {
        let expected = before.outs() + result.outs_on_play;
        if after.outs() != expected || result.outs_on_play > 1 {
            violations.push(InvariantViolation::new(format!(
                "outs went from {} to {} with {} recorded on the play",
                before.outs(),
                after.outs(),
                result.outs_on_play
            )));
        }

        // Everyone involved is still on base, scored, or was retired.
        let involved = before.occupancy().count() + 1;
        let accounted = after.occupancy().count() + result.runs_scored + result.outs_on_play;
        if involved != accounted {
            violations.push(InvariantViolation::new(format!(
                "{involved} runners and batter involved but {accounted} accounted for"
            )));
        }
    }

    violations
}

/// Assert all transition invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_transition(before: &BaserunningState, outcome: Outcome, result: &TransitionResult) {
    let violations = check_transition(before, outcome, result);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!(
            "Transition invariant violations for {outcome} from {before}:\n  - {}",
            messages.join("\n  - ")
        );
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_transition(_before: &BaserunningState, _outcome: Outcome, _result: &TransitionResult) {}
