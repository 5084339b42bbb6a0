#![no_main]

//! Chained transition fuzzer.
//!
//! Feeds arbitrary outcome sequences through the state machine, carrying the
//! state from one play to the next the way a game does, and checks every
//! transition invariant along the way.

use arbitrary::Arbitrary;
use diamond::baserunning::check_transition;
use diamond::{BaseOccupancy, BaserunningState, Outcome, PlayerId, transition};
use libfuzzer_sys::fuzz_target;

/// Structured input for transition fuzzing.
#[derive(Arbitrary, Debug)]
struct TransitionInput {
    /// Starting outs (taken mod 3).
    outs: u8,
    /// Starting occupancy bitmap (taken mod 8).
    bases: u8,
    /// Outcome indices (taken mod 17).
    plays: Vec<u8>,
}

fuzz_target!(|input: TransitionInput| {
    let Some(occupancy) = BaseOccupancy::from_bits(input.bases % 8) else {
        return;
    };
    let Ok(mut state) = BaserunningState::with_placeholder_runners(input.outs % 3, occupancy) else {
        return;
    };

    // Fresh batter ids so no batter is ever already on base
    for (i, index) in input.plays.iter().take(200).enumerate() {
        let outcome = Outcome::ALL[usize::from(*index) % Outcome::ALL.len()];
        let batter = PlayerId::from(format!("b{i}"));
        let result = transition(&state, outcome, &batter);

        let violations = check_transition(&state, outcome, &result);
        if !violations.is_empty() {
            panic!("{outcome} from {state}: {violations:?}");
        }
        assert_eq!(transition(&state, outcome, &batter), result, "not deterministic");

        state = result.state;
    }
});
