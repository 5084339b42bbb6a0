//! Transition table tests.
//!
//! Spells out the expected end state of every outcome from every base state,
//! so a change to any rule shows up as a named failing row.
//!
//! Run with: cargo test transition_table

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use diamond::baserunning::{Destination, check_transition};
use diamond::{BaseOccupancy, BaserunningState, Outcome, PlayerId, transition};

/// Base states in bitmap order, matching each expectation row below.
const STARTS: [&str; 8] = ["---", "1--", "-2-", "12-", "--3", "1-3", "-23", "123"];

/// (bases after, runs) for each of [`STARTS`].
type Expected = [(&'static str, u8); 8];

const SINGLE: Expected = [
    ("1--", 0),
    ("12-", 0),
    ("1-3", 0),
    ("123", 0),
    ("1--", 1),
    ("12-", 1),
    ("1-3", 1),
    ("123", 1),
];

const DOUBLE: Expected = [
    ("-2-", 0),
    ("-2-", 1),
    ("-2-", 1),
    ("-2-", 2),
    ("-2-", 1),
    ("-2-", 2),
    ("-2-", 2),
    ("-2-", 3),
];

const TRIPLE: Expected = [
    ("--3", 0),
    ("--3", 1),
    ("--3", 1),
    ("--3", 2),
    ("--3", 1),
    ("--3", 2),
    ("--3", 2),
    ("--3", 3),
];

const HOME_RUN: Expected = [
    ("---", 1),
    ("---", 2),
    ("---", 2),
    ("---", 3),
    ("---", 2),
    ("---", 3),
    ("---", 3),
    ("---", 4),
];

const WALK: Expected = [
    ("1--", 0),
    ("12-", 0),
    ("12-", 0),
    ("123", 0),
    ("1-3", 0),
    ("123", 0),
    ("123", 0),
    ("123", 1),
];

const HOLD: Expected = [
    ("---", 0),
    ("1--", 0),
    ("-2-", 0),
    ("12-", 0),
    ("--3", 0),
    ("1-3", 0),
    ("-23", 0),
    ("123", 0),
];

const GROUND_OUT_NONE_OUT: Expected = [
    ("---", 0),
    ("-2-", 0),
    ("--3", 0),
    ("-23", 0),
    ("--3", 0),
    ("-23", 0),
    ("-23", 0),
    ("123", 0),
];

const GROUND_OUT_ONE_OUT: Expected = [
    ("---", 0),
    ("-2-", 0),
    ("--3", 0),
    ("-23", 0),
    ("---", 1),
    ("-2-", 1),
    ("--3", 1),
    ("-23", 1),
];

const SACRIFICE_FLY: Expected = [
    ("---", 0),
    ("1--", 0),
    ("-2-", 0),
    ("12-", 0),
    ("---", 1),
    ("1--", 1),
    ("-2-", 1),
    ("12-", 1),
];

const SACRIFICE_BUNT: Expected = [
    ("---", 0),
    ("-2-", 0),
    ("--3", 0),
    ("-23", 0),
    ("---", 1),
    ("-2-", 1),
    ("--3", 1),
    ("-23", 1),
];

const FIELDERS_CHOICE: Expected = [
    ("1--", 0),
    ("1--", 0),
    ("1-3", 0),
    ("12-", 0),
    ("1--", 1),
    ("1-3", 0),
    ("1-3", 1),
    ("123", 0),
];

fn batter() -> PlayerId {
    PlayerId::from("batter")
}

fn start(outs: u8, bases: &str) -> BaserunningState {
    BaserunningState::with_placeholder_runners(outs, bases.parse().unwrap()).unwrap()
}

/// Assert one outcome from every base state at `outs`; `outs_on_play` gives
/// the outs expected for each start.
fn assert_rows(outcome: Outcome, outs: u8, expected: &Expected, outs_on_play: impl Fn(&str) -> u8) {
    for (bases, (after, runs)) in STARTS.iter().zip(expected) {
        let before = start(outs, bases);
        let result = transition(&before, outcome, &batter());
        let context = format!("{outcome} from {bases} with {outs} out(s)");

        assert_eq!(result.state.occupancy().to_string(), *after, "{context}: bases");
        assert_eq!(result.runs_scored, *runs, "{context}: runs");
        assert_eq!(result.outs_on_play, outs_on_play(*bases), "{context}: outs on play");
        assert_eq!(result.state.outs(), outs + result.outs_on_play, "{context}: outs");
        assert!(!result.half_inning_over, "{context}");
        assert!(check_transition(&before, outcome, &result).is_empty(), "{context}");
    }
}

#[test]
fn test_hits() {
    for outs in 0..3 {
        assert_rows(Outcome::Single, outs, &SINGLE, |_| 0);
        assert_rows(Outcome::Double, outs, &DOUBLE, |_| 0);
        assert_rows(Outcome::Triple, outs, &TRIPLE, |_| 0);
        assert_rows(Outcome::HomeRun, outs, &HOME_RUN, |_| 0);
    }
}

#[test]
fn test_reached_on_error_moves_like_a_single() {
    for outs in 0..3 {
        assert_rows(Outcome::ReachedOnError, outs, &SINGLE, |_| 0);
    }
    let result = transition(&start(0, "---"), Outcome::ReachedOnError, &batter());
    assert!(result.reached_on_error);
}

#[test]
fn test_walk_family_forces_only() {
    for outcome in [
        Outcome::Walk,
        Outcome::IntentionalWalk,
        Outcome::HitByPitch,
        Outcome::CatcherInterference,
    ] {
        for outs in 0..3 {
            assert_rows(outcome, outs, &WALK, |_| 0);
        }
    }
}

#[test]
fn test_batter_outs_hold_runners() {
    for outcome in [
        Outcome::Strikeout,
        Outcome::FlyOut,
        Outcome::LineOut,
        Outcome::PopOut,
    ] {
        for outs in 0..2 {
            assert_rows(outcome, outs, &HOLD, |_| 1);
        }
    }
}

#[test]
fn test_ground_out() {
    assert_rows(Outcome::GroundOut, 0, &GROUND_OUT_NONE_OUT, |_| 1);
    assert_rows(Outcome::GroundOut, 1, &GROUND_OUT_ONE_OUT, |_| 1);
}

#[test]
fn test_sacrifices() {
    for outs in 0..2 {
        assert_rows(Outcome::SacrificeFly, outs, &SACRIFICE_FLY, |_| 1);
        assert_rows(Outcome::SacrificeBunt, outs, &SACRIFICE_BUNT, |_| 1);
    }
}

#[test]
fn test_fielders_choice() {
    let forced = |bases: &str| u8::from(bases.starts_with('1'));
    for outs in 0..2 {
        assert_rows(Outcome::FieldersChoice, outs, &FIELDERS_CHOICE, forced);
    }
}

#[test]
fn test_fielders_choice_retires_lead_forced_runner() {
    let cases = [("1--", "r1"), ("12-", "r2"), ("1-3", "r1"), ("123", "r3")];
    for (bases, retired) in cases {
        let result = transition(&start(0, bases), Outcome::FieldersChoice, &batter());
        assert_eq!(result.out_runner, Some(PlayerId::from(retired)), "from {bases}");
        assert_eq!(result.state.runner(diamond::Base::First), Some(&batter()));
        assert!(
            result
                .advancement
                .iter()
                .any(|event| event.runner.as_str() == retired && event.to == Destination::Dugout)
        );
    }
}

#[test]
fn test_third_out_ends_half_inning() {
    for outcome in Outcome::ALL {
        for bases in BaseOccupancy::ALL {
            let before = BaserunningState::with_placeholder_runners(2, bases).unwrap();
            let result = transition(&before, outcome, &batter());
            if result.outs_on_play == 0 {
                continue;
            }
            let context = format!("{outcome} from {bases} with 2 outs");
            assert!(result.half_inning_over, "{context}");
            assert_eq!(result.state, BaserunningState::empty(), "{context}");
            assert_eq!(result.runs_scored, 0, "{context}");
        }
    }
}

#[test]
fn test_left_on_base() {
    let result = transition(&start(2, "123"), Outcome::Strikeout, &batter());
    assert_eq!(result.left_on_base, 3);

    let result = transition(&start(2, "-23"), Outcome::GroundOut, &batter());
    // r3 crossed the plate before the out, but the run is erased; r2 stood on third.
    assert_eq!(result.runs_scored, 0);
    assert!(result.scorers.is_empty());
    assert_eq!(result.left_on_base, 1);
}

#[test]
fn test_two_out_hits_keep_outs() {
    let result = transition(&start(2, "--3"), Outcome::Single, &batter());
    assert_eq!(result.runs_scored, 1);
    assert_eq!(result.state.outs(), 2);
    assert!(!result.half_inning_over);
}
