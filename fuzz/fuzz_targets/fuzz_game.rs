#![no_main]

//! Whole-game fuzzer.
//!
//! Drives a game with arbitrary outcomes and short lineups. Errors are fine;
//! panics and broken bookkeeping are not.

use arbitrary::Arbitrary;
use diamond::game::Team;
use diamond::{Game, GameConfig, Lineup, Outcome, PlayerId};
use libfuzzer_sys::fuzz_target;

/// Structured input for game fuzzing.
#[derive(Arbitrary, Debug)]
struct GameInput {
    /// Lineup sizes (taken mod 9, plus 1).
    lineup_sizes: [u8; 2],
    /// Regulation innings (taken mod 9, plus 1).
    innings: u8,
    /// Extra innings allowed before a tie (None plays until decided).
    extra_innings: Option<u8>,
    /// Outcome indices (taken mod 17).
    plays: Vec<u8>,
}

fn lineup(name: &str, size: u8) -> Option<Lineup> {
    let order = (0..=size % 9)
        .map(|i| PlayerId::from(format!("{name}{i}")))
        .collect();
    Lineup::new(name, order).ok()
}

fuzz_target!(|input: GameInput| {
    let innings = u16::from(input.innings % 9) + 1;
    let config = GameConfig {
        innings,
        max_innings: input.extra_innings.map(|extra| innings + u16::from(extra % 5)),
    };
    let (Some(away), Some(home)) = (
        lineup("a", input.lineup_sizes[0]),
        lineup("h", input.lineup_sizes[1]),
    ) else {
        return;
    };
    let Ok(mut game) = Game::new(away, home, config) else {
        return;
    };

    for index in input.plays.iter().take(2000) {
        let outcome = Outcome::ALL[usize::from(*index) % Outcome::ALL.len()];
        if game.apply(outcome).is_err() {
            break;
        }
    }

    let score = game.score();
    let line_score = game.line_score();
    assert_eq!(line_score.total(Team::Away), score.away);
    assert_eq!(line_score.total(Team::Home), score.home);
    assert_eq!(game.box_score().away.runs, score.away);
    assert_eq!(game.box_score().home.runs, score.home);
});
