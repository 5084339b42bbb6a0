//! Play-by-play and box score text.

// format! with push_str keeps the layout code readable
#![allow(clippy::format_push_string)]

use crate::baserunning::{BaserunningEvent, Destination, Origin, Outcome};
use crate::game::{GameResult, PlayRecord, Team, TeamBox};

/// Verb phrase for the batter's part of a play.
const fn verb(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Single => "singles",
        Outcome::Double => "doubles",
        Outcome::Triple => "triples",
        Outcome::HomeRun => "homers",
        Outcome::Walk => "walks",
        Outcome::IntentionalWalk => "is intentionally walked",
        Outcome::HitByPitch => "is hit by a pitch",
        Outcome::Strikeout => "strikes out",
        Outcome::GroundOut => "grounds out",
        Outcome::FlyOut => "flies out",
        Outcome::LineOut => "lines out",
        Outcome::PopOut => "pops out",
        Outcome::SacrificeFly => "hits a sacrifice fly",
        Outcome::SacrificeBunt => "lays down a sacrifice bunt",
        Outcome::FieldersChoice => "reaches on a fielder's choice",
        Outcome::ReachedOnError => "reaches on an error",
        Outcome::CatcherInterference => "reaches on catcher's interference",
    }
}

fn runner_sentence(event: &BaserunningEvent) -> Option<String> {
    if event.from == Origin::Bench {
        return None;
    }
    let runner = &event.runner;
    Some(match event.to {
        Destination::Home => format!("{runner} scores."),
        Destination::Dugout => format!("{runner} is out on the play."),
        Destination::First => format!("{runner} to first."),
        Destination::Second => format!("{runner} to second."),
        Destination::Third => format!("{runner} to third."),
    })
}

/// One line of play-by-play, rebuilt from the movement log.
///
/// ```text
/// Top 3: ruth singles. gehrig to third. lazzeri to second.
/// ```
#[must_use]
pub fn describe_play(play: &PlayRecord) -> String {
    let mut line = format!("{}: {} {}.", play.half_inning, play.batter, verb(play.outcome));
    for sentence in play.result.advancement.iter().filter_map(runner_sentence) {
        line.push(' ');
        line.push_str(&sentence);
    }
    line
}

/// Runs by inning with R/H/E totals.
///
/// A bottom half that was never played shows as `x`.
#[must_use]
pub fn render_line_score(result: &GameResult) -> String {
    let innings = usize::from(result.innings_played);
    let width = name_width(result);
    let mut output = String::new();

    output.push_str(&format!("{:width$}", ""));
    for inning in 1..=innings {
        output.push_str(&format!(" {inning:>3}"));
    }
    output.push_str("    R   H   E\n");

    for team in [Team::Away, Team::Home] {
        let team_box = result.box_score.team(team);
        let runs = result.line_score.innings(team);
        output.push_str(&format!("{:width$}", team_box.name));
        for inning in 0..innings {
            match runs.get(inning) {
                Some(r) => output.push_str(&format!(" {r:>3}")),
                None => output.push_str("   x"),
            }
        }
        output.push_str(&format!(
            "  {:>3} {:>3} {:>3}\n",
            result.line_score.total(team),
            team_box.hits,
            team_box.errors
        ));
    }
    output
}

fn name_width(result: &GameResult) -> usize {
    result
        .box_score
        .away
        .name
        .len()
        .max(result.box_score.home.name.len())
        .max(4)
}

fn render_team_box(output: &mut String, team_box: &TeamBox) {
    let width = team_box
        .batters
        .iter()
        .map(|entry| entry.player.as_str().len())
        .max()
        .unwrap_or(0)
        .max(team_box.name.len());

    output.push_str(&format!(
        "{:width$}  PA  AB   R   H  2B  3B  HR RBI  BB  SO\n",
        team_box.name
    ));
    for entry in &team_box.batters {
        let line = &entry.line;
        output.push_str(&format!(
            "{:width$} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3}\n",
            entry.player.as_str(),
            line.pa,
            line.ab,
            line.r,
            line.h,
            line.doubles,
            line.triples,
            line.hr,
            line.rbi,
            line.bb,
            line.so
        ));
    }
    output.push_str(&format!("LOB: {}\n", team_box.left_on_base));
}

/// Full game report: play-by-play, line score, then both box scores.
#[must_use]
pub fn render_game(result: &GameResult) -> String {
    let mut output = String::new();
    let away = &result.box_score.away.name;
    let home = &result.box_score.home.name;

    output.push_str(&format!("{away} at {home}\n"));
    output.push_str("========================================\n");

    let mut current = None;
    for play in &result.plays {
        if current != Some(play.half_inning) {
            current = Some(play.half_inning);
            output.push('\n');
        }
        output.push_str(&describe_play(play));
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&render_line_score(result));

    output.push('\n');
    render_team_box(&mut output, &result.box_score.away);
    output.push('\n');
    render_team_box(&mut output, &result.box_score.home);

    output.push('\n');
    let final_line = match result.winner {
        Some(team) => {
            let name = &result.box_score.team(team).name;
            let (winner, loser) = match team {
                Team::Away => (result.score.away, result.score.home),
                Team::Home => (result.score.home, result.score.away),
            };
            format!("Final: {name} win {winner}-{loser}")
        }
        None => format!("Final: tied {}-{}", result.score.away, result.score.home),
    };
    output.push_str(&final_line);
    if result.innings_played != 9 {
        output.push_str(&format!(" ({} innings)", result.innings_played));
    }
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baserunning::{BaserunningState, transition};
    use crate::game::{GameConfig, HalfInning, InningHalf, replay_game};
    use crate::player::PlayerId;
    use crate::script::{GameScript, TeamScript};

    fn record(before: BaserunningState, outcome: Outcome, batter: &str) -> PlayRecord {
        let batter = PlayerId::from(batter);
        let result = transition(&before, outcome, &batter);
        PlayRecord {
            half_inning: HalfInning {
                inning: 3,
                half: InningHalf::Top,
            },
            batter,
            outcome,
            before,
            result,
        }
    }

    #[test]
    fn test_describe_double() {
        let before = BaserunningState::new(
            0,
            Some(PlayerId::from("lazzeri")),
            Some(PlayerId::from("gehrig")),
            None,
        )
        .unwrap();
        let play = record(before, Outcome::Double, "ruth");
        assert_eq!(
            describe_play(&play),
            "Top 3: ruth doubles. gehrig scores. lazzeri scores."
        );
    }

    #[test]
    fn test_describe_single_and_fielders_choice() {
        let before =
            BaserunningState::new(1, Some(PlayerId::from("combs")), None, None).unwrap();
        let play = record(before.clone(), Outcome::Single, "koenig");
        assert_eq!(describe_play(&play), "Top 3: koenig singles. combs to second.");

        let play = record(before, Outcome::FieldersChoice, "koenig");
        assert_eq!(
            describe_play(&play),
            "Top 3: koenig reaches on a fielder's choice. combs is out on the play."
        );
    }

    #[test]
    fn test_render_game_walk_off() {
        let team = |name: &str, prefix: &str| TeamScript {
            name: name.to_string(),
            lineup: (1..=9).map(|i| PlayerId::from(format!("{prefix}{i}"))).collect(),
        };
        let mut plays = vec![Outcome::Strikeout; 3];
        plays.push(Outcome::HomeRun);
        let script = GameScript {
            id: "walkoff".to_string(),
            away: team("Visitors", "v"),
            home: team("Locals", "l"),
            plays,
        };
        let config = GameConfig {
            innings: 1,
            max_innings: None,
        };
        let result = replay_game(&script, config).unwrap();
        let text = render_game(&result);

        assert!(text.starts_with("Visitors at Locals\n"));
        assert!(text.contains("Bottom 1: l1 homers.\n"));
        assert!(text.contains("Final: Locals win 1-0 (1 innings)"));
        let line_score = render_line_score(&result);
        assert!(line_score.contains("Visitors   0    0   0   0"));
        assert!(line_score.contains("Locals     1    1   1   0"));
    }
}
