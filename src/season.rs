//! Season replay.
//!
//! Games are independent, so a season replays them in parallel. Each rayon
//! worker folds its games into a private [`SeasonSummary`] and the partial
//! summaries are merged at the end. Nothing in the summary depends on which
//! thread replayed which game.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::game::{BattingLine, GameConfig, GameResult, Team, TeamBox, replay_game};
use crate::player::PlayerId;
use crate::script::{GameScript, SeasonScript};

/// Win-loss record and run totals for one team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TeamRecord {
    /// Games won.
    pub wins: u32,
    /// Games lost.
    pub losses: u32,
    /// Games tied at the inning limit.
    pub ties: u32,
    /// Runs scored.
    pub runs_for: u32,
    /// Runs allowed.
    pub runs_against: u32,
}

impl TeamRecord {
    /// Games played.
    #[must_use]
    pub const fn games(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// Wins over decisions, ties excluded (0.0 with no decisions).
    #[must_use]
    pub fn winning_percentage(&self) -> f64 {
        let decisions = self.wins + self.losses;
        if decisions == 0 {
            return 0.0;
        }
        f64::from(self.wins) / f64::from(decisions)
    }

    fn merge(&mut self, other: &TeamRecord) {
        self.wins += other.wins;
        self.losses += other.losses;
        self.ties += other.ties;
        self.runs_for += other.runs_for;
        self.runs_against += other.runs_against;
    }
}

/// One team's season: its record and its batters' totals.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TeamSeason {
    /// Standings record.
    pub record: TeamRecord,
    /// Season batting lines by player.
    pub batters: BTreeMap<PlayerId, BattingLine>,
}

impl TeamSeason {
    fn add_game(&mut self, team_box: &TeamBox, runs_for: u32, runs_against: u32) {
        self.record.runs_for += runs_for;
        self.record.runs_against += runs_against;
        for entry in &team_box.batters {
            if entry.line.pa > 0 || entry.line.r > 0 {
                self.batters
                    .entry(entry.player.clone())
                    .or_default()
                    .merge(&entry.line);
            }
        }
    }

    fn merge(&mut self, other: &TeamSeason) {
        self.record.merge(&other.record);
        for (player, line) in &other.batters {
            self.batters.entry(player.clone()).or_default().merge(line);
        }
    }
}

/// A game whose script could not be replayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedGame {
    /// Position of the game in the season script.
    pub index: usize,
    /// Game id.
    pub id: String,
    /// Why it failed.
    pub message: String,
}

/// Aggregated results of a season replay.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SeasonSummary {
    /// Games replayed successfully.
    pub games_replayed: u64,
    /// Per-team standings and batting, by team name.
    pub teams: BTreeMap<String, TeamSeason>,
    /// Games that failed, in script order.
    pub failed: Vec<FailedGame>,
}

impl SeasonSummary {
    /// Fold one finished game into the summary.
    pub fn add_result(&mut self, result: &GameResult) {
        self.games_replayed += 1;
        let away_runs = result.score.away;
        let home_runs = result.score.home;

        let away = self.teams.entry(result.box_score.away.name.clone()).or_default();
        away.add_game(&result.box_score.away, away_runs, home_runs);
        tally_decision(&mut away.record, result.winner, Team::Away);

        let home = self.teams.entry(result.box_score.home.name.clone()).or_default();
        home.add_game(&result.box_score.home, home_runs, away_runs);
        tally_decision(&mut home.record, result.winner, Team::Home);
    }

    /// Merge another partial summary into this one.
    pub fn merge(&mut self, other: SeasonSummary) {
        self.games_replayed += other.games_replayed;
        for (name, season) in other.teams {
            self.teams.entry(name).or_default().merge(&season);
        }
        self.failed.extend(other.failed);
        self.failed.sort_by_key(|failed| failed.index);
    }

    /// Team names ordered by winning percentage, then wins, then name.
    #[must_use]
    pub fn standings(&self) -> Vec<(&str, &TeamRecord)> {
        let mut standings: Vec<(&str, &TeamRecord)> = self
            .teams
            .iter()
            .map(|(name, season)| (name.as_str(), &season.record))
            .collect();
        standings.sort_by(|(a_name, a), (b_name, b)| {
            b.winning_percentage()
                .total_cmp(&a.winning_percentage())
                .then(b.wins.cmp(&a.wins))
                .then(a_name.cmp(b_name))
        });
        standings
    }
}

fn tally_decision(record: &mut TeamRecord, winner: Option<Team>, team: Team) {
    match winner {
        Some(winner) if winner == team => record.wins += 1,
        Some(_) => record.losses += 1,
        None => record.ties += 1,
    }
}

/// Replay every game of a season.
///
/// Games that fail to replay are listed in [`SeasonSummary::failed`] and do
/// not count toward the standings.
#[must_use]
pub fn replay_season(script: &SeasonScript, config: GameConfig) -> SeasonSummary {
    replay_season_with_progress(script, config, || {})
}

/// Replay every game of a season, calling `on_game` as each game finishes.
///
/// `on_game` runs on worker threads.
#[must_use]
pub fn replay_season_with_progress<F>(
    script: &SeasonScript,
    config: GameConfig,
    on_game: F,
) -> SeasonSummary
where
    F: Fn() + Sync,
{
    let summary = script
        .games
        .par_iter()
        .enumerate()
        .fold(SeasonSummary::default, |mut local, (index, game)| {
            replay_into(&mut local, index, game, config);
            on_game();
            local
        })
        .reduce(SeasonSummary::default, |mut a, b| {
            a.merge(b);
            a
        });

    info!(
        season = %script.name,
        games = summary.games_replayed,
        failed = summary.failed.len(),
        "season replayed"
    );
    summary
}

fn replay_into(summary: &mut SeasonSummary, index: usize, game: &GameScript, config: GameConfig) {
    match replay_game(game, config) {
        Ok(result) => summary.add_result(&result),
        Err(err) => {
            warn!(id = %game.id, error = %err, "game failed to replay");
            summary.failed.push(FailedGame {
                index,
                id: game.id.clone(),
                message: err.to_string(),
            });
        }
    }
}
