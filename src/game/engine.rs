//! Game engine: applies scripted outcomes and keeps score.

use serde::Serialize;
use tracing::{debug, info};

use crate::baserunning::{BaserunningState, Outcome, TransitionResult, assert_transition, transition};
use crate::error::GameError;
use crate::game::{BoxScore, GameConfig, HalfInning, InningHalf, LineScore, Lineup, Team};
use crate::player::PlayerId;
use crate::script::GameScript;

/// Runs for each team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Score {
    /// Visiting team's runs.
    pub away: u32,
    /// Home team's runs.
    pub home: u32,
}

impl Score {
    /// Runs for one team.
    #[must_use]
    pub const fn runs(self, team: Team) -> u32 {
        match team {
            Team::Away => self.away,
            Team::Home => self.home,
        }
    }

    /// The leading team, `None` when tied.
    #[must_use]
    pub const fn leader(self) -> Option<Team> {
        if self.home > self.away {
            Some(Team::Home)
        } else if self.away > self.home {
            Some(Team::Away)
        } else {
            None
        }
    }

    fn add(&mut self, team: Team, runs: u8) {
        match team {
            Team::Away => self.away += u32::from(runs),
            Team::Home => self.home += u32::from(runs),
        }
    }
}

/// One recorded plate appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayRecord {
    /// When it happened.
    pub half_inning: HalfInning,
    /// Who batted.
    pub batter: PlayerId,
    /// How the plate appearance ended.
    pub outcome: Outcome,
    /// Outs and runners before the play.
    pub before: BaserunningState,
    /// What the play did.
    pub result: TransitionResult,
}

/// Final result of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// Final score.
    pub score: Score,
    /// The winning team (None if tied).
    pub winner: Option<Team>,
    /// Innings started, the last possibly without its bottom half.
    pub innings_played: u16,
    /// Runs by inning.
    pub line_score: LineScore,
    /// Per-batter statistics.
    pub box_score: BoxScore,
    /// Every plate appearance in order.
    pub plays: Vec<PlayRecord>,
}

/// A game in progress.
///
/// Owns the one live [`BaserunningState`] and replaces it after every play.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    away: Lineup,
    home: Lineup,
    half_inning: HalfInning,
    state: BaserunningState,
    /// Plate appearances taken, indexed away then home.
    turns: [usize; 2],
    score: Score,
    line_score: LineScore,
    box_score: BoxScore,
    plays: Vec<PlayRecord>,
    over: bool,
}

impl Game {
    /// Start a game at the top of the first.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(away: Lineup, home: Lineup, config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let mut line_score = LineScore::default();
        line_score.start(HalfInning::FIRST);
        let box_score = BoxScore::new(&away, &home);
        Ok(Self {
            config,
            away,
            home,
            half_inning: HalfInning::FIRST,
            state: BaserunningState::empty(),
            turns: [0, 0],
            score: Score::default(),
            line_score,
            box_score,
            plays: Vec::new(),
            over: false,
        })
    }

    /// The half-inning being played.
    #[must_use]
    pub const fn half_inning(&self) -> HalfInning {
        self.half_inning
    }

    /// Outs and runners right now.
    #[must_use]
    pub const fn state(&self) -> &BaserunningState {
        &self.state
    }

    /// Current score.
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    /// Whether the final out has been made.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.over
    }

    /// Plays recorded so far.
    #[must_use]
    pub fn plays(&self) -> &[PlayRecord] {
        &self.plays
    }

    /// Line score so far.
    #[must_use]
    pub const fn line_score(&self) -> &LineScore {
        &self.line_score
    }

    /// Box score so far.
    #[must_use]
    pub const fn box_score(&self) -> &BoxScore {
        &self.box_score
    }

    /// A team's lineup.
    #[must_use]
    pub const fn lineup(&self, team: Team) -> &Lineup {
        match team {
            Team::Away => &self.away,
            Team::Home => &self.home,
        }
    }

    /// The batter due up.
    #[must_use]
    pub fn due_up(&self) -> &PlayerId {
        let team = self.half_inning.batting_team();
        self.lineup(team).batter(self.turns[team_index(team)])
    }

    /// Apply the next plate appearance.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] after the final out and
    /// [`GameError::BatterOnBase`] if the due batter is still a runner (a
    /// lineup too short for the situation).
    pub fn apply(&mut self, outcome: Outcome) -> Result<&PlayRecord, GameError> {
        if self.over {
            return Err(GameError::GameOver);
        }

        let half_inning = self.half_inning;
        let team = half_inning.batting_team();
        let batter = self.due_up().clone();
        if self.state.base_of(&batter).is_some() {
            return Err(GameError::BatterOnBase { batter });
        }

        let result = transition(&self.state, outcome, &batter);
        assert_transition(&self.state, outcome, &result);
        self.turns[team_index(team)] += 1;

        self.credit(half_inning, &batter, outcome, &result);
        debug!(
            %half_inning,
            %batter,
            %outcome,
            runs = result.runs_scored,
            after = %result.state,
            "play"
        );

        let before = std::mem::replace(&mut self.state, result.state.clone());
        let half_inning_over = result.half_inning_over;
        let index = self.plays.len();
        self.plays.push(PlayRecord {
            half_inning,
            batter,
            outcome,
            before,
            result,
        });

        self.check_game_end(half_inning_over);
        Ok(&self.plays[index])
    }

    /// Consume the game into its result.
    #[must_use]
    pub fn into_result(self) -> GameResult {
        GameResult {
            score: self.score,
            winner: self.score.leader(),
            innings_played: self.half_inning.inning,
            line_score: self.line_score,
            box_score: self.box_score,
            plays: self.plays,
        }
    }

    fn credit(
        &mut self,
        half_inning: HalfInning,
        batter: &PlayerId,
        outcome: Outcome,
        result: &TransitionResult,
    ) {
        let team = half_inning.batting_team();
        let rbi = if result.reached_on_error { 0 } else { result.runs_scored };

        let batting = self.box_score.team_mut(team);
        batting.line_mut(batter).record_plate_appearance(outcome, rbi);
        for scorer in &result.scorers {
            batting.line_mut(scorer).r += 1;
        }
        batting.runs += u32::from(result.runs_scored);
        if outcome.is_hit() {
            batting.hits += 1;
        }
        batting.left_on_base += u32::from(result.left_on_base);

        if result.reached_on_error {
            self.box_score.team_mut(half_inning.fielding_team()).errors += 1;
        }

        self.score.add(team, result.runs_scored);
        self.line_score.add_runs(half_inning, result.runs_scored);
    }

    fn check_game_end(&mut self, half_inning_over: bool) {
        let HalfInning { inning, half } = self.half_inning;
        let regulation_done = inning >= self.config.innings;

        // Walk-off: the home team takes the lead in the last inning.
        if half == InningHalf::Bottom && regulation_done && self.score.leader() == Some(Team::Home)
        {
            self.finish("walk-off");
            return;
        }

        if !half_inning_over {
            return;
        }

        match half {
            InningHalf::Top if regulation_done && self.score.leader() == Some(Team::Home) => {
                self.finish("home team leads after the top half");
                return;
            }
            InningHalf::Bottom if regulation_done => {
                if self.score.leader().is_some() {
                    self.finish("regulation");
                    return;
                }
                if self.config.max_innings.is_some_and(|max| inning >= max) {
                    self.finish("inning limit reached");
                    return;
                }
            }
            InningHalf::Top | InningHalf::Bottom => {}
        }

        self.half_inning = self.half_inning.next();
        self.line_score.start(self.half_inning);
        debug!(half_inning = %self.half_inning, score = ?self.score, "half-inning change");
    }

    fn finish(&mut self, reason: &str) {
        self.over = true;
        debug!(
            reason,
            away = self.score.away,
            home = self.score.home,
            inning = self.half_inning.inning,
            "game over"
        );
    }
}

const fn team_index(team: Team) -> usize {
    match team {
        Team::Away => 0,
        Team::Home => 1,
    }
}

/// Replay a scripted game from first pitch to final out.
///
/// The script must describe exactly one complete game.
///
/// # Errors
///
/// Returns an error if a lineup or the configuration is invalid, the script
/// ends before the game does, or plays remain after the final out.
pub fn replay_game(script: &GameScript, config: GameConfig) -> Result<GameResult, GameError> {
    let away = Lineup::new(script.away.name.clone(), script.away.lineup.clone())?;
    let home = Lineup::new(script.home.name.clone(), script.home.lineup.clone())?;
    let mut game = Game::new(away, home, config)?;

    for (played, &outcome) in script.plays.iter().enumerate() {
        if game.is_over() {
            return Err(GameError::TrailingPlays {
                remaining: script.plays.len() - played,
            });
        }
        game.apply(outcome)?;
    }

    if !game.is_over() {
        return Err(GameError::ScriptExhausted {
            plays: script.plays.len(),
        });
    }

    let result = game.into_result();
    info!(
        id = %script.id,
        away = result.score.away,
        home = result.score.home,
        innings = result.innings_played,
        "game replayed"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lineup(prefix: &str) -> Lineup {
        let order = (1..=9).map(|i| PlayerId::from(format!("{prefix}{i}"))).collect();
        Lineup::new(prefix, order).unwrap()
    }

    fn new_game(config: GameConfig) -> Game {
        Game::new(lineup("a"), lineup("h"), config).unwrap()
    }

    fn three_up_three_down(game: &mut Game) {
        for _ in 0..3 {
            game.apply(Outcome::Strikeout).unwrap();
        }
    }

    #[test]
    fn test_first_batter_and_half_change() {
        let mut game = new_game(GameConfig::default());
        assert_eq!(game.due_up().as_str(), "a1");
        three_up_three_down(&mut game);
        assert_eq!(game.half_inning().half, InningHalf::Bottom);
        assert_eq!(game.due_up().as_str(), "h1");
        three_up_three_down(&mut game);
        assert_eq!(game.half_inning().inning, 2);
        assert_eq!(game.due_up().as_str(), "a4");
    }

    #[test]
    fn test_home_run_credits_batter_and_score() {
        let mut game = new_game(GameConfig::default());
        game.apply(Outcome::Single).unwrap();
        let play = game.apply(Outcome::HomeRun).unwrap();
        assert_eq!(play.result.runs_scored, 2);
        assert_eq!(game.score().away, 2);

        let away = &game.box_score().away;
        let hitter = away.line(&PlayerId::from("a2")).unwrap();
        assert_eq!(hitter.hr, 1);
        assert_eq!(hitter.rbi, 2);
        assert_eq!(hitter.r, 1);
        assert_eq!(away.line(&PlayerId::from("a1")).unwrap().r, 1);
        assert_eq!(away.hits, 2);
        assert_eq!(game.line_score().innings(Team::Away), [2]);
    }

    #[test]
    fn test_error_charged_to_fielding_team_without_rbi() {
        let mut game = new_game(GameConfig::default());
        game.apply(Outcome::Triple).unwrap();
        let play = game.apply(Outcome::ReachedOnError).unwrap();
        assert_eq!(play.result.runs_scored, 1);
        assert!(play.result.reached_on_error);

        assert_eq!(game.box_score().home.errors, 1);
        assert_eq!(game.box_score().away.errors, 0);
        let batter = game.box_score().away.line(&PlayerId::from("a2")).unwrap();
        assert_eq!(batter.rbi, 0);
        assert_eq!(batter.roe, 1);
        assert_eq!(batter.h, 0);
    }

    #[test]
    fn test_left_on_base_accumulates() {
        let mut game = new_game(GameConfig::default());
        game.apply(Outcome::Walk).unwrap();
        game.apply(Outcome::Walk).unwrap();
        three_up_three_down(&mut game);
        assert_eq!(game.box_score().away.left_on_base, 2);
    }

    #[test]
    fn test_apply_after_game_over_fails() {
        let config = GameConfig {
            innings: 1,
            max_innings: Some(1),
        };
        let mut game = new_game(config);
        three_up_three_down(&mut game);
        three_up_three_down(&mut game);
        assert!(game.is_over());
        assert_eq!(game.apply(Outcome::Single).unwrap_err(), GameError::GameOver);
        assert_eq!(game.into_result().winner, None);
    }

    #[test]
    fn test_short_lineup_batter_on_base() {
        let away = Lineup::new("solo", vec![PlayerId::from("only")]).unwrap();
        let mut game = Game::new(away, lineup("h"), GameConfig::default()).unwrap();
        game.apply(Outcome::Single).unwrap();
        assert_eq!(
            game.apply(Outcome::Single).unwrap_err(),
            GameError::BatterOnBase {
                batter: PlayerId::from("only")
            }
        );
    }
}
