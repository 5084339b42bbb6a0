//! Line score and box score bookkeeping.

use serde::Serialize;

use crate::baserunning::Outcome;
use crate::game::{HalfInning, Lineup, Team};
use crate::player::PlayerId;

/// Counting batting statistics for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BattingLine {
    /// Plate appearances.
    pub pa: u32,
    /// Official at-bats.
    pub ab: u32,
    /// Runs scored.
    pub r: u32,
    /// Hits.
    pub h: u32,
    /// Doubles.
    pub doubles: u32,
    /// Triples.
    pub triples: u32,
    /// Home runs.
    pub hr: u32,
    /// Runs batted in.
    pub rbi: u32,
    /// Walks, intentional included.
    pub bb: u32,
    /// Intentional walks.
    pub ibb: u32,
    /// Times hit by a pitch.
    pub hbp: u32,
    /// Strikeouts.
    pub so: u32,
    /// Sacrifice flies.
    pub sf: u32,
    /// Sacrifice bunts.
    pub sh: u32,
    /// Times reached on an error.
    pub roe: u32,
}

impl BattingLine {
    /// Credit one plate appearance.
    pub fn record_plate_appearance(&mut self, outcome: Outcome, rbi: u8) {
        self.pa += 1;
        self.rbi += u32::from(rbi);
        if outcome.is_at_bat() {
            self.ab += 1;
        }
        if outcome.is_hit() {
            self.h += 1;
        }
        match outcome {
            Outcome::Double => self.doubles += 1,
            Outcome::Triple => self.triples += 1,
            Outcome::HomeRun => self.hr += 1,
            Outcome::Walk => self.bb += 1,
            Outcome::IntentionalWalk => {
                self.bb += 1;
                self.ibb += 1;
            }
            Outcome::HitByPitch => self.hbp += 1,
            Outcome::Strikeout => self.so += 1,
            Outcome::SacrificeFly => self.sf += 1,
            Outcome::SacrificeBunt => self.sh += 1,
            Outcome::ReachedOnError => self.roe += 1,
            Outcome::Single
            | Outcome::GroundOut
            | Outcome::FlyOut
            | Outcome::LineOut
            | Outcome::PopOut
            | Outcome::FieldersChoice
            | Outcome::CatcherInterference => {}
        }
    }

    /// Add another line's totals into this one.
    pub fn merge(&mut self, other: &BattingLine) {
        self.pa += other.pa;
        self.ab += other.ab;
        self.r += other.r;
        self.h += other.h;
        self.doubles += other.doubles;
        self.triples += other.triples;
        self.hr += other.hr;
        self.rbi += other.rbi;
        self.bb += other.bb;
        self.ibb += other.ibb;
        self.hbp += other.hbp;
        self.so += other.so;
        self.sf += other.sf;
        self.sh += other.sh;
        self.roe += other.roe;
    }

    /// Hits per at-bat (0.0 with no at-bats).
    #[must_use]
    pub fn average(&self) -> f64 {
        if self.ab == 0 {
            return 0.0;
        }
        f64::from(self.h) / f64::from(self.ab)
    }

    /// Times on base per qualifying plate appearance (0.0 when undefined).
    #[must_use]
    pub fn on_base_percentage(&self) -> f64 {
        let denominator = self.ab + self.bb + self.hbp + self.sf;
        if denominator == 0 {
            return 0.0;
        }
        f64::from(self.h + self.bb + self.hbp) / f64::from(denominator)
    }

    /// Total bases per at-bat (0.0 with no at-bats).
    #[must_use]
    pub fn slugging(&self) -> f64 {
        if self.ab == 0 {
            return 0.0;
        }
        let singles = self.h - self.doubles - self.triples - self.hr;
        let total_bases = singles + 2 * self.doubles + 3 * self.triples + 4 * self.hr;
        f64::from(total_bases) / f64::from(self.ab)
    }
}

/// A batter and their line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatterEntry {
    /// The batter.
    pub player: PlayerId,
    /// Their statistics.
    pub line: BattingLine,
}

/// One team's half of the box score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamBox {
    /// Team name.
    pub name: String,
    /// Batters in lineup order.
    pub batters: Vec<BatterEntry>,
    /// Runs scored.
    pub runs: u32,
    /// Hits.
    pub hits: u32,
    /// Errors committed in the field.
    pub errors: u32,
    /// Runners stranded at the end of half-innings.
    pub left_on_base: u32,
}

impl TeamBox {
    /// An empty box for a lineup.
    #[must_use]
    pub fn new(lineup: &Lineup) -> Self {
        Self {
            name: lineup.name().to_string(),
            batters: lineup
                .players()
                .iter()
                .map(|player| BatterEntry {
                    player: player.clone(),
                    line: BattingLine::default(),
                })
                .collect(),
            runs: 0,
            hits: 0,
            errors: 0,
            left_on_base: 0,
        }
    }

    /// The line for `player`, if they batted for this team.
    #[must_use]
    pub fn line(&self, player: &PlayerId) -> Option<&BattingLine> {
        self.batters
            .iter()
            .find(|entry| &entry.player == player)
            .map(|entry| &entry.line)
    }

    /// The line for `player`, added at the bottom if missing.
    pub fn line_mut(&mut self, player: &PlayerId) -> &mut BattingLine {
        let index = match self.batters.iter().position(|entry| &entry.player == player) {
            Some(index) => index,
            None => {
                self.batters.push(BatterEntry {
                    player: player.clone(),
                    line: BattingLine::default(),
                });
                self.batters.len() - 1
            }
        };
        &mut self.batters[index].line
    }
}

/// Box score for both teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoxScore {
    /// Visiting team.
    pub away: TeamBox,
    /// Home team.
    pub home: TeamBox,
}

impl BoxScore {
    /// An empty box score for two lineups.
    #[must_use]
    pub fn new(away: &Lineup, home: &Lineup) -> Self {
        Self {
            away: TeamBox::new(away),
            home: TeamBox::new(home),
        }
    }

    /// One team's box.
    #[must_use]
    pub const fn team(&self, team: Team) -> &TeamBox {
        match team {
            Team::Away => &self.away,
            Team::Home => &self.home,
        }
    }

    /// One team's box, mutably.
    pub fn team_mut(&mut self, team: Team) -> &mut TeamBox {
        match team {
            Team::Away => &mut self.away,
            Team::Home => &mut self.home,
        }
    }
}

/// Runs per inning for both teams.
///
/// A half-inning gets an entry once it starts, so an unplayed bottom of the
/// last inning has no entry for the home team.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LineScore {
    /// Visiting team's runs by inning.
    pub away: Vec<u32>,
    /// Home team's runs by inning.
    pub home: Vec<u32>,
}

impl LineScore {
    /// Open the entry for a half-inning.
    pub fn start(&mut self, half_inning: HalfInning) {
        let innings = self.innings_mut(half_inning.batting_team());
        let inning = usize::from(half_inning.inning);
        if innings.len() < inning {
            innings.resize(inning, 0);
        }
    }

    /// Add runs to a half-inning.
    pub fn add_runs(&mut self, half_inning: HalfInning, runs: u8) {
        self.start(half_inning);
        let innings = self.innings_mut(half_inning.batting_team());
        let index = usize::from(half_inning.inning) - 1;
        innings[index] += u32::from(runs);
    }

    /// Runs by inning for one team.
    #[must_use]
    pub fn innings(&self, team: Team) -> &[u32] {
        match team {
            Team::Away => &self.away,
            Team::Home => &self.home,
        }
    }

    /// Total runs for one team.
    #[must_use]
    pub fn total(&self, team: Team) -> u32 {
        self.innings(team).iter().sum()
    }

    fn innings_mut(&mut self, team: Team) -> &mut Vec<u32> {
        match team {
            Team::Away => &mut self.away,
            Team::Home => &mut self.home,
        }
    }
}
