//! Plate-appearance outcomes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// How a plate appearance ended.
///
/// Closed set: every variant is routed to exactly one rule handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Batter reaches first on a hit.
    Single,
    /// Batter reaches second on a hit.
    Double,
    /// Batter reaches third on a hit.
    Triple,
    /// Batter circles the bases.
    HomeRun,
    /// Four balls.
    Walk,
    /// Walk issued on purpose.
    IntentionalWalk,
    /// Batter struck by a pitch.
    HitByPitch,
    /// Third strike.
    Strikeout,
    /// Batter retired on a ground ball.
    GroundOut,
    /// Batter retired on a caught fly ball.
    FlyOut,
    /// Batter retired on a caught line drive.
    LineOut,
    /// Batter retired on an infield pop-up.
    PopOut,
    /// Caught fly ball that scores the runner from third.
    SacrificeFly,
    /// Bunt that trades the batter for runner advancement.
    SacrificeBunt,
    /// Defense retires a forced runner instead of the batter.
    FieldersChoice,
    /// Batter reaches on a defensive misplay.
    ReachedOnError,
    /// Batter awarded first after catcher interference.
    CatcherInterference,
}

/// Broad grouping of outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeFamily {
    /// Single, double, triple, home run.
    Hit,
    /// Walk, intentional walk, hit-by-pitch.
    Walk,
    /// Strikeout.
    Strikeout,
    /// Ground, fly, line and pop outs.
    BallInPlayOut,
    /// Sacrifice fly and sacrifice bunt.
    Sacrifice,
    /// Fielder's choice, reached on error, catcher interference.
    ReachBase,
}

impl Outcome {
    /// Every outcome, in declaration order.
    pub const ALL: [Outcome; 17] = [
        Outcome::Single,
        Outcome::Double,
        Outcome::Triple,
        Outcome::HomeRun,
        Outcome::Walk,
        Outcome::IntentionalWalk,
        Outcome::HitByPitch,
        Outcome::Strikeout,
        Outcome::GroundOut,
        Outcome::FlyOut,
        Outcome::LineOut,
        Outcome::PopOut,
        Outcome::SacrificeFly,
        Outcome::SacrificeBunt,
        Outcome::FieldersChoice,
        Outcome::ReachedOnError,
        Outcome::CatcherInterference,
    ];

    /// The family this outcome belongs to.
    #[must_use]
    pub const fn family(self) -> OutcomeFamily {
        match self {
            Outcome::Single | Outcome::Double | Outcome::Triple | Outcome::HomeRun => {
                OutcomeFamily::Hit
            }
            Outcome::Walk | Outcome::IntentionalWalk | Outcome::HitByPitch => OutcomeFamily::Walk,
            Outcome::Strikeout => OutcomeFamily::Strikeout,
            Outcome::GroundOut | Outcome::FlyOut | Outcome::LineOut | Outcome::PopOut => {
                OutcomeFamily::BallInPlayOut
            }
            Outcome::SacrificeFly | Outcome::SacrificeBunt => OutcomeFamily::Sacrifice,
            Outcome::FieldersChoice | Outcome::ReachedOnError | Outcome::CatcherInterference => {
                OutcomeFamily::ReachBase
            }
        }
    }

    /// Whether the batter is credited with a hit.
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self.family(), OutcomeFamily::Hit)
    }

    /// Whether the plate appearance counts as an official at-bat.
    #[must_use]
    pub const fn is_at_bat(self) -> bool {
        !matches!(
            self,
            Outcome::Walk
                | Outcome::IntentionalWalk
                | Outcome::HitByPitch
                | Outcome::SacrificeFly
                | Outcome::SacrificeBunt
                | Outcome::CatcherInterference
        )
    }

    /// Stable snake_case name, matching the serialized form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Outcome::Single => "single",
            Outcome::Double => "double",
            Outcome::Triple => "triple",
            Outcome::HomeRun => "home_run",
            Outcome::Walk => "walk",
            Outcome::IntentionalWalk => "intentional_walk",
            Outcome::HitByPitch => "hit_by_pitch",
            Outcome::Strikeout => "strikeout",
            Outcome::GroundOut => "ground_out",
            Outcome::FlyOut => "fly_out",
            Outcome::LineOut => "line_out",
            Outcome::PopOut => "pop_out",
            Outcome::SacrificeFly => "sacrifice_fly",
            Outcome::SacrificeBunt => "sacrifice_bunt",
            Outcome::FieldersChoice => "fielders_choice",
            Outcome::ReachedOnError => "reached_on_error",
            Outcome::CatcherInterference => "catcher_interference",
        }
    }

    /// Scorer's abbreviation.
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Outcome::Single => "1B",
            Outcome::Double => "2B",
            Outcome::Triple => "3B",
            Outcome::HomeRun => "HR",
            Outcome::Walk => "BB",
            Outcome::IntentionalWalk => "IBB",
            Outcome::HitByPitch => "HBP",
            Outcome::Strikeout => "K",
            Outcome::GroundOut => "GO",
            Outcome::FlyOut => "FO",
            Outcome::LineOut => "LO",
            Outcome::PopOut => "PO",
            Outcome::SacrificeFly => "SF",
            Outcome::SacrificeBunt => "SH",
            Outcome::FieldersChoice => "FC",
            Outcome::ReachedOnError => "E",
            Outcome::CatcherInterference => "CI",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Outcome {
    type Err = ParseError;

    /// Accepts snake_case or kebab-case names and scorer abbreviations,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        let alias = match key.as_str() {
            "1b" => Some(Outcome::Single),
            "2b" => Some(Outcome::Double),
            "3b" => Some(Outcome::Triple),
            "hr" => Some(Outcome::HomeRun),
            "bb" => Some(Outcome::Walk),
            "ibb" => Some(Outcome::IntentionalWalk),
            "hbp" => Some(Outcome::HitByPitch),
            "k" | "so" => Some(Outcome::Strikeout),
            "go" => Some(Outcome::GroundOut),
            "fo" => Some(Outcome::FlyOut),
            "lo" => Some(Outcome::LineOut),
            "po" => Some(Outcome::PopOut),
            "sf" => Some(Outcome::SacrificeFly),
            "sh" | "sac" => Some(Outcome::SacrificeBunt),
            "fc" => Some(Outcome::FieldersChoice),
            "e" | "roe" => Some(Outcome::ReachedOnError),
            "ci" => Some(Outcome::CatcherInterference),
            _ => None,
        };
        alias
            .or_else(|| Outcome::ALL.into_iter().find(|o| o.name() == key))
            .ok_or_else(|| ParseError::UnknownOutcome(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_outcomes_distinct() {
        let mut names: Vec<&str> = Outcome::ALL.iter().map(|o| o.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 17);
    }

    #[test]
    fn test_parse_names_and_abbreviations() {
        for outcome in Outcome::ALL {
            assert_eq!(outcome.name().parse(), Ok(outcome));
            assert_eq!(outcome.abbreviation().parse(), Ok(outcome));
        }
        assert_eq!("home-run".parse(), Ok(Outcome::HomeRun));
        assert_eq!(
            "balk".parse::<Outcome>(),
            Err(ParseError::UnknownOutcome("balk".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&Outcome::FieldersChoice).unwrap();
        assert_eq!(json, "\"fielders_choice\"");
        let outcome: Outcome = serde_json::from_str("\"sacrifice_fly\"").unwrap();
        assert_eq!(outcome, Outcome::SacrificeFly);
    }

    #[test]
    fn test_at_bat_and_hit_flags() {
        assert!(Outcome::Double.is_hit());
        assert!(Outcome::Double.is_at_bat());
        assert!(!Outcome::ReachedOnError.is_hit());
        assert!(Outcome::ReachedOnError.is_at_bat());
        assert!(!Outcome::SacrificeFly.is_at_bat());
        assert!(!Outcome::HitByPitch.is_at_bat());
        assert_eq!(Outcome::FlyOut.family(), OutcomeFamily::BallInPlayOut);
    }
}
