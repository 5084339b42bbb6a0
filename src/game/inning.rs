//! Teams and half-innings.

use std::fmt;

use serde::Serialize;

/// One side of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    /// Bats in the top half.
    Away,
    /// Bats in the bottom half.
    Home,
}

impl Team {
    /// The other team.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Team::Away => Team::Home,
            Team::Home => Team::Away,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Team::Away => "away",
            Team::Home => "home",
        })
    }
}

/// Top or bottom of an inning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InningHalf {
    /// Away team bats.
    Top,
    /// Home team bats.
    Bottom,
}

/// A half-inning, numbered from inning 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HalfInning {
    /// Inning number, starting at 1.
    pub inning: u16,
    /// Top or bottom.
    pub half: InningHalf,
}

impl HalfInning {
    /// Top of the first.
    pub const FIRST: Self = Self {
        inning: 1,
        half: InningHalf::Top,
    };

    /// The team at bat.
    #[must_use]
    pub const fn batting_team(self) -> Team {
        match self.half {
            InningHalf::Top => Team::Away,
            InningHalf::Bottom => Team::Home,
        }
    }

    /// The team in the field.
    #[must_use]
    pub const fn fielding_team(self) -> Team {
        self.batting_team().opponent()
    }

    /// The half-inning that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self.half {
            InningHalf::Top => Self {
                inning: self.inning,
                half: InningHalf::Bottom,
            },
            InningHalf::Bottom => Self {
                inning: self.inning + 1,
                half: InningHalf::Top,
            },
        }
    }
}

impl fmt::Display for HalfInning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let half = match self.half {
            InningHalf::Top => "Top",
            InningHalf::Bottom => "Bottom",
        };
        write!(f, "{half} {}", self.inning)
    }
}
