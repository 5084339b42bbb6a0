//! Batting orders.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::GameError;
use crate::player::PlayerId;

/// A team's batting order, cycled from the top once the last batter is up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lineup {
    name: String,
    order: Vec<PlayerId>,
}

impl Lineup {
    /// Create a lineup.
    ///
    /// # Errors
    ///
    /// Returns an error if the order is empty or names a player twice.
    pub fn new(name: impl Into<String>, order: Vec<PlayerId>) -> Result<Self, GameError> {
        let name = name.into();
        if order.is_empty() {
            return Err(GameError::EmptyLineup { team: name });
        }
        let mut seen = HashSet::new();
        for player in &order {
            if !seen.insert(player) {
                return Err(GameError::DuplicateInLineup {
                    team: name,
                    player: player.clone(),
                });
            }
        }
        Ok(Self { name, order })
    }

    /// Team name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Players in batting order.
    #[must_use]
    pub fn players(&self) -> &[PlayerId] {
        &self.order
    }

    /// The batter due up after `plate_appearances` turns, wrapping around.
    #[must_use]
    pub fn batter(&self, plate_appearances: usize) -> &PlayerId {
        &self.order[plate_appearances % self.order.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<PlayerId> {
        names.iter().copied().map(PlayerId::from).collect()
    }

    #[test]
    fn test_batting_order_wraps() {
        let lineup = Lineup::new("Yankees", ids(&["a", "b", "c"])).unwrap();
        assert_eq!(lineup.batter(0).as_str(), "a");
        assert_eq!(lineup.batter(2).as_str(), "c");
        assert_eq!(lineup.batter(3).as_str(), "a");
        assert_eq!(lineup.name(), "Yankees");
    }

    #[test]
    fn test_empty_lineup_rejected() {
        assert_eq!(
            Lineup::new("Empty", Vec::new()).unwrap_err(),
            GameError::EmptyLineup {
                team: "Empty".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_player_rejected() {
        let err = Lineup::new("Dupes", ids(&["a", "b", "a"])).unwrap_err();
        assert_eq!(
            err,
            GameError::DuplicateInLineup {
                team: "Dupes".to_string(),
                player: PlayerId::from("a"),
            }
        );
    }
}
