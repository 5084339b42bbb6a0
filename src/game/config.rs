//! Game configuration.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Length rules for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Regulation innings (default: 9).
    pub innings: u16,
    /// Last inning played before a tie is declared (default: none, play
    /// until decided).
    pub max_innings: Option<u16>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            innings: 9,
            max_innings: None,
        }
    }
}

impl GameConfig {
    /// Check the configuration describes a playable game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfig`] if `innings` is zero or
    /// `max_innings` is shorter than regulation.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.innings == 0 {
            return Err(GameError::InvalidConfig("innings must be > 0".into()));
        }
        if let Some(max) = self.max_innings {
            if max < self.innings {
                return Err(GameError::InvalidConfig(format!(
                    "max_innings ({max}) must be >= innings ({})",
                    self.innings
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_nine_innings() {
        let config = GameConfig::default();
        assert_eq!(config.innings, 9);
        assert_eq!(config.max_innings, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_lengths() {
        let zero = GameConfig {
            innings: 0,
            ..GameConfig::default()
        };
        assert!(zero.validate().is_err());

        let short_cap = GameConfig {
            innings: 9,
            max_innings: Some(7),
        };
        assert_eq!(
            short_cap.validate().unwrap_err().to_string(),
            "invalid game config: max_innings (7) must be >= innings (9)"
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"max_innings": 12}"#).unwrap();
        assert_eq!(config.innings, 9);
        assert_eq!(config.max_innings, Some(12));
    }
}
