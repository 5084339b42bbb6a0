//! Player identity.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Opaque identifier for a batter or baserunner.
///
/// Cloning is cheap: the identifier is shared, never copied.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(Arc<str>);

impl PlayerId {
    /// Create an identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_equality() {
        assert_eq!(PlayerId::from("ruth"), PlayerId::new(String::from("ruth")));
        assert_ne!(PlayerId::from("ruth"), PlayerId::from("gehrig"));
    }

    #[test]
    fn test_player_id_serde_transparent() {
        let id = PlayerId::from("gehrig");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"gehrig\"");
        let back: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
