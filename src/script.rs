//! JSON game and season scripts.
//!
//! A script names the two lineups and lists every plate-appearance outcome in
//! order. The engine replays it without any randomness, so a script is a
//! complete record of a game:
//!
//! ```json
//! {
//!   "id": "1927-07-04-nyy-bos",
//!   "away": { "name": "Yankees", "lineup": ["combs", "koenig", "ruth"] },
//!   "home": { "name": "Red Sox", "lineup": ["flagstead", "rothrock", "todt"] },
//!   "plays": ["single", "walk", "home_run", "strikeout"]
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::baserunning::Outcome;
use crate::error::ScriptError;
use crate::game::GameConfig;
use crate::player::PlayerId;

/// A team as written in a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScript {
    /// Team name.
    pub name: String,
    /// Batting order.
    pub lineup: Vec<PlayerId>,
}

/// One scripted game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameScript {
    /// Identifier used in logs and season reports.
    pub id: String,
    /// Visiting team.
    pub away: TeamScript,
    /// Home team.
    pub home: TeamScript,
    /// Every plate-appearance outcome, in order.
    pub plays: Vec<Outcome>,
}

impl GameScript {
    /// Load a game script from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a game script.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        load_json(path)
    }
}

/// A season: a list of games sharing one configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonScript {
    /// Season name.
    pub name: String,
    /// Game length rules for every game.
    #[serde(default)]
    pub config: GameConfig,
    /// The games.
    pub games: Vec<GameScript>,
}

impl SeasonScript {
    /// Load a season script from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a season script.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        load_json(path)
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ScriptError> {
    let file = File::open(path).map_err(|source| ScriptError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ScriptError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
