//! Query parameters and input locations

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Env var overriding the roster file path
pub const PLAYERS_PATH_ENV: &str = "HOOPS_PLAYERS_PATH";

/// Env var overriding the games file path
pub const GAMES_PATH_ENV: &str = "HOOPS_GAMES_PATH";

pub const DEFAULT_PLAYERS_PATH: &str = "players.csv";
pub const DEFAULT_GAMES_PATH: &str = "games.csv";
pub const DEFAULT_TOP_COUNT: usize = 5;
pub const DEFAULT_TALLEST_COUNTRY: &str = "China";
pub const DEFAULT_SCORER_COUNTRY: &str = "Canada";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    pub players_path: PathBuf,
    pub games_path: PathBuf,
    /// How many players the heaviest query returns
    pub top_count: usize,
    pub tallest_country: String,
    pub scorer_country: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            players_path: PathBuf::from(DEFAULT_PLAYERS_PATH),
            games_path: PathBuf::from(DEFAULT_GAMES_PATH),
            top_count: DEFAULT_TOP_COUNT,
            tallest_country: DEFAULT_TALLEST_COUNTRY.to_string(),
            scorer_country: DEFAULT_SCORER_COUNTRY.to_string(),
        }
    }
}

impl QueryConfig {
    /// Defaults with `HOOPS_PLAYERS_PATH` / `HOOPS_GAMES_PATH` applied
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as `from_env` but reads variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(path) = non_empty(lookup(PLAYERS_PATH_ENV)) {
            config.players_path = PathBuf::from(path);
        }
        if let Some(path) = non_empty(lookup(GAMES_PATH_ENV)) {
            config.games_path = PathBuf::from(path);
        }
        config
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
