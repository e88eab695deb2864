//! Roster/games file loading
//!
//! Both files are read completely, roster first, before any query runs.

use crate::config::QueryConfig;
use crate::error::{LoadError, Result};
use crate::models::{GameRecord, PlayerRecord};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Line counts gathered while loading
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    pub player_rows: u32,
    pub failed_player_rows: u32,
    pub game_rows: u32,
    /// Non-blank game lines without the `[ids], [points]` shape
    pub skipped_game_rows: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub players: Vec<PlayerRecord>,
    pub games: Vec<GameRecord>,
    pub stats: LoadStats,
}

/// Read and parse both input files named by `config`
pub fn load_dataset(config: &QueryConfig) -> Result<Dataset> {
    let roster = read_file("roster", &config.players_path)?;
    let games = read_file("games", &config.games_path)?;

    let dataset = parse_dataset(&roster, &games);
    log::debug!(
        "Loaded {} roster rows ({} unreadable), {} game rows ({} malformed game rows skipped)",
        dataset.stats.player_rows,
        dataset.stats.failed_player_rows,
        dataset.stats.game_rows,
        dataset.stats.skipped_game_rows
    );

    Ok(dataset)
}

/// Parse already-read roster and games text
pub fn parse_dataset(roster: &str, games: &str) -> Dataset {
    let mut stats = LoadStats::default();

    // No header skipping: a header row simply fails every query filter.
    // Quotes are plain text so one bad row cannot swallow the rows after it.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(roster.as_bytes());

    let mut players = Vec::new();
    for (row, result) in reader.records().enumerate() {
        match result {
            Ok(record) => players.push(PlayerRecord::from_fields(record.iter())),
            Err(e) => {
                stats.failed_player_rows += 1;
                log::warn!("Roster row {} - CSV parse error: {}", row + 1, e);
            }
        }
    }
    stats.player_rows = players.len() as u32;

    let mut parsed_games = Vec::new();
    for (line_no, line) in games.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match GameRecord::parse_line(line) {
            Some(game) => parsed_games.push(game),
            None => {
                stats.skipped_game_rows += 1;
                log::debug!("Games line {} is malformed, skipping: {:?}", line_no + 1, line);
            }
        }
    }
    stats.game_rows = parsed_games.len() as u32;

    Dataset {
        players,
        games: parsed_games,
        stats,
    }
}

fn read_file(kind: &'static str, path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        kind,
        path: path.to_path_buf(),
        source,
    })
}
