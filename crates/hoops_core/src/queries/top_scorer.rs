//! Highest scorer of a country/gender cohort across every game that country played
//!
//! Roster → CohortIndex (id → running total) → games join → extremum scan

use crate::models::{country_matches, Gender, GameRecord, PlayerRecord};
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

static LEADING_INT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid points regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredPlayer {
    pub id: String,
    pub name: String,
    pub total_points: i64,
}

/// Running point totals for one cohort
///
/// Entries stay in roster order; FxHashMap maps ids to their slot.
#[derive(Debug, Default)]
pub struct CohortIndex {
    entries: Vec<ScoredPlayer>,
    slots: FxHashMap<String, usize>,
}

impl CohortIndex {
    /// Collect every roster row matching `country` and `gender`
    pub fn build(players: &[PlayerRecord], country: &str, gender: Gender) -> Self {
        let mut index = Self::default();

        for player in players.iter().filter(|p| p.in_cohort(country, gender)) {
            match player.id.as_deref().filter(|id| !id.is_empty()) {
                Some(id) => index.insert(id, player.display_name()),
                None => log::debug!("Cohort row without id skipped: {:?}", player),
            }
        }

        index
    }

    /// A repeated id keeps its first slot and takes the newer name
    fn insert(&mut self, id: &str, name: String) {
        if let Some(&slot) = self.slots.get(id) {
            self.entries[slot] = ScoredPlayer {
                id: id.to_string(),
                name,
                total_points: 0,
            };
            return;
        }

        self.slots.insert(id.to_string(), self.entries.len());
        self.entries.push(ScoredPlayer {
            id: id.to_string(),
            name,
            total_points: 0,
        });
    }

    /// Add points to a cohort member
    ///
    /// Returns false for ids outside the cohort and for additions that would
    /// overflow the running total; the total is left unchanged in both cases.
    pub fn add_points(&mut self, id: &str, points: i64) -> bool {
        let Some(&slot) = self.slots.get(id) else {
            return false;
        };

        let entry = &mut self.entries[slot];
        match entry.total_points.checked_add(points) {
            Some(total) => {
                entry.total_points = total;
                true
            }
            None => {
                log::warn!(
                    "Points total for player {:?} would overflow adding {}, skipping",
                    id,
                    points
                );
                false
            }
        }
    }

    /// Fold every game played by `country` into the running totals
    pub fn accumulate(&mut self, games: &[GameRecord], country: &str) {
        for game in games.iter().filter(|g| country_matches(&g.country, country)) {
            for (idx, id) in game.player_ids.iter().enumerate() {
                let Some(raw) = game.points_at(idx) else {
                    continue;
                };

                match parse_points(raw) {
                    Some(points) => {
                        self.add_points(id, points);
                    }
                    None => log::warn!(
                        "Invalid points value '{}' for player {:?} in {} game, skipping",
                        raw,
                        id,
                        game.country
                    ),
                }
            }
        }
    }

    /// Highest total; the earliest roster entry wins a tie
    pub fn leader(&self) -> Option<&ScoredPlayer> {
        let mut best: Option<&ScoredPlayer> = None;
        for entry in &self.entries {
            if best.map_or(true, |b| entry.total_points > b.total_points) {
                best = Some(entry);
            }
        }
        best
    }

    pub fn get(&self, id: &str) -> Option<&ScoredPlayer> {
        self.slots.get(id).map(|&slot| &self.entries[slot])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Leading integer of a points token: "12" → 12, "10pts" → 10, "12.5" → 12
fn parse_points(raw: &str) -> Option<i64> {
    LEADING_INT
        .captures(raw)
        .and_then(|caps| caps[1].parse::<i64>().ok())
}

/// Top scorer among `gender` players from `country`
///
/// `None` only when no roster row matches the cohort at all. A cohort whose
/// members never appear in a game still produces a winner with 0 points.
pub fn find_top_scorer(
    players: &[PlayerRecord],
    games: &[GameRecord],
    country: &str,
    gender: Gender,
) -> Option<ScoredPlayer> {
    let mut cohort = CohortIndex::build(players, country, gender);
    log::debug!(
        "{} {} players from {} in scoring cohort",
        cohort.len(),
        gender.label(),
        country
    );

    cohort.accumulate(games, country);
    cohort.leader().cloned()
}
