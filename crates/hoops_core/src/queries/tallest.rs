//! Tallest female player from one country

use crate::models::{Gender, PlayerRecord};
use crate::units::UnitConverter;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TallPlayer {
    pub id: String,
    pub name: String,
    pub country: String,
    pub height_cm: f64,
}

/// Tallest female from `country`, or `None` when nobody matches
///
/// Only a strictly taller player replaces the current best, so the earliest
/// roster row wins a tie.
pub fn find_tallest(players: &[PlayerRecord], country: &str) -> Option<TallPlayer> {
    let mut tallest: Option<TallPlayer> = None;

    for player in players
        .iter()
        .filter(|p| p.in_cohort(country, Gender::Female))
    {
        let Some(token) = player.measurement.as_deref() else {
            log::warn!(
                "Player {:?} has no height column, skipping",
                player.id.as_deref().unwrap_or("")
            );
            continue;
        };

        let height_cm = UnitConverter::height_to_cm(token);
        if tallest.as_ref().is_some_and(|t| height_cm <= t.height_cm) {
            continue;
        }

        tallest = Some(TallPlayer {
            id: player.id.clone().unwrap_or_default(),
            name: player.display_name(),
            country: player.country.clone().unwrap_or_default(),
            height_cm,
        });
    }

    tallest
}
