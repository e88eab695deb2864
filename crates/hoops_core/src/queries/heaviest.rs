//! Heaviest male players across every country

use crate::models::{Gender, PlayerRecord};
use crate::units::UnitConverter;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeavyPlayer {
    pub id: String,
    pub name: String,
    pub country: String,
    pub weight_lbs: f64,
}

/// Top `count` male players by weight in pounds, heaviest first
///
/// Rows without a readable weight are dropped. Equal weights keep roster order.
pub fn find_heaviest(players: &[PlayerRecord], count: usize) -> Vec<HeavyPlayer> {
    let mut ranked: Vec<HeavyPlayer> = players
        .iter()
        .filter(|p| p.is_gender(Gender::Male))
        .filter_map(to_heavy_player)
        .collect();

    // slice::sort_by is stable
    ranked.sort_by(|a, b| b.weight_lbs.total_cmp(&a.weight_lbs));
    ranked.truncate(count);
    ranked
}

fn to_heavy_player(player: &PlayerRecord) -> Option<HeavyPlayer> {
    let token = match player.measurement.as_deref() {
        Some(token) => token,
        None => {
            log::warn!(
                "Player {:?} has no weight column, skipping",
                player.id.as_deref().unwrap_or("")
            );
            return None;
        }
    };

    match UnitConverter::weight_to_lbs(token) {
        Ok(weight_lbs) => Some(HeavyPlayer {
            id: player.id.clone().unwrap_or_default(),
            name: player.display_name(),
            country: player.country.clone().unwrap_or_default(),
            weight_lbs,
        }),
        Err(e) => {
            log::warn!(
                "Player {:?} - {}, skipping",
                player.id.as_deref().unwrap_or(""),
                e
            );
            None
        }
    }
}
