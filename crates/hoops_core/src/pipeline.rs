//! Load → three queries → Report

use crate::config::QueryConfig;
use crate::error::Result;
use crate::loader::{load_dataset, Dataset};
use crate::models::Gender;
use crate::queries::{find_heaviest, find_tallest, find_top_scorer};
use crate::report::Report;

/// Load both files named by `config` and answer every question
pub fn run(config: &QueryConfig) -> Result<Report> {
    let dataset = load_dataset(config)?;
    Ok(build_report(&dataset, config))
}

/// Answer every question over an already-loaded dataset
pub fn build_report(dataset: &Dataset, config: &QueryConfig) -> Report {
    let heaviest = find_heaviest(&dataset.players, config.top_count);
    let tallest = find_tallest(&dataset.players, &config.tallest_country);
    let top_scorer = find_top_scorer(
        &dataset.players,
        &dataset.games,
        &config.scorer_country,
        Gender::Male,
    );

    Report {
        top_count: config.top_count,
        heaviest,
        tallest_country: config.tallest_country.clone(),
        tallest,
        scorer_country: config.scorer_country.clone(),
        top_scorer,
        stats: dataset.stats.clone(),
    }
}
