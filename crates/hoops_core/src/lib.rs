//! # hoops_core - Basketball roster statistics
//!
//! Answers three questions over a player roster and a game sheet:
//! - the N heaviest male players (weights normalized to pounds)
//! - the tallest female player from a country (heights in centimeters)
//! - the highest scoring male player from a country across its games
//!
//! Roster rows and game rows are parsed best-effort; a malformed row is
//! dropped from the query that trips over it. Only unreadable files fail.

pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod queries;
pub mod report;
pub mod units;

pub use config::QueryConfig;
pub use error::{LoadError, Result, UnitError};
pub use loader::{load_dataset, parse_dataset, Dataset, LoadStats};
pub use models::{Gender, GameRecord, PlayerRecord};
pub use pipeline::{build_report, run};
pub use queries::{
    find_heaviest, find_tallest, find_top_scorer, CohortIndex, HeavyPlayer, ScoredPlayer,
    TallPlayer,
};
pub use report::Report;
pub use units::{UnitConverter, WeightUnit};
