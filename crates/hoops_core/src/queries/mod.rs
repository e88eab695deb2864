//! The three roster questions
//!
//! - heaviest: top N male players by weight (pounds)
//! - tallest: tallest female player from a country (centimeters)
//! - top_scorer: highest scoring player of a country/gender cohort (games join)

pub mod heaviest;
pub mod tallest;
pub mod top_scorer;

pub use heaviest::{find_heaviest, HeavyPlayer};
pub use tallest::{find_tallest, TallPlayer};
pub use top_scorer::{find_top_scorer, CohortIndex, ScoredPlayer};
