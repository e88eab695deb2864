//! Row models for the roster and games files

pub mod game;
pub mod player;

pub use game::GameRecord;
pub use player::{country_matches, Gender, PlayerRecord};
