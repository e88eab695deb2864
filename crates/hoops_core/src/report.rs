//! Report model and plain-text rendering

use crate::loader::LoadStats;
use crate::queries::{HeavyPlayer, ScoredPlayer, TallPlayer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Answers to the three roster questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub top_count: usize,
    pub heaviest: Vec<HeavyPlayer>,
    pub tallest_country: String,
    pub tallest: Option<TallPlayer>,
    pub scorer_country: String,
    pub top_scorer: Option<ScoredPlayer>,
    pub stats: LoadStats,
}

impl Report {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "TOP {} HEAVIEST MALE PLAYERS:", self.top_count)?;
        for player in &self.heaviest {
            writeln!(
                f,
                "{} - {} - {:.2}lbs",
                player.name, player.country, player.weight_lbs
            )?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "TALLEST FEMALE PLAYER FROM {}:",
            self.tallest_country.to_uppercase()
        )?;
        match &self.tallest {
            Some(player) => writeln!(
                f,
                "The tallest female basketball player from {} is {}, {}cm tall.",
                self.tallest_country, player.name, player.height_cm
            )?,
            None => writeln!(
                f,
                "No female players found from {}.",
                self.tallest_country
            )?,
        }

        writeln!(f)?;
        match demonym(&self.scorer_country) {
            Some(adjective) => self.fmt_scorer_by_demonym(f, adjective),
            None => self.fmt_scorer_by_country(f),
        }
    }
}

impl Report {
    /// "HIGHEST SCORING MALE CANADIAN PLAYER:" form
    fn fmt_scorer_by_demonym(&self, f: &mut fmt::Formatter, adjective: &str) -> fmt::Result {
        writeln!(
            f,
            "HIGHEST SCORING MALE {} PLAYER:",
            adjective.to_uppercase()
        )?;
        match &self.top_scorer {
            Some(player) => writeln!(
                f,
                "Highest Scoring Male {} Player: {}, Total Points: {}",
                adjective, player.name, player.total_points
            ),
            None => writeln!(f, "No male {} players found.", adjective),
        }
    }

    /// Fallback for countries without a known adjective
    fn fmt_scorer_by_country(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "HIGHEST SCORING MALE PLAYER FROM {}:",
            self.scorer_country.to_uppercase()
        )?;
        match &self.top_scorer {
            Some(player) => writeln!(
                f,
                "Highest scoring male player from {}: {}, Total Points: {}",
                self.scorer_country, player.name, player.total_points
            ),
            None => writeln!(f, "No male players found from {}.", self.scorer_country),
        }
    }
}

/// Nationality adjective for common basketball countries
fn demonym(country: &str) -> Option<&'static str> {
    let adjective = match country.trim().to_lowercase().as_str() {
        "canada" => "Canadian",
        "china" => "Chinese",
        "usa" | "united states" => "American",
        "australia" => "Australian",
        "brazil" => "Brazilian",
        "france" => "French",
        "germany" => "German",
        "greece" => "Greek",
        "japan" => "Japanese",
        "serbia" => "Serbian",
        "spain" => "Spanish",
        _ => return None,
    };
    Some(adjective)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        Report {
            top_count: 5,
            heaviest: vec![HeavyPlayer {
                id: "2".to_string(),
                name: "C D".to_string(),
                country: "Canada".to_string(),
                weight_lbs: 100.0 * 2.20462,
            }],
            tallest_country: "China".to_string(),
            tallest: Some(TallPlayer {
                id: "3".to_string(),
                name: "E F".to_string(),
                country: "China".to_string(),
                height_cm: 254.0,
            }),
            scorer_country: "Canada".to_string(),
            top_scorer: Some(ScoredPlayer {
                id: "2".to_string(),
                name: "C D".to_string(),
                total_points: 10,
            }),
            stats: LoadStats::default(),
        }
    }

    #[test]
    fn test_text_rendering() {
        let text = sample().to_string();

        assert!(text.starts_with("\nTOP 5 HEAVIEST MALE PLAYERS:\n"));
        assert!(text.contains("C D - Canada - 220.46lbs\n"));
        assert!(text.contains("\nTALLEST FEMALE PLAYER FROM CHINA:\n"));
        assert!(text.contains("from China is E F, 254cm tall.\n"));
        assert!(text.contains("\nHIGHEST SCORING MALE CANADIAN PLAYER:\n"));
        assert!(text.ends_with("Highest Scoring Male Canadian Player: C D, Total Points: 10\n"));
    }

    #[test]
    fn test_not_found_sentences() {
        let report = Report {
            heaviest: Vec::new(),
            tallest: None,
            top_scorer: None,
            ..sample()
        };
        let text = report.to_string();

        assert!(text.contains("No female players found from China.\n"));
        assert!(text.contains("No male Canadian players found.\n"));
        assert!(!text.contains("lbs"));
    }

    #[test]
    fn test_scorer_without_known_adjective() {
        let report = Report {
            scorer_country: "Lithuania".to_string(),
            ..sample()
        };
        let text = report.to_string();
        assert!(text.contains("\nHIGHEST SCORING MALE PLAYER FROM LITHUANIA:\n"));
        assert!(text.ends_with("from Lithuania: C D, Total Points: 10\n"));

        let empty = Report {
            top_scorer: None,
            ..report
        };
        assert!(empty.to_string().contains("No male players found from Lithuania.\n"));
    }

    #[test]
    fn test_demonym_lookup() {
        assert_eq!(demonym(" canada "), Some("Canadian"));
        assert_eq!(demonym("USA"), Some("American"));
        assert_eq!(demonym("Atlantis"), None);
    }

    #[test]
    fn test_json_rendering() -> anyhow::Result<()> {
        let json = sample().to_json()?;
        let value: serde_json::Value = serde_json::from_str(&json)?;

        assert_eq!(value["top_scorer"]["total_points"], 10);
        assert_eq!(value["tallest"]["name"], "E F");
        assert_eq!(value["heaviest"].as_array().map(Vec::len), Some(1));
        Ok(())
    }
}
