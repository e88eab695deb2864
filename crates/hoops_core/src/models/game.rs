use serde::{Deserialize, Serialize};

/// One game line: `<country>,[<ids>], [<points>]`
///
/// `player_ids` and `points` are positionally aligned. Points stay as raw
/// tokens so a bad value only drops its own position during aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub country: String,
    pub player_ids: Vec<String>,
    pub points: Vec<String>,
}

impl GameRecord {
    /// Parse a games line
    ///
    /// Returns `None` for blank lines and for lines that do not split into at
    /// least three `[`-delimited segments.
    pub fn parse_line(line: &str) -> Option<Self> {
        if line.trim().is_empty() {
            return None;
        }

        let parts: Vec<&str> = line.split('[').collect();
        if parts.len() < 3 {
            return None;
        }

        let country = parts[0].replace(',', "").trim().to_string();
        let player_ids = split_list(bracket_body(parts[1]));
        let points = split_list(bracket_body(parts[2]));

        Some(Self {
            country,
            player_ids,
            points,
        })
    }

    /// Points token at `idx`, if present and non-empty
    pub fn points_at(&self, idx: usize) -> Option<&str> {
        self.points
            .get(idx)
            .map(String::as_str)
            .filter(|p| !p.is_empty())
    }
}

/// Everything before the closing bracket
fn bracket_body(segment: &str) -> &str {
    segment.split(']').next().unwrap_or("")
}

fn split_list(body: &str) -> Vec<String> {
    body.split(',').map(|s| s.trim().to_string()).collect()
}
