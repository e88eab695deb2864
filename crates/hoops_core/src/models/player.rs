use serde::{Deserialize, Serialize};

/// Roster column positions
pub const COL_ID: usize = 0;
pub const COL_FIRST_NAME: usize = 1;
pub const COL_LAST_NAME: usize = 2;
pub const COL_COUNTRY: usize = 3;
pub const COL_GENDER: usize = 4;
pub const COL_AGE: usize = 5;
pub const COL_MEASUREMENT: usize = 6;

/// Expected number of roster columns
pub const ROSTER_COLUMNS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse a single-letter gender code ("m"/"f", any case)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "m" => Some(Gender::Male),
            "f" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// One roster line
///
/// Fields missing from a short row stay `None` rather than failing the parse.
/// `measurement` is the raw body token in column 6: a weight token ("200lbs")
/// for the weight query, a height token ("6feet5inches") for the height query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub country: Option<String>,
    pub gender: Option<Gender>,
    pub age: Option<String>,
    pub measurement: Option<String>,
}

impl PlayerRecord {
    /// Parse a comma-separated roster line. Never fails.
    pub fn parse_line(line: &str) -> Self {
        Self::from_fields(line.split(','))
    }

    /// Build from already-split columns, in roster order
    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let cols: Vec<&str> = fields.into_iter().map(str::trim).collect();
        if cols.len() < ROSTER_COLUMNS {
            log::debug!(
                "Short roster row ({} of {} columns): {:?}",
                cols.len(),
                ROSTER_COLUMNS,
                cols
            );
        }
        let col = |idx: usize| cols.get(idx).map(|s| s.to_string());

        Self {
            id: col(COL_ID),
            first_name: col(COL_FIRST_NAME),
            last_name: col(COL_LAST_NAME),
            country: col(COL_COUNTRY),
            gender: cols.get(COL_GENDER).and_then(|c| Gender::from_code(c)),
            age: col(COL_AGE),
            measurement: col(COL_MEASUREMENT),
        }
    }

    /// "First Last"
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
    }

    pub fn is_gender(&self, gender: Gender) -> bool {
        self.gender == Some(gender)
    }

    /// Case-insensitive country comparison
    pub fn is_from(&self, country: &str) -> bool {
        self.country
            .as_deref()
            .is_some_and(|c| country_matches(c, country))
    }

    pub fn in_cohort(&self, country: &str, gender: Gender) -> bool {
        self.is_gender(gender) && self.is_from(country)
    }
}

/// Compare two country labels ignoring case and surrounding whitespace
pub fn country_matches(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_line() {
        let p = PlayerRecord::parse_line("1, A ,B,Canada,M,20,200lbs");

        assert_eq!(p.id.as_deref(), Some("1"));
        assert_eq!(p.display_name(), "A B");
        assert_eq!(p.country.as_deref(), Some("Canada"));
        assert_eq!(p.gender, Some(Gender::Male));
        assert_eq!(p.age.as_deref(), Some("20"));
        assert_eq!(p.measurement.as_deref(), Some("200lbs"));
    }

    #[test]
    fn test_short_line_leaves_missing_fields_empty() {
        let p = PlayerRecord::parse_line("7,Solo,Name,Spain");

        assert_eq!(p.id.as_deref(), Some("7"));
        assert_eq!(p.country.as_deref(), Some("Spain"));
        assert!(p.gender.is_none());
        assert!(p.age.is_none());
        assert!(p.measurement.is_none());
    }

    #[test]
    fn test_header_line_has_no_gender() {
        let p = PlayerRecord::parse_line("id,first_name,last_name,country,gender,age,weight");
        assert!(p.gender.is_none());
        assert!(!p.is_gender(Gender::Male));
        assert!(!p.is_gender(Gender::Female));
    }

    #[test]
    fn test_gender_codes() {
        assert_eq!(Gender::from_code("m"), Some(Gender::Male));
        assert_eq!(Gender::from_code(" F "), Some(Gender::Female));
        assert_eq!(Gender::from_code("male"), None);
        assert_eq!(Gender::Female.label(), "female");
    }

    #[test]
    fn test_cohort_match_is_case_insensitive() {
        let p = PlayerRecord::parse_line("3,E,F,china,f,19,5feet6inches");
        assert!(p.in_cohort("China", Gender::Female));
        assert!(p.in_cohort(" CHINA ", Gender::Female));
        assert!(!p.in_cohort("China", Gender::Male));
        assert!(!p.in_cohort("Chile", Gender::Female));
    }
}
