/// Unit conversion for roster measurement tokens
///
/// Weight: "<number><unit>" → pounds (kg tags converted, everything else as-is)
/// Height: "<n>feet<m>inches" → centimeters
use crate::error::UnitError;
use once_cell::sync::Lazy;
use regex::Regex;

pub const LBS_PER_KG: f64 = 2.20462;
pub const CM_PER_INCH: f64 = 2.54;
pub const INCHES_PER_FOOT: u32 = 12;

static LEADING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d+(?:\.\d*)?|\.\d+)").expect("valid weight regex"));
static FEET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)feet").expect("valid feet regex"));
static INCHES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)inches").expect("valid inches regex"));

/// Weight units a token can carry after its magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Pounds,
    Kilograms,
}

impl WeightUnit {
    /// Unit tags are matched after trimming and lowercasing.
    /// Unknown tags fall back to pounds.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => WeightUnit::Kilograms,
            _ => WeightUnit::Pounds,
        }
    }

    pub fn to_lbs(self, magnitude: f64) -> f64 {
        match self {
            WeightUnit::Pounds => magnitude,
            WeightUnit::Kilograms => magnitude * LBS_PER_KG,
        }
    }
}

pub struct UnitConverter;

impl UnitConverter {
    /// Convert a weight token such as "200lbs" or "90KG" to pounds
    ///
    /// # Errors
    ///
    /// `UnitError::InvalidWeight` when the token does not start with a number.
    pub fn weight_to_lbs(token: &str) -> Result<f64, UnitError> {
        let caps = LEADING_NUMBER
            .captures(token)
            .ok_or_else(|| UnitError::InvalidWeight(token.to_string()))?;
        let whole = caps.get(0).map(|m| m.end()).unwrap_or(0);
        let magnitude: f64 = caps[1]
            .parse()
            .map_err(|_| UnitError::InvalidWeight(token.to_string()))?;

        let unit = WeightUnit::from_tag(&token[whole..]);
        Ok(unit.to_lbs(magnitude))
    }

    /// Convert a height token such as "6feet5inches" to centimeters
    ///
    /// Either component may be missing and then counts as zero.
    pub fn height_to_cm(token: &str) -> f64 {
        let feet = Self::capture_u32(&FEET, token);
        let inches = Self::capture_u32(&INCHES, token);
        let total_inches = feet as f64 * INCHES_PER_FOOT as f64 + inches as f64;
        total_inches * CM_PER_INCH
    }

    fn capture_u32(re: &Regex, token: &str) -> u32 {
        re.captures(token)
            .and_then(|caps| caps[1].parse::<u32>().ok())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pounds_pass_through() {
        assert_eq!(UnitConverter::weight_to_lbs("200lbs"), Ok(200.0));
        assert_eq!(UnitConverter::weight_to_lbs("185.5 lb"), Ok(185.5));
    }

    #[test]
    fn test_kilograms_converted() {
        assert_eq!(UnitConverter::weight_to_lbs("90kg"), Ok(90.0 * 2.20462));
        assert_eq!(UnitConverter::weight_to_lbs("90kgs"), Ok(90.0 * 2.20462));
        assert_eq!(UnitConverter::weight_to_lbs(" 90 kg "), Ok(90.0 * 2.20462));
    }

    #[test]
    fn test_unit_tag_case_insensitive() {
        assert_eq!(
            UnitConverter::weight_to_lbs("90KG"),
            UnitConverter::weight_to_lbs("90kg")
        );
    }

    #[test]
    fn test_unknown_tag_treated_as_pounds() {
        assert_eq!(UnitConverter::weight_to_lbs("150stone"), Ok(150.0));
        assert_eq!(UnitConverter::weight_to_lbs("150"), Ok(150.0));
    }

    #[test]
    fn test_unparseable_weight_is_error() {
        assert_eq!(
            UnitConverter::weight_to_lbs("lbs"),
            Err(UnitError::InvalidWeight("lbs".to_string()))
        );
        assert!(UnitConverter::weight_to_lbs("").is_err());
        assert!(UnitConverter::weight_to_lbs("-5kg").is_err());
    }

    #[test]
    fn test_height_feet_and_inches() {
        assert_eq!(
            UnitConverter::height_to_cm("6feet5inches"),
            (6.0 * 12.0 + 5.0) * 2.54
        );
    }

    #[test]
    fn test_height_missing_components_default_to_zero() {
        assert_eq!(UnitConverter::height_to_cm("5inches"), 5.0 * 2.54);
        assert_eq!(UnitConverter::height_to_cm("3feet"), 3.0 * 12.0 * 2.54);
        assert_eq!(UnitConverter::height_to_cm("tall"), 0.0);
    }

    proptest! {
        #[test]
        fn prop_kg_tag_any_case(magnitude in 0u32..500, upper in proptest::bool::ANY) {
            let tag = if upper { "KG" } else { "kg" };
            let token = format!("{}{}", magnitude, tag);
            let lbs = UnitConverter::weight_to_lbs(&token).unwrap();
            prop_assert_eq!(lbs, magnitude as f64 * LBS_PER_KG);
        }

        #[test]
        fn prop_height_matches_total_inches(feet in 0u32..10, inches in 0u32..12) {
            let token = format!("{}feet{}inches", feet, inches);
            let cm = UnitConverter::height_to_cm(&token);
            prop_assert_eq!(cm, (feet as f64 * 12.0 + inches as f64) * CM_PER_INCH);
        }
    }
}
