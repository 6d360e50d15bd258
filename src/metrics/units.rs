use super::normalize::{round_half_up, to_finite};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::sync::LazyLock;

pub const METERS_PER_INCH: f64 = 0.0254;
pub const INCHES_PER_FOOT: f64 = 12.0;

static FEET_AND_INCHES_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)([0-9]+(?:\.[0-9]+)?)\s*'\s*([0-9]+(?:\.[0-9]+)?)\s*(?:"|in(?:ches)?\b)"#)
        .expect("invalid regex")
});
static FEET_ONLY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*'").expect("invalid regex"));

/// A whole-inch imperial measurement used for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeetInches {
    pub feet: i64,
    /// Always within `0..=11`.
    pub inches: i64,
}

impl FeetInches {
    fn from_total_inches(total_inches: f64) -> Self {
        let total = round_half_up(total_inches) as i64;
        Self {
            feet: total.div_euclid(12),
            inches: total.rem_euclid(12),
        }
    }
}

/// Feet and inches as written by the athlete, before any rounding.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ImperialMatch {
    pub feet: f64,
    pub inches: f64,
    /// Byte span of the text the match consumed.
    pub span: Range<usize>,
}

impl ImperialMatch {
    pub fn total_inches(&self) -> f64 {
        self.feet * INCHES_PER_FOOT + self.inches
    }

    pub fn total_feet(&self) -> f64 {
        self.feet + self.inches / INCHES_PER_FOOT
    }
}

/// Matches `15'1"`, `12' 3 in` and friends. Yields `None` when the pattern
/// is present but a captured number is unusable.
pub(crate) fn match_feet_and_inches(text: &str) -> Option<ImperialMatch> {
    let caps = FEET_AND_INCHES_REGEX.captures(text)?;
    let whole = caps.get(0)?;
    Some(ImperialMatch {
        feet: to_finite(caps.get(1)?.as_str())?,
        inches: to_finite(caps.get(2)?.as_str())?,
        span: whole.range(),
    })
}

/// Returns true when the feet-and-inches pattern occurs at all, whether or
/// not its numbers convert.
pub(crate) fn has_feet_and_inches(text: &str) -> bool {
    FEET_AND_INCHES_REGEX.is_match(text)
}

/// The feet/inches grammar shared by height and takeoff parsing: the
/// feet-and-inches form first, then a bare `12'`.
pub(crate) fn parse_feet_inches(text: &str) -> Option<ImperialMatch> {
    if let Some(found) = match_feet_and_inches(text) {
        return Some(found);
    }

    let caps = FEET_ONLY_REGEX.captures(text)?;
    let whole = caps.get(0)?;
    Some(ImperialMatch {
        feet: to_finite(caps.get(1)?.as_str())?,
        inches: 0.0,
        span: whole.range(),
    })
}

/// Converts meters to display feet/inches, rounding once at inch granularity.
pub fn meters_to_feet_inches(meters: f64) -> FeetInches {
    if !meters.is_finite() {
        return FeetInches::default();
    }
    FeetInches::from_total_inches(meters / METERS_PER_INCH)
}

/// Converts decimal feet (e.g. `12.25`) to display feet/inches.
pub fn feet_decimal_to_feet_inches(feet: f64) -> FeetInches {
    if !feet.is_finite() {
        return FeetInches::default();
    }
    FeetInches::from_total_inches(feet * INCHES_PER_FOOT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_feet_inches_forms() {
        let both = parse_feet_inches("15'1\"").unwrap();
        assert_eq!((both.feet, both.inches), (15.0, 1.0));
        assert_eq!(both.span, 0..5);

        let spaced = parse_feet_inches("12' 3 in").unwrap();
        assert_eq!((spaced.feet, spaced.inches), (12.0, 3.0));

        let worded = parse_feet_inches("12' 3 inches").unwrap();
        assert_eq!((worded.feet, worded.inches), (12.0, 3.0));

        let feet_only = parse_feet_inches("about 12' out").unwrap();
        assert_eq!((feet_only.feet, feet_only.inches), (12.0, 0.0));
        assert_eq!(feet_only.span, 6..9);

        assert!(parse_feet_inches("12 feet").is_none());
        assert!(parse_feet_inches("").is_none());
    }

    #[test]
    fn test_inches_word_needs_boundary() {
        // "inch" is neither `in` nor `inches` on a word boundary.
        let found = parse_feet_inches("12' 3inchy").unwrap();
        assert_eq!((found.feet, found.inches), (12.0, 0.0));
    }

    #[test]
    fn test_unconvertible_inches_fall_back_to_feet_only() {
        let text = format!("12' {}\"", "9".repeat(400));
        assert!(has_feet_and_inches(&text));
        assert!(match_feet_and_inches(&text).is_none());
        let found = parse_feet_inches(&text).unwrap();
        assert_eq!((found.feet, found.inches), (12.0, 0.0));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(
            meters_to_feet_inches(4.6),
            FeetInches { feet: 15, inches: 1 }
        );
        assert_eq!(
            feet_decimal_to_feet_inches(12.25),
            FeetInches { feet: 12, inches: 3 }
        );
        assert_eq!(
            feet_decimal_to_feet_inches(11.99),
            FeetInches { feet: 12, inches: 0 }
        );
        assert_eq!(meters_to_feet_inches(0.0), FeetInches::default());
    }

    #[test]
    fn test_non_finite_conversions() {
        assert_eq!(meters_to_feet_inches(f64::NAN), FeetInches::default());
        assert_eq!(
            feet_decimal_to_feet_inches(f64::INFINITY),
            FeetInches::default()
        );
        assert_eq!(
            feet_decimal_to_feet_inches(f64::NEG_INFINITY),
            FeetInches::default()
        );
    }

    #[test]
    fn test_negative_inputs_keep_inches_in_range() {
        let converted = feet_decimal_to_feet_inches(-1.0 / 12.0);
        assert_eq!(converted, FeetInches { feet: -1, inches: 11 });
    }
}
