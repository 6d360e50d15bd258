use super::normalize::{normalize_input, to_finite};
use super::units::{parse_feet_inches, METERS_PER_INCH};
use regex::Regex;
use std::sync::LazyLock;

static NO_HEIGHT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:nh|no height)\b").expect("invalid regex"));
static METERS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+(?:\.[0-9]+)?)\s*m\b").expect("invalid regex"));

/// Parses a cleared height such as `4.60m`, `15'1"` or `NH` into meters.
///
/// Returns `Some(0.0)` for an explicit no-height and `None` when nothing in
/// the text looks like a height. A metric value wins over any imperial text
/// in the same string, so `4.60m (15'1")` is read as 4.60.
pub fn parse_height_to_meters(input: Option<&str>) -> Option<f64> {
    let normalized = normalize_input(input);
    if normalized.is_empty() {
        return None;
    }

    if NO_HEIGHT_REGEX.is_match(&normalized) {
        return Some(0.0);
    }

    // A metric token settles the answer, even when its number is unusable.
    if let Some(meters) = METERS_REGEX.captures(&normalized).and_then(|caps| caps.get(1)) {
        return to_finite(meters.as_str());
    }

    let imperial = parse_feet_inches(&normalized)?;
    Some(imperial.total_inches() * METERS_PER_INCH).filter(|m| m.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("expected a height");
        assert!(
            (actual - expected).abs() < 1e-3,
            "{actual} is not close to {expected}"
        );
    }

    #[test]
    fn test_metric_heights() {
        assert_close(parse_height_to_meters(Some("4.60m")), 4.6);
        assert_close(parse_height_to_meters(Some("4.2 M")), 4.2);
        assert_close(parse_height_to_meters(Some("cleared 3m")), 3.0);
    }

    #[test]
    fn test_metric_wins_over_imperial() {
        assert_close(parse_height_to_meters(Some("4.60m (15’1”)")), 4.6);
        assert_close(parse_height_to_meters(Some("15'1\" / 4.60 m")), 4.6);
    }

    #[test]
    fn test_meters_needs_word_boundary() {
        // "4 miles" is not a metric height and there is no imperial fallback.
        assert_eq!(parse_height_to_meters(Some("4 miles")), None);
    }

    #[test]
    fn test_unusable_metric_value_skips_imperial() {
        let input = format!("{}m 15'", "9".repeat(400));
        assert_eq!(parse_height_to_meters(Some(&input)), None);
    }

    #[test]
    fn test_imperial_heights() {
        assert_close(parse_height_to_meters(Some("15'1\"")), 4.597);
        assert_close(parse_height_to_meters(Some("12’")), 3.6576);
    }

    #[test]
    fn test_no_height() {
        assert_eq!(parse_height_to_meters(Some("NH")), Some(0.0));
        assert_eq!(parse_height_to_meters(Some("nh")), Some(0.0));
        assert_eq!(parse_height_to_meters(Some("No height")), Some(0.0));
        assert_eq!(parse_height_to_meters(Some("no height (3 misses at 4.00m)")), Some(0.0));
        // Not a whole word.
        assert_eq!(parse_height_to_meters(Some("NHL")), None);
    }

    #[test]
    fn test_empty_and_junk() {
        assert_eq!(parse_height_to_meters(None), None);
        assert_eq!(parse_height_to_meters(Some("")), None);
        assert_eq!(parse_height_to_meters(Some("   ")), None);
        assert_eq!(parse_height_to_meters(Some("not a height")), None);
    }
}
