use super::normalize::normalize_input;
use super::units::parse_feet_inches;

/// Parses a takeoff depth such as `12' 3"` into decimal feet.
///
/// Takeoffs are only ever recorded in feet and inches, so there is no metric
/// branch and no no-height marker.
pub fn parse_takeoff_to_feet(input: Option<&str>) -> Option<f64> {
    let normalized = normalize_input(input);
    if normalized.is_empty() {
        return None;
    }

    let imperial = parse_feet_inches(&normalized)?;
    Some(imperial.total_feet()).filter(|feet| feet.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takeoff_values() {
        assert_eq!(parse_takeoff_to_feet(Some("12’ 3”")), Some(12.25));
        assert_eq!(parse_takeoff_to_feet(Some("12'")), Some(12.0));
        assert_eq!(parse_takeoff_to_feet(Some("11' 6 in")), Some(11.5));
        assert_eq!(parse_takeoff_to_feet(Some("  13'0\" ")), Some(13.0));
    }

    #[test]
    fn test_takeoff_ignores_metric_and_no_height() {
        assert_eq!(parse_takeoff_to_feet(Some("3.5m")), None);
        assert_eq!(parse_takeoff_to_feet(Some("NH")), None);
    }

    #[test]
    fn test_takeoff_empty_and_junk() {
        assert_eq!(parse_takeoff_to_feet(None), None);
        assert_eq!(parse_takeoff_to_feet(Some("")), None);
        assert_eq!(parse_takeoff_to_feet(Some("junk")), None);
    }
}
