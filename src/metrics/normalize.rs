//! Input cleanup shared by every metrics parser.

/// Trims the input. `None` is treated as an empty string, so callers can
/// pass optional meet fields straight through.
pub(crate) fn trim_input(input: Option<&str>) -> &str {
    input.unwrap_or_default().trim()
}

/// Folds typographic quotes into their keyboard forms.
pub(crate) fn fold_quotes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            other => other,
        })
        .collect()
}

/// Trims the input and folds its quotes, ready for matching.
pub(crate) fn normalize_input(input: Option<&str>) -> String {
    fold_quotes(trim_input(input))
}

/// Converts a captured number, rejecting anything that is not finite.
pub(crate) fn to_finite(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Rounds half-way values towards positive infinity.
///
/// `f64::round` rounds half away from zero, which disagrees for negative
/// inputs like `-2.5`.
pub(crate) fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
