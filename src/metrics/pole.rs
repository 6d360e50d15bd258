use super::normalize::{fold_quotes, to_finite, trim_input};
use super::units::{has_feet_and_inches, match_feet_and_inches};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::sync::LazyLock;

static LENGTH_FEET_ONLY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+(?:\.[0-9]+)?)\s*(?:'|ft\b|feet\b|foot\b)").expect("invalid regex")
});
static RATING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+(?:\.[0-9]+)?)\s*lbs?\b").expect("invalid regex"));
static FLEX_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)flex\s*([0-9]+(?:\.[0-9]+)?)").expect("invalid regex"));
static FLEX_SUFFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+(?:\.[0-9]+)?)\s*flex\b").expect("invalid regex"));
static NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("invalid regex"));

/// Whatever could be pulled out of a free-text pole description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedPole {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_ft: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_lbs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex: Option<f64>,
    pub raw: String,
}

/// Which pole figure a trend series plots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "camelCase")]
pub enum PoleMetric {
    #[default]
    #[serde(alias = "length")]
    #[cfg_attr(feature = "cli", value(name = "length"))]
    LengthFt,
    #[serde(alias = "rating")]
    #[cfg_attr(feature = "cli", value(name = "rating"))]
    RatingLbs,
    #[cfg_attr(feature = "cli", value(name = "flex"))]
    Flex,
}

impl PoleMetric {
    pub fn value_of(self, pole: &ParsedPole) -> Option<f64> {
        match self {
            PoleMetric::LengthFt => pole.length_ft,
            PoleMetric::RatingLbs => pole.rating_lbs,
            PoleMetric::Flex => pole.flex,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PoleMetric::LengthFt => "length",
            PoleMetric::RatingLbs => "rating",
            PoleMetric::Flex => "flex",
        }
    }
}

/// Byte ranges already claimed by an earlier extraction step.
#[derive(Debug, Default)]
struct ConsumedSpans(Vec<Range<usize>>);

impl ConsumedSpans {
    fn claim(&mut self, span: Range<usize>) {
        self.0.push(span);
    }

    fn overlaps(&self, span: &Range<usize>) -> bool {
        self.0
            .iter()
            .any(|used| span.start < used.end && used.start < span.end)
    }
}

/// Reads the first capture group as a finite number, together with the span
/// of the whole match.
fn captured_number(caps: Captures<'_>) -> Option<(f64, Range<usize>)> {
    let value = to_finite(caps.get(1)?.as_str())?;
    Some((value, caps.get(0)?.range()))
}

fn extract_length(text: &str, spans: &mut ConsumedSpans) -> Option<f64> {
    if has_feet_and_inches(text) {
        let found = match_feet_and_inches(text)?;
        spans.claim(found.span.clone());
        return Some(found.total_feet());
    }

    let (feet, span) = captured_number(LENGTH_FEET_ONLY_REGEX.captures(text)?)?;
    spans.claim(span);
    Some(feet)
}

fn extract_rating(text: &str, spans: &mut ConsumedSpans) -> Option<f64> {
    let (rating, span) = captured_number(RATING_REGEX.captures(text)?)?;
    spans.claim(span);
    Some(rating)
}

fn extract_labeled_flex(text: &str, spans: &mut ConsumedSpans) -> Option<f64> {
    let caps = FLEX_PREFIX_REGEX
        .captures(text)
        .or_else(|| FLEX_SUFFIX_REGEX.captures(text))?;
    let (flex, span) = captured_number(caps)?;
    spans.claim(span);
    Some(flex)
}

/// Picks an unlabeled flex number, scanning right to left over tokens no
/// earlier step claimed. A token qualifies if it has a decimal point, or if
/// length and rating are both already known.
fn extract_trailing_flex(text: &str, spans: &ConsumedSpans, both_known: bool) -> Option<f64> {
    let tokens: Vec<_> = NUMBER_REGEX.find_iter(text).collect();
    tokens
        .iter()
        .rev()
        .filter(|token| !spans.overlaps(&token.range()))
        .find_map(|token| {
            let value = to_finite(token.as_str())?;
            (token.as_str().contains('.') || both_known).then_some(value)
        })
}

/// Extracts length, weight rating and flex from a pole description such as
/// `15' 170lbs 18.5` or `170 lbs 15'6" 18.5`. The pieces may come in any
/// order; any of them may be missing.
pub fn parse_pole_used(input: Option<&str>) -> ParsedPole {
    let raw = trim_input(input);
    if raw.is_empty() {
        return ParsedPole::default();
    }
    let normalized = fold_quotes(raw);

    let mut spans = ConsumedSpans::default();
    let length_ft = extract_length(&normalized, &mut spans);
    let rating_lbs = extract_rating(&normalized, &mut spans);
    let flex = extract_labeled_flex(&normalized, &mut spans).or_else(|| {
        let both_known = length_ft.is_some() && rating_lbs.is_some();
        extract_trailing_flex(&normalized, &spans, both_known)
    });

    ParsedPole {
        length_ft,
        rating_lbs,
        flex,
        raw: raw.to_string(),
    }
}
