//! Turns meet records into the height, takeoff and pole series the trends
//! dashboard plots.

use crate::core::format::{height_summary, pole_summary, round_to_half_foot, takeoff_summary};
use crate::domain::model::{MeetId, MeetRecord, TrendRange, TrendRow};
use crate::metrics::{
    parse_height_to_meters, parse_pole_used, parse_takeoff_to_feet, ParsedPole, PoleMetric,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static PLAIN_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("invalid regex"));

/// A single point on the height or takeoff chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    #[serde(flatten)]
    pub row: TrendRow,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolePoint {
    #[serde(flatten)]
    pub row: TrendRow,
    pub pole: ParsedPole,
    pub value: Option<f64>,
}

/// Anything that sits on a chart and may be a gap.
pub trait ChartPoint {
    fn value(&self) -> Option<f64>;
}

impl ChartPoint for TrendPoint {
    fn value(&self) -> Option<f64> {
        self.value
    }
}

impl ChartPoint for PolePoint {
    fn value(&self) -> Option<f64> {
        self.value
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesReport {
    pub points: Vec<TrendPoint>,
    pub latest: Option<f64>,
    pub best: Option<f64>,
    pub best_meet_id: Option<MeetId>,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoleSeriesReport {
    pub metric: PoleMetric,
    pub points: Vec<PolePoint>,
    pub latest: Option<f64>,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendReport {
    pub today: NaiveDate,
    pub range: TrendRange,
    /// Height cleared, in meters.
    pub height: SeriesReport,
    /// Deepest takeoff, in decimal feet.
    pub takeoff: SeriesReport,
    pub pole: PoleSeriesReport,
}

/// Reads a meet date: `YYYY-MM-DD`, an RFC 3339 timestamp, or a naive
/// `YYYY-MM-DDTHH:MM:SS` timestamp.
pub fn parse_meet_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if PLAIN_DATE_REGEX.is_match(value) {
        return NaiveDate::parse_from_str(value, "%Y-%m-%d").ok();
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|timestamp| timestamp.date())
}

/// Keeps past meets and any meet with results, sorted oldest first.
///
/// Upcoming meets with nothing recorded are left out, as are meets whose
/// date cannot be read.
pub fn build_trend_rows(meets: &[MeetRecord], today: NaiveDate) -> Vec<TrendRow> {
    let mut rows: Vec<TrendRow> = meets
        .iter()
        .filter_map(|meet| {
            let Some(date) = parse_meet_date(&meet.date) else {
                tracing::warn!("Skipping meet {}: unreadable date '{}'", meet.id, meet.date);
                return None;
            };

            if date >= today && !meet.has_metrics() {
                tracing::debug!("Skipping upcoming meet {} without results", meet.id);
                return None;
            }

            Some(TrendRow {
                id: meet.id.clone(),
                name: meet.name.clone(),
                location: meet.location.clone(),
                date,
                height_cleared_raw: meet.height_cleared.clone(),
                deepest_takeoff_raw: meet.deepest_takeoff.clone(),
                pole_used_raw: meet.pole_used.clone(),
            })
        })
        .collect();

    rows.sort_by_key(|row| row.date);
    rows
}

pub fn filter_range(rows: Vec<TrendRow>, range: TrendRange, today: NaiveDate) -> Vec<TrendRow> {
    match range.start_date(today) {
        None => rows,
        Some(start) => rows
            .into_iter()
            .filter(|row| row.date >= start && row.date <= today)
            .collect(),
    }
}

fn log_unparsed(kind: &str, row: &TrendRow, raw: Option<&str>, value: Option<f64>) {
    if let (Some(text), None) = (raw, value) {
        if !text.trim().is_empty() {
            tracing::debug!("Could not read {} '{}' for meet {}", kind, text, row.id);
        }
    }
}

pub fn height_series(rows: &[TrendRow]) -> Vec<TrendPoint> {
    rows.iter()
        .map(|row| {
            let raw = row.height_cleared_raw.as_deref();
            let value = parse_height_to_meters(raw);
            log_unparsed("height", row, raw, value);
            TrendPoint {
                row: row.clone(),
                value,
            }
        })
        .collect()
}

pub fn takeoff_series(rows: &[TrendRow]) -> Vec<TrendPoint> {
    rows.iter()
        .map(|row| {
            let raw = row.deepest_takeoff_raw.as_deref();
            let value = parse_takeoff_to_feet(raw);
            log_unparsed("takeoff", row, raw, value);
            TrendPoint {
                row: row.clone(),
                value,
            }
        })
        .collect()
}

/// Pole lengths are plotted to the nearest half foot.
pub fn pole_series(rows: &[TrendRow], metric: PoleMetric) -> Vec<PolePoint> {
    rows.iter()
        .map(|row| {
            let pole = parse_pole_used(row.pole_used_raw.as_deref());
            let value = metric.value_of(&pole).map(|value| match metric {
                PoleMetric::LengthFt => round_to_half_foot(value),
                PoleMetric::RatingLbs | PoleMetric::Flex => value,
            });
            PolePoint {
                row: row.clone(),
                pole,
                value,
            }
        })
        .collect()
}

/// The highest point; ties go to the earlier meet.
pub fn personal_best<P: ChartPoint>(points: &[P]) -> Option<&P> {
    points
        .iter()
        .filter(|point| point.value().is_some())
        .fold(None, |best: Option<&P>, point| match best {
            Some(best) if point.value() <= best.value() => Some(best),
            _ => Some(point),
        })
}

pub fn latest<P: ChartPoint>(points: &[P]) -> Option<&P> {
    points.iter().rev().find(|point| point.value().is_some())
}

fn series_report(
    points: Vec<TrendPoint>,
    summarize: fn(Option<f64>, Option<f64>) -> String,
) -> SeriesReport {
    let latest_value = latest(&points).and_then(ChartPoint::value);
    let best = personal_best(&points);
    let best_value = best.and_then(ChartPoint::value);
    let best_meet_id = best.map(|point| point.row.id.clone());

    SeriesReport {
        summary: summarize(latest_value, best_value),
        latest: latest_value,
        best: best_value,
        best_meet_id,
        points,
    }
}

/// Builds every trend series for the meets inside `range`.
pub fn build_report(
    meets: &[MeetRecord],
    range: TrendRange,
    metric: PoleMetric,
    today: NaiveDate,
) -> TrendReport {
    let rows = filter_range(build_trend_rows(meets, today), range, today);
    tracing::debug!(
        "{} of {} meets fall in range '{}'",
        rows.len(),
        meets.len(),
        range.label()
    );

    let height = series_report(height_series(&rows), height_summary);
    let takeoff = series_report(takeoff_series(&rows), takeoff_summary);

    let pole_points = pole_series(&rows, metric);
    let pole_latest = latest(&pole_points).and_then(ChartPoint::value);
    let pole = PoleSeriesReport {
        metric,
        summary: pole_summary(metric, pole_latest),
        latest: pole_latest,
        points: pole_points,
    };

    TrendReport {
        today,
        range,
        height,
        takeoff,
        pole,
    }
}
