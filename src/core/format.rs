//! Display strings for trend values, matching how the dashboard labels them.

use crate::metrics::{
    feet_decimal_to_feet_inches, meters_to_feet_inches, round_half_up, FeetInches, PoleMetric,
};

/// `15'` for whole feet, `15' 1"` otherwise.
pub fn format_feet_inches(value: FeetInches) -> String {
    if value.inches == 0 {
        format!("{}'", value.feet)
    } else {
        format!("{}' {}\"", value.feet, value.inches)
    }
}

/// `4.60 m (15' 1")`.
pub fn format_meters_value(meters: f64) -> String {
    if !meters.is_finite() {
        return String::new();
    }
    format!(
        "{:.2} m ({})",
        meters,
        format_feet_inches(meters_to_feet_inches(meters))
    )
}

pub fn format_takeoff_value(feet: f64) -> String {
    if !feet.is_finite() {
        return String::new();
    }
    format_feet_inches(feet_decimal_to_feet_inches(feet))
}

pub fn round_to_half_foot(value: f64) -> f64 {
    round_half_up(value * 2.0) / 2.0
}

pub fn format_pole_metric_value(metric: PoleMetric, value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }

    match metric {
        PoleMetric::LengthFt => format_takeoff_value(round_to_half_foot(value)),
        PoleMetric::RatingLbs => format!("{} lbs", value),
        PoleMetric::Flex => format!("{} flex", value),
    }
}

pub fn height_summary(latest: Option<f64>, best: Option<f64>) -> String {
    match (latest, best) {
        (Some(latest), Some(best)) => format!(
            "Latest {} · PR {}",
            format_meters_value(latest),
            format_meters_value(best)
        ),
        _ => "No height data yet".to_string(),
    }
}

pub fn takeoff_summary(latest: Option<f64>, best: Option<f64>) -> String {
    match (latest, best) {
        (Some(latest), Some(best)) => format!(
            "Latest {} · Best {}",
            format_takeoff_value(latest),
            format_takeoff_value(best)
        ),
        _ => "No takeoff data yet".to_string(),
    }
}

pub fn pole_summary(metric: PoleMetric, latest: Option<f64>) -> String {
    match latest {
        Some(value) => format!("Latest {}", format_pole_metric_value(metric, value)),
        None => "No pole data yet".to_string(),
    }
}
