use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Meet identifiers arrive as numbers from the database export and as
/// strings from hand-edited files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MeetId {
    Number(i64),
    Text(String),
}

impl fmt::Display for MeetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeetId::Number(n) => write!(f, "{}", n),
            MeetId::Text(s) => f.write_str(s),
        }
    }
}

/// One meet as exported by the schedule tracker. The metric fields are free
/// text exactly as the athlete typed them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetRecord {
    pub id: MeetId,
    #[serde(default)]
    pub name: Option<String>,
    pub date: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "height_cleared")]
    pub height_cleared: Option<String>,
    #[serde(default, alias = "deepest_takeoff")]
    pub deepest_takeoff: Option<String>,
    #[serde(default, alias = "pole_used")]
    pub pole_used: Option<String>,
    #[serde(default)]
    pub place: Option<String>,
}

impl MeetRecord {
    pub fn new(id: impl Into<MeetId>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            date: date.into(),
            location: None,
            description: None,
            height_cleared: None,
            deepest_takeoff: None,
            pole_used: None,
            place: None,
        }
    }

    /// True when any result field holds text.
    pub fn has_metrics(&self) -> bool {
        [
            &self.height_cleared,
            &self.pole_used,
            &self.deepest_takeoff,
            &self.place,
        ]
        .into_iter()
        .any(|field| field.as_deref().is_some_and(|text| !text.is_empty()))
    }
}

impl From<i64> for MeetId {
    fn from(value: i64) -> Self {
        MeetId::Number(value)
    }
}

impl From<&str> for MeetId {
    fn from(value: &str) -> Self {
        MeetId::Text(value.to_string())
    }
}

/// A meet that made it onto the trends timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendRow {
    pub id: MeetId,
    pub name: Option<String>,
    pub location: Option<String>,
    pub date: NaiveDate,
    pub height_cleared_raw: Option<String>,
    pub deepest_takeoff_raw: Option<String>,
    pub pole_used_raw: Option<String>,
}

/// How far back the trends look from the reference date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "camelCase")]
pub enum TrendRange {
    #[serde(alias = "30")]
    #[cfg_attr(feature = "cli", value(name = "30"))]
    Last30Days,
    #[default]
    #[serde(alias = "90")]
    #[cfg_attr(feature = "cli", value(name = "90"))]
    Last90Days,
    #[serde(alias = "all")]
    #[cfg_attr(feature = "cli", value(name = "all"))]
    AllTime,
}

impl TrendRange {
    pub fn days(self) -> Option<u64> {
        match self {
            TrendRange::Last30Days => Some(30),
            TrendRange::Last90Days => Some(90),
            TrendRange::AllTime => None,
        }
    }

    /// The earliest date inside the range, or `None` for all time.
    pub fn start_date(self, today: NaiveDate) -> Option<NaiveDate> {
        let days = self.days()?;
        Some(today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN))
    }

    pub fn label(self) -> &'static str {
        match self {
            TrendRange::Last30Days => "Last 30 days",
            TrendRange::Last90Days => "Last 90 days",
            TrendRange::AllTime => "All time",
        }
    }
}
