pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod metrics;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{FileMeetSource, LocalStorage, SourceFormat, StaticMeetSource};
pub use app::pipelines::TrendPipeline;
pub use crate::core::{
    engine::{EngineOutput, TrendEngine},
    trends::{build_report, TrendReport},
};
pub use domain::model::{MeetId, MeetRecord, TrendRange, TrendRow};
pub use metrics::{
    feet_decimal_to_feet_inches, meters_to_feet_inches, parse_height_to_meters, parse_pole_used,
    parse_takeoff_to_feet, FeetInches, ParsedPole, PoleMetric,
};
pub use utils::error::{MetricsError, Result};
