use crate::core::{ConfigProvider, TrendRange};
use crate::metrics::PoleMetric;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_date, validate_file_extension, validate_output_formats, validate_path, Validate,
    SUPPORTED_INPUT_EXTENSIONS,
};
use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "vault-metrics")]
#[command(about = "Builds pole-vault trend reports from a meet export")]
pub struct CliConfig {
    #[arg(long, short, default_value = "./meets.csv", help = "Meet export (.csv or .json)")]
    pub input: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_enum, default_value_t = TrendRange::Last90Days)]
    pub range: TrendRange,

    #[arg(long, value_enum, default_value_t = PoleMetric::LengthFt)]
    pub pole_metric: PoleMetric,

    #[arg(long, value_delimiter = ',', default_value = "json")]
    pub output_formats: Vec<String>,

    #[arg(long, help = "Reference date (YYYY-MM-DD) instead of today")]
    pub today: Option<String>,

    #[arg(long, help = "TOML configuration file; replaces the flags above")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn range(&self) -> TrendRange {
        self.range
    }

    fn pole_metric(&self) -> PoleMetric {
        self.pole_metric
    }

    fn output_formats(&self) -> &[String] {
        &self.output_formats
    }

    fn reference_date(&self) -> Option<NaiveDate> {
        self.today
            .as_deref()
            .and_then(|today| validate_date("today", today).ok())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_file_extension("input", &self.input, SUPPORTED_INPUT_EXTENSIONS)?;
        validate_path("output_path", &self.output_path)?;
        validate_output_formats("output_formats", &self.output_formats)?;
        if let Some(today) = &self.today {
            validate_date("today", today)?;
        }
        Ok(())
    }
}
