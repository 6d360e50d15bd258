use crate::core::format::{format_meters_value, format_takeoff_value};
use crate::core::trends::{build_report, TrendReport};
use crate::core::{ConfigProvider, MeetRecord, MeetSource, Pipeline, Storage};
use crate::utils::error::{MetricsError, Result};
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// One line of `trends.csv`: a meet inside the range with everything parsed
/// out of its free-text fields.
#[derive(Debug, Serialize)]
struct TrendCsvRow<'a> {
    id: String,
    date: NaiveDate,
    name: Option<&'a str>,
    location: Option<&'a str>,
    height_m: Option<f64>,
    height_display: String,
    takeoff_ft: Option<f64>,
    takeoff_display: String,
    pole_raw: &'a str,
    pole_length_ft: Option<f64>,
    pole_rating_lbs: Option<f64>,
    pole_flex: Option<f64>,
}

pub fn render_csv(report: &TrendReport) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let rows = report
        .height
        .points
        .iter()
        .zip(&report.takeoff.points)
        .zip(&report.pole.points);

    for ((height, takeoff), pole) in rows {
        writer.serialize(TrendCsvRow {
            id: height.row.id.to_string(),
            date: height.row.date,
            name: height.row.name.as_deref(),
            location: height.row.location.as_deref(),
            height_m: height.value,
            height_display: height.value.map(format_meters_value).unwrap_or_default(),
            takeoff_ft: takeoff.value,
            takeoff_display: takeoff.value.map(format_takeoff_value).unwrap_or_default(),
            pole_raw: &pole.pole.raw,
            pole_length_ft: pole.pole.length_ft,
            pole_rating_lbs: pole.pole.rating_lbs,
            pole_flex: pole.pole.flex,
        })?;
    }

    writer
        .into_inner()
        .map_err(|e| MetricsError::ProcessingError {
            message: format!("Failed to finish CSV output: {}", e),
        })
}

pub struct TrendPipeline<M: MeetSource, S: Storage, C: ConfigProvider> {
    pub(crate) source: M,
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<M: MeetSource, S: Storage, C: ConfigProvider> TrendPipeline<M, S, C> {
    pub fn new(source: M, storage: S, config: C) -> Self {
        Self {
            source,
            storage,
            config,
        }
    }

    fn today(&self) -> NaiveDate {
        self.config
            .reference_date()
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

#[async_trait::async_trait]
impl<M: MeetSource, S: Storage, C: ConfigProvider> Pipeline for TrendPipeline<M, S, C> {
    async fn extract(&self) -> Result<Vec<MeetRecord>> {
        tracing::debug!("Loading meets from: {}", self.config.input_path());
        let meets = self.source.fetch_meets().await?;

        if meets.is_empty() {
            tracing::warn!("Meet source returned no meets");
        }
        Ok(meets)
    }

    async fn transform(&self, meets: Vec<MeetRecord>) -> Result<TrendReport> {
        let today = self.today();
        tracing::debug!(
            "Building trends as of {} ({}, pole metric: {})",
            today,
            self.config.range().label(),
            self.config.pole_metric().label()
        );

        Ok(build_report(
            &meets,
            self.config.range(),
            self.config.pole_metric(),
            today,
        ))
    }

    async fn load(&self, report: &TrendReport) -> Result<Vec<String>> {
        let mut written = Vec::new();

        for format in self.config.output_formats() {
            let data = match format.as_str() {
                "json" => serde_json::to_vec_pretty(report)?,
                "csv" => render_csv(report)?,
                other => {
                    return Err(MetricsError::InvalidConfigValueError {
                        field: "output_formats".to_string(),
                        value: other.to_string(),
                        reason: "Unsupported format. Valid formats: csv, json".to_string(),
                    })
                }
            };

            let filename = self.config.output_filename(format);
            tracing::debug!("Writing {} ({} bytes) to storage", filename, data.len());
            self.storage.write_file(&filename, &data).await?;
            written.push(self.storage.location_of(&filename));
        }

        Ok(written)
    }
}
