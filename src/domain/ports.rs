use crate::core::trends::TrendReport;
use crate::domain::model::{MeetRecord, TrendRange};
use crate::metrics::PoleMetric;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Where `path` ends up, for reporting.
    fn location_of(&self, path: &str) -> String;
}

pub trait MeetSource: Send + Sync {
    fn fetch_meets(&self) -> impl std::future::Future<Output = Result<Vec<MeetRecord>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn range(&self) -> TrendRange;
    fn pole_metric(&self) -> PoleMetric;
    fn output_formats(&self) -> &[String];
    /// Fixed "today" for reproducible reports; `None` means the local date.
    fn reference_date(&self) -> Option<NaiveDate>;

    fn output_filename(&self, format: &str) -> String {
        format!("trends.{}", format)
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<MeetRecord>>;
    async fn transform(&self, meets: Vec<MeetRecord>) -> Result<TrendReport>;
    async fn load(&self, report: &TrendReport) -> Result<Vec<String>>;
}
