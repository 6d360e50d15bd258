use crate::core::trends::TrendReport;
use crate::core::Pipeline;
use crate::utils::error::Result;

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct EngineOutput {
    pub report: TrendReport,
    pub written: Vec<String>,
}

pub struct TrendEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> TrendEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<EngineOutput> {
        tracing::info!("Starting trends run");

        // Extract
        tracing::info!("Reading meets...");
        let meets = self.pipeline.extract().await?;
        tracing::info!("Read {} meets", meets.len());

        // Transform
        tracing::info!("Building trend series...");
        let report = self.pipeline.transform(meets).await?;
        tracing::info!(
            "Built series for {} meets (height: {}, takeoff: {}, pole: {})",
            report.height.points.len(),
            report.height.summary,
            report.takeoff.summary,
            report.pole.summary
        );

        // Load
        tracing::info!("Writing reports...");
        let written = self.pipeline.load(&report).await?;
        for path in &written {
            tracing::info!("Report saved to: {}", path);
        }

        Ok(EngineOutput { report, written })
    }
}
