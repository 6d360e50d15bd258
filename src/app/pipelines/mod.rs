pub mod trend_pipeline;

pub use trend_pipeline::TrendPipeline;
