pub mod engine;
pub mod format;
pub mod trends;

pub use crate::domain::model::{MeetRecord, TrendRange, TrendRow};
pub use crate::domain::ports::{ConfigProvider, MeetSource, Pipeline, Storage};
pub use crate::utils::error::Result;
