// Adapters layer: concrete meet sources and report storage.

pub mod source;
pub mod storage;

pub use source::{FileMeetSource, SourceFormat, StaticMeetSource};
pub use storage::LocalStorage;
