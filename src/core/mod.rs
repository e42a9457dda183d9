pub mod engine;
pub mod report;
pub mod resolver;
pub mod store;

pub use crate::domain::model::{ElectiveStatus, UnknownMajorPolicy};
pub use crate::domain::ports::{ConfigProvider, RecordSource, SourceProvider, TableReport};
pub use crate::utils::error::Result;
