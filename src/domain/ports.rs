use crate::domain::model::UnknownMajorPolicy;
use crate::utils::error::Result;

/// Lazy, finite, non-restartable sequence of fixed-arity string records.
///
/// Implementations must fail a record whose field count differs from
/// `field_count` rather than truncate or pad it.
pub trait RecordSource {
    fn field_count(&self) -> usize;

    /// Next record, or `None` once the source is exhausted.
    fn next_record(&mut self) -> Option<Result<Vec<String>>>;
}

/// The four record streams one run consumes, in load order.
pub trait SourceProvider {
    fn students(&self) -> Result<Box<dyn RecordSource>>;
    fn instructors(&self) -> Result<Box<dyn RecordSource>>;
    fn grades(&self) -> Result<Box<dyn RecordSource>>;
    fn majors(&self) -> Result<Box<dyn RecordSource>>;
}

pub trait ConfigProvider {
    fn data_dir(&self) -> &str;
    fn has_header(&self) -> bool;
    fn unknown_major_policy(&self) -> UnknownMajorPolicy;
    fn output_path(&self) -> Option<&str>;
}

/// Row-producing contract consumed by the table renderer.
pub trait TableReport {
    fn title(&self) -> &str;
    fn columns(&self) -> &[&str];
    fn rows(&self) -> Vec<Vec<String>>;
}
