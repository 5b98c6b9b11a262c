mod model;
pub mod format;
pub mod formats;

pub use format::{formatter_for, OutputFormat, ReportFormatter};
pub use model::ScanReport;
