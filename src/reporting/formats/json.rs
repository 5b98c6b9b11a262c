use crate::error::{ScanError, ScanResult};
use crate::reporting::format::{OutputFormat, ReportFormatter};
use crate::reporting::model::ScanReport;

/// JSON formatter
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn render(&self, report: &ScanReport) -> ScanResult<String> {
        serde_json::to_string_pretty(report)
            .map_err(|e| ScanError::SerializationError(format!("Failed to serialize report: {}", e)))
    }

    fn supported_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}
