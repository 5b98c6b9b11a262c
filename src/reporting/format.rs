use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::formats::{json::JsonFormatter, text::TextFormatter};
use super::model::ScanReport;
use crate::error::ScanResult;

/// Output format enum
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Renders a scan report for standard output
pub trait ReportFormatter {
    /// Render the report, without a trailing newline
    fn render(&self, report: &ScanReport) -> ScanResult<String>;

    /// Get the supported format
    fn supported_format(&self) -> OutputFormat;
}

pub fn formatter_for(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new()),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatter_for_each_format() {
        for format in [OutputFormat::Text, OutputFormat::Json] {
            assert_eq!(formatter_for(format).supported_format(), format);
        }
    }

    #[test]
    fn test_format_names_in_config() {
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
