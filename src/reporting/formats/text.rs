use crate::error::ScanResult;
use crate::reporting::format::{OutputFormat, ReportFormatter};
use crate::reporting::model::ScanReport;

/// Plain text formatter
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn render(&self, report: &ScanReport) -> ScanResult<String> {
        let mut out = String::new();

        match report {
            ScanReport::Found { target, line_number, content, context, .. } => {
                out.push_str(&format!("Found {target} on line {line_number}\nContent: {content}"));
                for line in context {
                    let marker = if line.is_match { "=>" } else { "  " };
                    out.push_str(&format!("\n{marker} {}: {}", line.line_number, line.content));
                }
            }
            ScanReport::NotFound { target, .. } => {
                out.push_str(&format!("Target {target} not found."));
            }
        }

        Ok(out)
    }

    fn supported_format(&self) -> OutputFormat {
        OutputFormat::Text
    }
}
