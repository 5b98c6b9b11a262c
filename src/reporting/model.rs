use std::path::{Path, PathBuf};
use serde::Serialize;

use crate::core::{ContextLine, ScanOutcome};

/// Presentation view of a scan outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScanReport {
    Found {
        target: String,
        path: PathBuf,
        line_number: usize,
        content: String,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        context: Vec<ContextLine>,
    },
    NotFound {
        target: String,
        path: PathBuf,
    },
}

impl ScanReport {
    pub fn new(outcome: ScanOutcome, target: &str, path: &Path) -> Self {
        match outcome {
            ScanOutcome::Found(found) => ScanReport::Found {
                target: target.to_string(),
                path: path.to_path_buf(),
                line_number: found.line_number,
                content: found.content,
                context: found.context,
            },
            ScanOutcome::NotFound => ScanReport::NotFound {
                target: target.to_string(),
                path: path.to_path_buf(),
            },
        }
    }

}
