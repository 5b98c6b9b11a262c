use serde::{Serialize, Deserialize};
use std::path::PathBuf;

use crate::reporting::OutputFormat;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub scan: ScanConfig,
    pub output: OutputConfig,
}

/// What to scan and what to look for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    pub path: PathBuf,
    pub target: String,
    pub context: usize,
}

/// How results are printed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan: ScanConfig {
                path: PathBuf::from("frontend/react-app/public/plan_v2.svg"),
                target: r#"id="bureau_602""#.to_string(),
                context: 0,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
            },
        }
    }
}

/// Inputs of a single scan after all configuration layers are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSettings {
    pub path: PathBuf,
    pub target: String,
    pub context: usize,
    pub format: OutputFormat,
}

impl From<&Config> for ScanSettings {
    fn from(config: &Config) -> Self {
        Self {
            path: config.scan.path.clone(),
            target: config.scan.target.clone(),
            context: config.scan.context,
            format: config.output.format,
        }
    }
}
