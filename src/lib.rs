pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod reporting;

// Re-export main types for easier access
pub use cli::App;
pub use config::{Config, ScanSettings};
pub use self::core::{scan_file, scan_lines, ContextLine, Match, ScanOutcome, Scanner};
pub use error::{ScanError, ScanResult};
pub use reporting::{OutputFormat, ScanReport};
