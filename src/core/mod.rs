mod lines;
pub mod model;
pub mod scanner;

pub use model::{ContextLine, Match, ScanOutcome};
pub use scanner::{scan_file, scan_lines, Scanner};
