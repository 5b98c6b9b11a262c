use serde::{Deserialize, Serialize};

/// Terminal result of a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Found(Match),
    NotFound,
}

impl ScanOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, ScanOutcome::Found(_))
    }

    /// The match, if the scan found one
    pub fn as_match(&self) -> Option<&Match> {
        match self {
            ScanOutcome::Found(found) => Some(found),
            ScanOutcome::NotFound => None,
        }
    }
}

/// First line containing the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// 1-based line number
    pub line_number: usize,
    /// Line text with surrounding whitespace removed
    pub content: String,
    /// Surrounding lines, empty unless a context window was requested
    pub context: Vec<ContextLine>,
}

impl Match {
    pub fn new(line_number: usize, content: &str) -> Self {
        Self {
            line_number,
            content: content.trim().to_string(),
            context: Vec::new(),
        }
    }
}

/// A line shown around a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextLine {
    pub line_number: usize,
    pub content: String,
    pub is_match: bool,
}

impl ContextLine {
    pub fn neighbour(line_number: usize, content: &str) -> Self {
        Self {
            line_number,
            content: content.trim().to_string(),
            is_match: false,
        }
    }

    pub fn matched(line_number: usize, content: &str) -> Self {
        Self {
            line_number,
            content: content.trim().to_string(),
            is_match: true,
        }
    }
}
