// src/core/scanner.rs
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

use super::lines::TextLines;
use super::model::{ContextLine, Match, ScanOutcome};
use crate::error::{ScanError, ScanResult};

/// Find the first line containing `target` in an in-memory line sequence.
///
/// Lines are numbered from 1 and consumed lazily: iteration stops at the
/// first match.
pub fn scan_lines<'a, I>(lines: I, target: &str) -> ScanOutcome
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .zip(1..)
        .find(|(line, _)| line.contains(target))
        .map_or(ScanOutcome::NotFound, |(line, line_number)| {
            ScanOutcome::Found(Match::new(line_number, line))
        })
}

/// Scan the file at `path` for the first line containing `target`.
pub fn scan_file(path: impl AsRef<Path>, target: &str) -> ScanResult<ScanOutcome> {
    Scanner::new(target).scan_path(path.as_ref())
}

/// Line scanner for a single target
#[derive(Debug, Clone)]
pub struct Scanner {
    target: String,
    context: usize,
}

impl Scanner {
    /// Create a scanner for `target` with no context window
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            context: 0,
        }
    }

    /// Number of lines to keep before and after a match
    pub fn with_context(mut self, context: usize) -> Self {
        self.context = context;
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Open `path` and scan it. The file is closed when this returns.
    pub fn scan_path(&self, path: &Path) -> ScanResult<ScanOutcome> {
        debug!("Opening {} for scanning", path.display());

        let file = File::open(path).map_err(|source| ScanError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let metadata = file.metadata().map_err(|source| ScanError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        if !metadata.is_file() {
            return Err(ScanError::FileAccess {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
            });
        }

        self.scan_reader(BufReader::new(file), path)
    }

    /// Scan lines from `reader`. `origin` names the source in errors.
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`.
    pub fn scan_reader<R: BufRead>(&self, reader: R, origin: &Path) -> ScanResult<ScanOutcome> {
        // Grows with the lines actually seen, never past `self.context`
        let mut before: VecDeque<(usize, String)> = VecDeque::new();
        let mut lines = TextLines::new(reader);
        let mut line_number = 0;

        while let Some(line) = lines.next() {
            line_number += 1;
            let line = line.map_err(|e| ScanError::from_read(e, origin.to_path_buf(), line_number))?;

            if !line.contains(self.target.as_str()) {
                if self.context > 0 {
                    if before.len() == self.context {
                        before.pop_front();
                    }
                    before.push_back((line_number, line));
                }
                continue;
            }

            info!("Found target on line {}", line_number);
            let mut found = Match::new(line_number, &line);

            if self.context > 0 {
                let mut context: Vec<ContextLine> = before
                    .drain(..)
                    .map(|(n, text)| ContextLine::neighbour(n, &text))
                    .collect();
                context.push(ContextLine::matched(line_number, &line));

                for (n, next) in (line_number + 1..).zip(lines.by_ref().take(self.context)) {
                    let next = next.map_err(|e| ScanError::from_read(e, origin.to_path_buf(), n))?;
                    context.push(ContextLine::neighbour(n, &next));
                }
                found.context = context;
            }

            return Ok(ScanOutcome::Found(found));
        }

        debug!("Scanned {} lines without a match", line_number);
        Ok(ScanOutcome::NotFound)
    }
}
