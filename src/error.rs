use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot access {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        source: io::Error,
    },

    #[error("File {path:?} is not valid UTF-8 (line {line_number})")]
    Decoding {
        path: PathBuf,
        line_number: usize,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("File error: {path:?} - {message}")]
    FileError {
        path: PathBuf,
        message: String,
    },

    #[error("Failed to write output: {0}")]
    Output(io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl ScanError {
    /// Classify an I/O failure raised while reading `line_number` of `path`.
    pub(crate) fn from_read(error: io::Error, path: PathBuf, line_number: usize) -> Self {
        if error.kind() == io::ErrorKind::InvalidData {
            ScanError::Decoding { path, line_number }
        } else {
            ScanError::FileAccess { path, source: error }
        }
    }
}

pub type ScanResult<T> = std::result::Result<T, ScanError>;
