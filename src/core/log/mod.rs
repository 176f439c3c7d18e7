use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to create the quiz log file at session startup
#[derive(Debug, Error)]
#[error("Unable to create log file {path}: {source}")]
pub struct LogError {
    path: PathBuf,
    source: io::Error,
}

/// Append-only plain-text log of producer enqueue events.
/// The file is truncated/recreated when the session starts.
#[derive(Debug)]
pub struct QuizLog {
    file: File,
}

impl QuizLog {
    /// Create (or truncate) the log file at `path`
    pub fn create(path: &Path) -> Result<Self, LogError> {
        let file = File::create(path).map_err(|source| LogError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { file })
    }

    /// Record one producer enqueue event with its elapsed session time
    pub fn record_enqueue(&mut self, elapsed_seconds: f64) -> io::Result<()> {
        writeln!(self.file, "Enqueueing expression at {} seconds", elapsed_seconds)
    }
}
