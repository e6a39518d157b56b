use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

/// Failures while producing a symbol dump.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Symbol tool '{0}' is not installed or not executable")]
    ToolUnavailable(String),
    #[error("Binary not found at {0}")]
    MissingBinary(PathBuf),
    #[error("Symbol tool failed on {path}: {message}")]
    Failed { path: PathBuf, message: String },
    #[error("Symbol tool timed out after {0:?}")]
    Timeout(Duration),
    #[error("Symbol tool I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Anything that can turn a binary into raw symbol-table lines.
pub trait SymbolSource {
    /// Fail fast when the underlying capability is missing on this host.
    fn ensure_available(&self) -> Result<(), SourceError> {
        Ok(())
    }

    fn dump(&self, binary: &Path) -> Result<Vec<String>, SourceError>;

    fn name(&self) -> &str;
}

/// Serves a fixed symbol dump for any existing binary.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    lines: Vec<String>,
}

impl StaticSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { lines: lines.into_iter().map(Into::into).collect() }
    }
}

impl SymbolSource for StaticSource {
    fn dump(&self, binary: &Path) -> Result<Vec<String>, SourceError> {
        if !binary.is_file() {
            return Err(SourceError::MissingBinary(binary.to_path_buf()));
        }
        Ok(self.lines.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}
