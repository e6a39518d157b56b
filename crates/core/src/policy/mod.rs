//! Authorized/banned rule documents.
//!
//! Both documents share one line grammar:
//! - blank lines and lines starting with `#` are ignored
//! - `*` alone covers every function (global wildcard)
//! - `*NAME` covers every function imported from library tag `NAME`
//! - anything else names a single function
//!
//! `evaluate` combines an authorized and a banned `Policy` into verdicts.

pub mod evaluate;

pub use evaluate::{Evaluation, PolicySet, Rule, Verdict};

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

const COMMENT_MARKER: char = '#';
const WILDCARD_MARKER: &str = "*";

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Rule file not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read rule file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One parsed rule document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Policy {
    /// Set by a bare `*` line.
    pub wildcard: bool,
    /// Library tags named by `*NAME` lines.
    pub libraries: BTreeSet<String>,
    /// Explicitly named functions, in document order.
    pub functions: Vec<String>,
}

impl Policy {
    /// Parse a rule document from memory.
    pub fn parse(body: &str) -> Self {
        let mut policy = Policy::default();
        for line in body.lines().map(str::trim) {
            if line.is_empty() || line.starts_with(COMMENT_MARKER) {
                continue;
            }
            if line == WILDCARD_MARKER {
                policy.wildcard = true;
            } else if let Some(library) = line.strip_prefix(WILDCARD_MARKER) {
                policy.libraries.insert(library.trim().to_string());
            } else {
                policy.functions.push(line.to_string());
            }
        }
        policy
    }

    /// Read and parse the rule document at `path`.
    pub fn load(path: &Path) -> Result<Self, PolicyError> {
        let body = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => PolicyError::NotFound(path.to_path_buf()),
            _ => PolicyError::Read { path: path.to_path_buf(), source: e },
        })?;
        let policy = Self::parse(&body);
        debug!(
            path = %path.display(),
            wildcard = policy.wildcard,
            libraries = policy.libraries.len(),
            functions = policy.functions.len(),
            "loaded rule file"
        );
        Ok(policy)
    }

    /// True when a global or library-scoped wildcard covers `library`.
    pub fn covers_library(&self, library: &str) -> bool {
        self.wildcard || self.libraries.contains(library)
    }

    /// True when `function` is named explicitly.
    pub fn names_function(&self, function: &str) -> bool {
        self.functions.iter().any(|f| f == function)
    }
}
