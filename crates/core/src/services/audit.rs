use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{debug, warn};

use crate::analysis::{build_symbol_table, extract_undefined};
use crate::config::AuditConfig;
use crate::model::SymbolTable;
use crate::policy::{Policy, PolicyError, PolicySet};
use crate::services::source::{SourceError, SymbolSource};

/// Pipeline stages, in the only order they can be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RunStage {
    Idle,
    Extracted,
    Classified,
    Evaluated,
}

/// Terminal state of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    Clean,
    Failed,
}

impl RunOutcome {
    pub fn exit_code(self) -> u8 {
        match self {
            RunOutcome::Clean => 0,
            RunOutcome::Failed => 1,
        }
    }
}

#[derive(Debug, Error)]
pub enum AuditError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Policy(#[from] PolicyError),
    #[error("Failed to hash binary {path}: {source}")]
    Hash {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AuditError {
    /// Last stage the run reached before failing.
    pub fn stage(&self) -> RunStage {
        match self {
            AuditError::Source(_) => RunStage::Idle,
            AuditError::Policy(_) => RunStage::Classified,
            AuditError::Hash { .. } => RunStage::Evaluated,
        }
    }
}

/// Everything the reporter needs about one audited binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    pub binary: PathBuf,
    pub binary_sha256: String,
    pub scanned_at: String,
    pub symbols: SymbolTable,
    pub forbidden: Vec<String>,
    pub outcome: RunOutcome,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.outcome == RunOutcome::Clean
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Drives source -> extract -> classify -> evaluate for a single binary.
pub struct AuditRunner<'a> {
    pub config: &'a AuditConfig,
    pub source: &'a dyn SymbolSource,
}

impl<'a> AuditRunner<'a> {
    pub fn new(config: &'a AuditConfig, source: &'a dyn SymbolSource) -> Self {
        Self { config, source }
    }

    /// Run the whole pipeline. Any error aborts before evaluation; nothing is retried.
    pub fn run(&self, binary: &Path) -> Result<AuditReport, AuditError> {
        self.source.ensure_available()?;

        let lines = self.source.dump(binary)?;
        if lines.is_empty() {
            warn!(binary = %binary.display(), source = self.source.name(), "empty symbol dump");
        }
        let tokens = extract_undefined(&lines);
        debug!(stage = ?RunStage::Extracted, lines = lines.len(), imported = tokens.len());

        let symbols = build_symbol_table(&tokens);
        debug!(
            stage = ?RunStage::Classified,
            libraries = symbols.groups().len(),
            functions = symbols.len()
        );

        let policies = self.load_policies()?;
        let evaluation = policies.evaluate(&symbols);
        debug!(stage = ?RunStage::Evaluated, forbidden = evaluation.forbidden.len());

        let binary_sha256 = fingerprint(binary)
            .map_err(|source| AuditError::Hash { path: binary.to_path_buf(), source })?;
        let outcome = if evaluation.is_clean() { RunOutcome::Clean } else { RunOutcome::Failed };

        Ok(AuditReport {
            binary: binary.to_path_buf(),
            binary_sha256,
            scanned_at: Utc::now().to_rfc3339(),
            symbols,
            forbidden: evaluation.forbidden,
            outcome,
        })
    }

    fn load_policies(&self) -> Result<PolicySet, PolicyError> {
        let authorized = Policy::load(&self.config.authorized)?;
        let banned = Policy::load(&self.config.banned)?;
        Ok(PolicySet::new(authorized, banned))
    }
}

/// Hex SHA-256 of the audited file, so a report can be matched to its exact build.
fn fingerprint(binary: &Path) -> io::Result<String> {
    let mut file = File::open(binary)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}
