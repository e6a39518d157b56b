use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use symaudit_core::services::backends::NmSource;
use symaudit_core::{AuditConfig, AuditRunner, RunOutcome};
use tracing::debug;

use crate::commands::report::Reporter;

/// Audit `binary` with `nm` and print the result to stdout.
///
/// Fatal errors (missing tool, binary or rule file) are returned before
/// anything is printed; a policy violation is a normal `RunOutcome::Failed`.
pub fn audit_command(
    binary: &Path,
    config: &AuditConfig,
    reporter: &Reporter,
) -> Result<RunOutcome> {
    let source = NmSource::from_config(config);
    debug!(nm = %source.nm_path().display(), ?config, "starting audit");

    let report = AuditRunner::new(config, &source)
        .run(binary)
        .with_context(|| format!("Failed to audit {}", binary.display()))?;

    let mut stdout = io::stdout().lock();
    reporter.write(&mut stdout, &report)?;
    Ok(report.outcome)
}
