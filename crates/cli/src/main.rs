use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use symaudit::commands::{audit_command, ReportFormat, Reporter};
use symaudit::{init_logging, use_color};
use symaudit_core::config::{DEFAULT_AUTHORIZED_PATH, DEFAULT_BANNED_PATH, DEFAULT_TIMEOUT_SECS};
use symaudit_core::AuditConfig;

/// Check the functions a binary imports against authorized/banned rule files.
///
/// This CLI is a thin wrapper around `symaudit-core`; all classification and
/// policy logic lives in the library.
#[derive(Parser, Debug)]
#[command(
    name = "symaudit",
    version,
    about = "Check for function dependencies in a binary file",
    long_about = None
)]
struct Cli {
    /// Path to the binary file to analyze.
    #[arg(value_name = "BINARY")]
    binary: PathBuf,

    /// Path to the authorized functions file.
    #[arg(short, long, default_value = DEFAULT_AUTHORIZED_PATH)]
    authorized: PathBuf,

    /// Path to the banned functions file.
    #[arg(short, long, default_value = DEFAULT_BANNED_PATH)]
    banned: PathBuf,

    /// `nm` executable to use. Defaults to $NM_BIN, then `nm` on PATH.
    #[arg(long = "nm", value_name = "PATH")]
    nm_path: Option<PathBuf>,

    /// Give up on the symbol dump after this many seconds (0 disables the limit).
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Emit the audit report as JSON instead of human-readable text.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Disable colored output.
    #[arg(long, default_value_t = false)]
    no_color: bool,

    /// Log pipeline details to stderr.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let color = use_color(cli.no_color);
    init_logging(cli.verbose, color);

    let config = AuditConfig {
        authorized: cli.authorized,
        banned: cli.banned,
        nm_path: cli.nm_path,
        timeout_secs: cli.timeout_secs,
    };
    let format = if cli.json { ReportFormat::Json } else { ReportFormat::Text };
    let reporter = Reporter::new(format, color);

    let outcome = audit_command(&cli.binary, &config, &reporter)?;
    Ok(ExitCode::from(outcome.exit_code()))
}
