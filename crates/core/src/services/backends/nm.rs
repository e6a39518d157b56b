use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Output;
use std::thread;
use std::time::{Duration, Instant};

use duct::{cmd, Handle};
use tracing::debug;

use crate::config::AuditConfig;
use crate::services::source::{SourceError, SymbolSource};

/// Environment variable naming the `nm` executable to use.
pub const NM_BIN_ENV: &str = "NM_BIN";

/// Environment variable naming a file whose contents stand in for `nm` stdout.
pub const FAKE_OUTPUT_ENV: &str = "SYMAUDIT_NM_FAKE_OUTPUT";

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Symbol source that shells out to binutils `nm`.
#[derive(Debug, Clone)]
pub struct NmSource {
    nm_path: PathBuf,
    timeout: Option<Duration>,
    fake_output: Option<PathBuf>,
}

impl NmSource {
    pub fn new(nm_path: impl Into<PathBuf>) -> Self {
        Self { nm_path: nm_path.into(), timeout: None, fake_output: None }
    }

    /// Build from `NM_BIN`/`SYMAUDIT_NM_FAKE_OUTPUT`, preferring an explicit path.
    pub fn from_env(explicit: Option<PathBuf>) -> Self {
        let nm_path = explicit.unwrap_or_else(resolve_nm_path);
        let mut source = Self::new(nm_path);
        source.fake_output = std::env::var_os(FAKE_OUTPUT_ENV).map(PathBuf::from);
        source
    }

    pub fn from_config(config: &AuditConfig) -> Self {
        Self::from_env(config.nm_path.clone()).with_timeout(config.timeout())
    }

    /// Kill `nm` if it runs longer than `timeout`; `None` waits forever.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read the dump from `path` instead of running `nm`.
    pub fn with_fake_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.fake_output = Some(path.into());
        self
    }

    pub fn nm_path(&self) -> &Path {
        &self.nm_path
    }

    fn run(&self, binary: &Path) -> Result<String, SourceError> {
        let handle = cmd(self.nm_path.as_path(), [binary])
            .stdin_null()
            .stdout_capture()
            .stderr_capture()
            .unchecked()
            .start()
            .map_err(|e| self.spawn_error(e))?;

        let output = match self.timeout {
            None => handle.wait()?,
            Some(limit) => wait_with_deadline(&handle, limit)?,
        };
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let message = if stderr.is_empty() {
                format!("nm exited with {}", output.status)
            } else {
                format!("nm exited with {}: {stderr}", output.status)
            };
            return Err(SourceError::Failed { path: binary.to_path_buf(), message });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn spawn_error(&self, e: io::Error) -> SourceError {
        match e.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                SourceError::ToolUnavailable(self.nm_path.display().to_string())
            }
            _ => SourceError::Io(e),
        }
    }
}

impl SymbolSource for NmSource {
    fn ensure_available(&self) -> Result<(), SourceError> {
        if self.fake_output.is_some() {
            return Ok(());
        }
        let output = cmd(self.nm_path.as_path(), ["--version"])
            .stdin_null()
            .stdout_null()
            .stderr_null()
            .unchecked()
            .run()
            .map_err(|e| self.spawn_error(e))?;
        if !output.status.success() {
            return Err(SourceError::ToolUnavailable(self.nm_path.display().to_string()));
        }
        Ok(())
    }

    fn dump(&self, binary: &Path) -> Result<Vec<String>, SourceError> {
        if !binary.is_file() {
            return Err(SourceError::MissingBinary(binary.to_path_buf()));
        }

        let body = match &self.fake_output {
            Some(fake) => {
                debug!(fake = %fake.display(), "reading canned nm output");
                fs::read_to_string(fake)?
            }
            None => {
                debug!(nm = %self.nm_path.display(), binary = %binary.display(), "running nm");
                self.run(binary)?
            }
        };
        Ok(body.lines().map(str::to_string).collect())
    }

    fn name(&self) -> &str {
        "nm"
    }
}

fn resolve_nm_path() -> PathBuf {
    std::env::var_os(NM_BIN_ENV).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("nm"))
}

fn wait_with_deadline(handle: &Handle, limit: Duration) -> Result<&Output, SourceError> {
    let started = Instant::now();
    loop {
        if let Some(output) = handle.try_wait()? {
            return Ok(output);
        }
        if started.elapsed() >= limit {
            handle.kill()?;
            return Err(SourceError::Timeout(limit));
        }
        thread::sleep(POLL_INTERVAL);
    }
}
