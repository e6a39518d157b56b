use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_AUTHORIZED_PATH: &str = "authorized.txt";
pub const DEFAULT_BANNED_PATH: &str = "banned.txt";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Inputs for one audit run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    /// Authorized rule document.
    pub authorized: PathBuf,
    /// Banned rule document.
    pub banned: PathBuf,
    /// Explicit `nm` executable; `None` falls back to `NM_BIN`, then `nm` on PATH.
    pub nm_path: Option<PathBuf>,
    /// Symbol dump timeout in seconds; `0` disables it.
    pub timeout_secs: u64,
}

impl AuditConfig {
    pub fn new(authorized: impl Into<PathBuf>, banned: impl Into<PathBuf>) -> Self {
        Self { authorized: authorized.into(), banned: banned.into(), ..Self::default() }
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            authorized: PathBuf::from(DEFAULT_AUTHORIZED_PATH),
            banned: PathBuf::from(DEFAULT_BANNED_PATH),
            nm_path: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
