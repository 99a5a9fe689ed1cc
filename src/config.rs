//! Verifier configuration

use std::path::PathBuf;

/// Log path used when none is given, relative to the working directory
pub const DEFAULT_LOG_PATH: &str = "petri_log.txt";

/// Settings for a verification run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Log file to audit
    pub log_path: PathBuf,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        VerifierConfig {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
        }
    }
}

impl VerifierConfig {
    /// Config for an explicit path, falling back to the default when `None`
    pub fn with_log_path(log_path: Option<PathBuf>) -> Self {
        log_path
            .map(|log_path| VerifierConfig { log_path })
            .unwrap_or_default()
    }
}
