//! Error types for invariant verification

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a verification run.
///
/// An invariant violation is not one of these: violations are the result the
/// tool reports, not a failure of the run.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The log could not be opened or read.
    #[error("failed to read log {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A place count does not fit in a `u64`.
    #[error("token count for {place} out of range: {digits}")]
    CountOutOfRange { place: &'static str, digits: String },

    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Output(#[source] std::io::Error),

    /// The extraction pattern failed to compile.
    #[error("invalid place pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type for verification operations.
pub type Result<T> = std::result::Result<T, VerifyError>;
