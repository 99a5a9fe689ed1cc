//! Log scanning
//!
//! Reads a simulator log one line at a time, in file order, and checks the
//! place invariant on every line that carries P0/P1/P2 counts. The file handle
//! is owned by the scan and dropped on every exit path, including a read
//! error halfway through.

use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::checker::{InvariantStatus, PlaceInvariant, Violation};
use crate::digest::LogDigest;
use crate::error::{Result, VerifyError};
use crate::parser::PlacePattern;

/// Everything learned from one pass over a log
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub log_path: PathBuf,
    pub status: InvariantStatus,
    /// Lines read, matching or not
    pub lines_read: u64,
    /// Lines carrying all three place counts
    pub lines_matched: u64,
    pub violations: Vec<Violation>,
    /// Hex SHA-256 of the scanned bytes
    pub sha256: String,
}

impl ScanReport {
    pub fn summary(&self) -> &'static str {
        self.status.summary()
    }
}

/// Single-pass place invariant scanner
#[derive(Debug, Clone)]
pub struct LogScanner {
    pattern: PlacePattern,
    invariant: PlaceInvariant,
}

impl LogScanner {
    pub fn new(pattern: PlacePattern) -> Self {
        LogScanner {
            pattern,
            invariant: PlaceInvariant,
        }
    }

    /// Scan the log at `path`.
    ///
    /// Open failures (missing file, permission denied, a directory) are
    /// returned as [`VerifyError::Io`]; nothing is checked up front.
    pub fn scan_path<F>(&self, path: &Path, on_violation: F) -> Result<ScanReport>
    where
        F: FnMut(&Violation) -> Result<()>,
    {
        let file = File::open(path).map_err(|source| VerifyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened log");
        self.scan_reader(path, BufReader::new(file), on_violation)
    }

    /// Scan any buffered reader. `source` only labels errors and the report.
    ///
    /// `on_violation` runs for each violating line as soon as it is read, so
    /// diagnostics stream out in file order.
    pub fn scan_reader<R, F>(
        &self,
        source: &Path,
        mut reader: R,
        mut on_violation: F,
    ) -> Result<ScanReport>
    where
        R: BufRead,
        F: FnMut(&Violation) -> Result<()>,
    {
        let mut status = InvariantStatus::default();
        let mut digest = LogDigest::new();
        let mut violations = Vec::new();
        let mut lines_read = 0u64;
        let mut lines_matched = 0u64;
        let mut buf = String::new();

        loop {
            buf.clear();
            let n = reader.read_line(&mut buf).map_err(|source_err| VerifyError::Io {
                path: source.to_path_buf(),
                source: source_err,
            })?;
            if n == 0 {
                break;
            }
            digest.update(buf.as_bytes());

            for line in split_records(&buf) {
                lines_read += 1;

                let Some(counts) = self.pattern.extract(line)? else {
                    continue;
                };
                lines_matched += 1;
                debug!(p0 = counts.p0, p1 = counts.p1, p2 = counts.p2, "place state");

                if let Some(violation) = self.invariant.check(line, counts) {
                    warn!(sum = violation.sum, line = %violation.line, "place invariant violated");
                    status.record_violation();
                    on_violation(&violation)?;
                    violations.push(violation);
                }
            }
        }

        info!(
            lines_read,
            lines_matched,
            violations = violations.len(),
            bytes = digest.bytes(),
            "scan complete"
        );

        Ok(ScanReport {
            log_path: source.to_path_buf(),
            status,
            lines_read,
            lines_matched,
            violations,
            sha256: digest.finish(),
        })
    }
}

/// Split one `read_line` chunk into log records.
///
/// `\n`, `\r\n` and a bare `\r` all end a record. The chunk holds at most one
/// `\n`, at its end, so any `\r` left after removing the terminator separates
/// records.
fn split_records(chunk: &str) -> std::str::Split<'_, char> {
    let body = chunk.strip_suffix('\n').unwrap_or(chunk);
    let body = body.strip_suffix('\r').unwrap_or(body);
    body.split('\r')
}

/// Audit the log at `log_path`, writing diagnostics and the summary to `out`.
///
/// One `Invariante violado en línea: ...` line per violation, then exactly
/// one summary line. Returns the final status.
pub fn verify_to<W: Write>(log_path: &Path, out: &mut W) -> Result<InvariantStatus> {
    let scanner = LogScanner::new(PlacePattern::new()?);
    let report = scanner.scan_path(log_path, |violation| {
        writeln!(out, "{}", violation.diagnostic()).map_err(VerifyError::Output)
    })?;
    writeln!(out, "{}", report.summary()).map_err(VerifyError::Output)?;
    Ok(report.status)
}

/// Audit the log at `log_path`, printing to standard output.
pub fn verify(log_path: &Path) -> Result<InvariantStatus> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    verify_to(log_path, &mut out)
}
