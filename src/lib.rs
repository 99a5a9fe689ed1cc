//! # petri-invariant
//!
//! Petri Invariant: place-invariant auditor for Petri net simulation logs.
//!
//! The simulator appends one line per fired transition with the token count of
//! every place. Places P0, P1 and P2 share three tokens, so on every line that
//! records them `P0 + P1 + P2` must be 3. This crate provides:
//! - `parser`: extraction of the P0/P1/P2 counts from a log line
//! - `checker`: the place invariant and the run status
//! - `scanner`: the single-pass log scan and report
//! - CLI tool (`petri-invariant`) for auditing a log
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! let status = petri_invariant::verify(Path::new("petri_log.txt"))?;
//! if !status.is_ok() {
//!     // violations were already printed
//! }
//! # Ok::<(), petri_invariant::VerifyError>(())
//! ```

pub mod checker;
pub mod config;
pub mod digest;
pub mod error;
pub mod parser;
pub mod scanner;

pub use checker::{InvariantStatus, PlaceInvariant, Violation, PLACE_INVARIANT_TOTAL};
pub use config::{VerifierConfig, DEFAULT_LOG_PATH};
pub use error::{Result, VerifyError};
pub use parser::{CounterTriple, PlacePattern};
pub use scanner::{verify, verify_to, LogScanner, ScanReport};
