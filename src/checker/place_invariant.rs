//! Place invariant evaluation
//!
//! The audited net conserves three tokens across P0, P1 and P2. Each matching
//! log line is checked against that total; the outcome of a whole run is a
//! two-state status that can only move from `Holds` to `Violated`.

use serde::Serialize;

use crate::parser::CounterTriple;

/// Token total the three places must always add up to
pub const PLACE_INVARIANT_TOTAL: u64 = 3;

/// Summary printed when every matching line satisfies the invariant
pub const SUMMARY_HOLDS: &str = "¡El invariante de plaza se cumple en todo el log!";

/// Summary printed when at least one line violated the invariant
pub const SUMMARY_VIOLATED: &str = "Hubo violaciones del invariante.";

/// Prefix of the per-line violation diagnostic
pub const VIOLATION_PREFIX: &str = "Invariante violado en línea: ";

/// The `P0 + P1 + P2 = 3` place invariant
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceInvariant;

impl PlaceInvariant {
    /// Check a single triple
    pub fn holds(&self, counts: &CounterTriple) -> bool {
        counts.sum() == PLACE_INVARIANT_TOTAL
    }

    /// Check a triple and build the violation record when it fails.
    pub fn check(&self, line: &str, counts: CounterTriple) -> Option<Violation> {
        if self.holds(&counts) {
            None
        } else {
            Some(Violation::new(line, counts))
        }
    }
}

/// A matching log line whose counts break the invariant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Line text with surrounding whitespace stripped
    pub line: String,
    pub counts: CounterTriple,
    pub sum: u64,
}

impl Violation {
    pub fn new(line: &str, counts: CounterTriple) -> Self {
        Violation {
            line: line.trim().to_string(),
            sum: counts.sum(),
            counts,
        }
    }

    /// The diagnostic line reported for this violation
    pub fn diagnostic(&self) -> String {
        format!("{}{}", VIOLATION_PREFIX, self.line)
    }
}

/// Outcome of a verification run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvariantStatus {
    /// No violation seen so far
    #[default]
    Holds,
    /// At least one violation seen; terminal
    Violated,
}

impl InvariantStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, InvariantStatus::Holds)
    }

    /// Record a violation. Repeated calls keep the status `Violated`.
    pub fn record_violation(&mut self) {
        *self = InvariantStatus::Violated;
    }

    /// The final summary line for this status
    pub fn summary(&self) -> &'static str {
        match self {
            InvariantStatus::Holds => SUMMARY_HOLDS,
            InvariantStatus::Violated => SUMMARY_VIOLATED,
        }
    }
}
