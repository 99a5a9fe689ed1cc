//! Place count extraction
//!
//! Pulls the token counts of places P0, P1 and P2 out of a single log line.
//! The simulator writes lines such as
//!
//! ```text
//! Sat Oct 18 10:00:00 UTC 2026 | Thread: Worker-0 | T0 fired | Places state: P0:2 P1:1 P2:0 P3:0
//! ```
//!
//! and only the three anchors matter; everything around them is ignored.

use regex::{Captures, Regex};
use serde::Serialize;

use crate::error::{Result, VerifyError};

/// Unanchored search for the three places, in order, anywhere in the line.
const PLACE_PATTERN: &str = r"P0:([0-9]+).*P1:([0-9]+).*P2:([0-9]+)";

const PLACE_NAMES: [&str; 3] = ["P0", "P1", "P2"];

/// Token counts of the three audited places on one log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CounterTriple {
    pub p0: u64,
    pub p1: u64,
    pub p2: u64,
}

impl CounterTriple {
    pub fn new(p0: u64, p1: u64, p2: u64) -> Self {
        CounterTriple { p0, p1, p2 }
    }

    /// Total tokens across the three places.
    ///
    /// Saturates at `u64::MAX`; a saturated total can never equal the
    /// invariant constant, so the comparison stays correct.
    pub fn sum(&self) -> u64 {
        self.p0.saturating_add(self.p1).saturating_add(self.p2)
    }
}

/// Compiled place extraction pattern
#[derive(Debug, Clone)]
pub struct PlacePattern {
    regex: Regex,
}

impl PlacePattern {
    /// Compile the place pattern
    pub fn new() -> Result<Self> {
        Ok(PlacePattern {
            regex: Regex::new(PLACE_PATTERN)?,
        })
    }

    /// Extract the counter triple from a line.
    ///
    /// `Ok(None)` means the line is not a place-state line and must be
    /// ignored. A digit run too long for `u64` is an error rather than a
    /// silently truncated count.
    pub fn extract(&self, line: &str) -> Result<Option<CounterTriple>> {
        let Some(caps) = self.regex.captures(line) else {
            return Ok(None);
        };

        let p0 = parse_count(&caps, 0)?;
        let p1 = parse_count(&caps, 1)?;
        let p2 = parse_count(&caps, 2)?;

        Ok(Some(CounterTriple { p0, p1, p2 }))
    }
}

fn parse_count(caps: &Captures<'_>, index: usize) -> Result<u64> {
    // Groups are not optional in the pattern, so a match always has all three.
    let digits = caps.get(index + 1).map_or("", |m| m.as_str());
    digits
        .parse::<u64>()
        .map_err(|_| VerifyError::CountOutOfRange {
            place: PLACE_NAMES[index],
            digits: digits.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern() -> PlacePattern {
        PlacePattern::new().unwrap()
    }

    #[test]
    fn test_extracts_simple_line() {
        let triple = pattern().extract("t=1 P0:1 P1:1 P2:1").unwrap();
        assert_eq!(triple, Some(CounterTriple::new(1, 1, 1)));
    }

    #[test]
    fn test_extracts_simulator_line() {
        let line = "Sat Oct 18 10:00:00 UTC 2026 | Thread: Worker-2 | T11 fired | \
                    Places state: P0:2 P1:0 P2:1 P3:0 P4:0 P5:0 P6:0 P7:0 P8:0 P9:0 P10:0 P11:0 ";
        let triple = pattern().extract(line).unwrap();
        assert_eq!(triple, Some(CounterTriple::new(2, 0, 1)));
    }

    #[test]
    fn test_anchors_need_not_be_adjacent() {
        let triple = pattern()
            .extract("P0:0 tokens | then P1:3 tokens | and finally P2:0")
            .unwrap();
        assert_eq!(triple, Some(CounterTriple::new(0, 3, 0)));
    }

    #[test]
    fn test_anchors_without_separators() {
        let triple = pattern().extract("P0:1P1:2P2:0").unwrap();
        assert_eq!(triple, Some(CounterTriple::new(1, 2, 0)));
    }

    #[test]
    fn test_multi_digit_counts() {
        let triple = pattern().extract("P0:120 P1:45 P2:007").unwrap();
        assert_eq!(triple, Some(CounterTriple::new(120, 45, 7)));
    }

    #[test]
    fn test_non_matching_lines() {
        let p = pattern();
        assert_eq!(p.extract("").unwrap(), None);
        assert_eq!(p.extract("t=3 irrelevant text").unwrap(), None);
        assert_eq!(p.extract("P0:1 P1:1").unwrap(), None);
        assert_eq!(p.extract("P0: 1 P1:1 P2:1").unwrap(), None);
        assert_eq!(p.extract("P0:x P1:1 P2:1").unwrap(), None);
        assert_eq!(p.extract("Estado inicial de las plazas:").unwrap(), None);
    }

    #[test]
    fn test_out_of_order_anchors_do_not_match() {
        assert_eq!(pattern().extract("P2:1 P1:1 P0:1").unwrap(), None);
    }

    #[test]
    fn test_count_out_of_range() {
        let err = pattern()
            .extract("P0:1 P1:99999999999999999999999 P2:1")
            .unwrap_err();
        match err {
            VerifyError::CountOutOfRange { place, digits } => {
                assert_eq!(place, "P1");
                assert_eq!(digits, "99999999999999999999999");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_sum_saturates() {
        let triple = CounterTriple::new(u64::MAX, 1, 2);
        assert_eq!(triple.sum(), u64::MAX);
        assert_eq!(CounterTriple::new(1, 1, 1).sum(), 3);
    }
}
