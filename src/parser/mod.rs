//! Parser module for Petri Invariant
//!
//! This module contains:
//! - `places`: Extracts P0/P1/P2 token counts from simulator log lines

pub mod places;

pub use places::{CounterTriple, PlacePattern};
