//! Checker module for Petri Invariant
//!
//! This module contains:
//! - `place_invariant`: The token-conservation check and the run status

pub mod place_invariant;

pub use place_invariant::*;
