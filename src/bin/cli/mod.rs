//! CLI module for Petri Invariant
//!
//! Handles report rendering for the non-streaming output formats

pub mod output;
