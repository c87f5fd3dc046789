//! Error types for the Soft Lattice engine.
//!
//! This module provides a unified error type [`SimError`] and a convenient [`Result`] alias.

use std::fmt;

/// Main error type for the simulation core.
///
/// All three conditions are local and recoverable: the caller either fixes
/// the offending input and retries, or keeps running with the previous state.
/// Nothing in the core aborts the host process.
#[derive(Debug)]
pub enum SimError {
    /// Lattice dimensions too small to form the documented spring topology.
    InvalidTopology(String),
    /// A configuration field is outside its documented valid range.
    InvalidConfiguration(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidTopology(msg) => write!(f, "invalid topology: {msg}"),
            Self::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for SimError {}

/// Convenient Result type alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimError>;
