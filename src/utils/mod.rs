//! Utility helpers: logging and step timing.

pub mod logging;

pub use logging::ScopedTimer;
