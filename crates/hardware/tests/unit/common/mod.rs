//! Common type tests.

/// Architectural constants.
pub mod constants;
