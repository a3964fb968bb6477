//! Architectural state tests.

/// Flags register behavior.
pub mod flags;
