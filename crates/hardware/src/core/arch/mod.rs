//! LS-8 architectural state.
//!
//! This module contains the programmer-visible storage of the machine:
//! 1. **GPRs:** Eight byte-wide general-purpose registers, R7 doubling as stack pointer.
//! 2. **Flags:** The condition-code register written by `CMP`.

/// Flags register implementation.
pub mod flags;

/// General-Purpose Register file implementation.
pub mod gpr;

pub use flags::Flags;
pub use gpr::Gpr;
