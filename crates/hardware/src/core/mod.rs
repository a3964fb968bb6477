//! Core processor implementation.
//!
//! This module contains the LS-8 CPU: architectural state (registers and flags),
//! the ALU, and the fetch/decode/dispatch loop that ties them to memory.

/// Architectural state (general-purpose registers, flags register).
pub mod arch;

/// CPU core and execution loop.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
