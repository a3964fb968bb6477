//! Common utilities and types used throughout the LS-8 emulator.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Constants:** Architectural sizes, the stack pointer register, and flag bits.
//! 2. **Error Handling:** Load, configuration, and execution errors, plus exit-code mapping.

/// Architectural constants.
pub mod constants;

/// Error types for loading, configuration, and execution.
pub mod error;

pub use constants::{MEMORY_SIZE, REGISTER_COUNT, SP, STACK_BASE};
pub use error::{ConfigError, ExecError, LoadError, SimError};
