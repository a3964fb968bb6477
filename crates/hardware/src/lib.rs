//! LS-8 emulator library.
//!
//! This crate implements an emulator for the LS-8, an 8-bit register machine, with the following:
//! 1. **Core:** Register file, flags register, stack discipline, and the fetch/decode/dispatch loop.
//! 2. **ALU:** Wrapping arithmetic and comparison with condition-flag updates.
//! 3. **ISA:** Opcode encoding, the handler dispatch table, and a disassembler.
//! 4. **Devices:** Flat 256-byte memory and the console device used by `PRN`.
//! 5. **Simulation:** Program loader, configuration, and statistics collection.

/// Common types and constants (architectural sizes, flag bits, errors).
pub mod common;
/// Emulator configuration (defaults and JSON-deserialized config structures).
pub mod config;
/// CPU core (architectural state, ALU, execution loop).
pub mod core;
/// Instruction set (opcodes, decode helpers, handlers, dispatch table, disassembler).
pub mod isa;
/// Program loader.
pub mod sim;
/// Memory and console devices.
pub mod soc;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; owns memory, registers, flags, and the dispatch table.
pub use crate::core::Cpu;
/// Umbrella error type covering loading, configuration, and execution.
pub use crate::common::error::SimError;
