//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the LS-8 opcode table, the generic opcode-field decoder, the
//! instruction handlers, and the table that dispatches opcodes to them.
//!
//! # Encoding
//!
//! An opcode byte is laid out as `AABCDDDD`:
//!
//! * `AA`: number of operand bytes that follow (0-2).
//! * `B`: the instruction is handled by the ALU.
//! * `C`: the instruction sets the PC directly.
//! * `DDDD`: instruction identifier.

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Opcode-to-handler lookup table.
pub mod dispatch;

/// Instruction handlers.
pub mod handlers;

/// Opcode field extraction utilities.
pub mod instruction;

/// Opcode constants.
pub mod opcodes;

pub use dispatch::{DispatchTable, Handler, Operands};
pub use instruction::InstructionBits;
