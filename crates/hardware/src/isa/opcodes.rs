//! LS-8 Opcodes.
//!
//! Defines the full opcode byte for every implemented instruction.

/// Halt the CPU.
pub const HLT: u8 = 0b0000_0001;

/// Load an immediate into a register (LDI reg, imm).
pub const LDI: u8 = 0b1000_0010;

/// Print a register as a decimal number (PRN reg).
pub const PRN: u8 = 0b0100_0111;

/// Add two registers, storing into the first (ADD regA, regB).
pub const ADD: u8 = 0b1010_0000;

/// Multiply two registers, storing into the first (MUL regA, regB).
pub const MUL: u8 = 0b1010_0010;

/// Compare two registers, setting the flags register (CMP regA, regB).
pub const CMP: u8 = 0b1010_0111;

/// Push a register onto the stack (PUSH reg).
pub const PUSH: u8 = 0b0100_0101;

/// Pop the top of the stack into a register (POP reg).
pub const POP: u8 = 0b0100_0110;

/// Jump to the address held in a register (JMP reg).
pub const JMP: u8 = 0b0101_0100;

/// Jump if the Equal flag is set (JEQ reg).
pub const JEQ: u8 = 0b0101_0101;

/// Jump if the Equal flag is clear (JNE reg).
pub const JNE: u8 = 0b0101_0110;
