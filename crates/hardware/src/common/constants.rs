//! Architectural Constants.
//!
//! This module defines the fixed dimensions of the LS-8 machine. It includes:
//! 1. **Memory Constants:** Size of the flat address space.
//! 2. **Register Constants:** Register count and the register reserved as stack pointer.
//! 3. **Flag Constants:** Bit positions in the flags register.

/// Number of addressable memory cells (8-bit address space).
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// Register index reserved as the stack pointer (R7).
///
/// Ordinary instructions may still read and write it as a general register.
pub const SP: u8 = 7;

/// Initial stack pointer value.
///
/// Leaves headroom below the top of memory and above a typical loaded program.
pub const STACK_BASE: u8 = 0xF4;

/// Flags register bit set when the last comparison found `a == b`.
pub const FLAG_EQUAL: u8 = 0b0000_0001;

/// Flags register bit set when the last comparison found `a > b`.
pub const FLAG_GREATER: u8 = 0b0000_0010;

/// Flags register bit set when the last comparison found `a < b`.
pub const FLAG_LESS: u8 = 0b0000_0100;

/// Mask of the defined bits in the flags register.
pub const FLAG_MASK: u8 = FLAG_EQUAL | FLAG_GREATER | FLAG_LESS;
