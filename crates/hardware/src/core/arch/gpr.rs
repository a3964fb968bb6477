//! LS-8 General-Purpose Register File.
//!
//! This module implements the eight byte-wide registers of the LS-8.
//! It performs the following:
//! 1. **Storage:** Maintains registers `R0`-`R7`.
//! 2. **Bounds:** Reports out-of-range indices to the caller instead of panicking.
//! 3. **Debugging:** Provides utilities for dumping the complete register state.
//!
//! `R7` is the stack pointer. Nothing here prevents ordinary instructions from
//! using it as a general register.

use crate::common::REGISTER_COUNT;

/// General-Purpose Register file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u8; REGISTER_COUNT],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; REGISTER_COUNT],
        }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    ///
    /// # Returns
    ///
    /// The register value, or `None` if `idx` does not name a register.
    #[inline]
    pub fn read(&self, idx: u8) -> Option<u8> {
        self.regs.get(idx as usize).copied()
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    /// * `val` - The value to write.
    ///
    /// # Returns
    ///
    /// `None` if `idx` does not name a register; the file is left unchanged.
    #[inline]
    pub fn write(&mut self, idx: u8, val: u8) -> Option<()> {
        let slot = self.regs.get_mut(idx as usize)?;
        *slot = val;
        Some(())
    }

    /// Returns all register values in index order.
    pub const fn as_array(&self) -> &[u8; REGISTER_COUNT] {
        &self.regs
    }

    /// Zeroes every register.
    pub const fn clear(&mut self) {
        self.regs = [0; REGISTER_COUNT];
    }

    /// Dumps the contents of all registers to stderr.
    pub fn dump(&self) {
        for (i, pair) in self.regs.chunks(2).enumerate() {
            eprintln!(
                "R{}={:#04x} R{}={:#04x}",
                i * 2,
                pair[0],
                i * 2 + 1,
                pair[1]
            );
        }
    }
}
