//! Memory Access and Stack Operations.
//!
//! This module provides the CPU-side interface to main memory. It performs the following:
//! 1. **Memory Access:** Reads through the Memory Address Register and writes through the
//!    Memory Data Register.
//! 2. **Stack Discipline:** Pre-decrement push and post-increment pop through SP (R7).
//!
//! The stack grows downward from the configured stack base. Nothing prevents it from
//! growing into a loaded program; only leaving the address space is a fault.

use super::Cpu;
use crate::common::{ExecError, SP};
use crate::soc::Console;

impl<C: Console> Cpu<C> {
    /// Reads the byte at `mar` (Memory Address Register).
    #[inline]
    pub const fn ram_read(&self, mar: u8) -> u8 {
        self.ram.read(mar)
    }

    /// Writes `mdr` (Memory Data Register) to `mar`.
    #[inline]
    pub const fn ram_write(&mut self, mdr: u8, mar: u8) {
        self.ram.write(mar, mdr);
    }

    /// Pushes register `idx` onto the stack.
    ///
    /// SP is decremented first and the register is read afterwards, so `PUSH R7`
    /// stores the already-decremented stack pointer.
    ///
    /// # Errors
    ///
    /// * [`ExecError::InvalidRegister`] if `idx` is not 0-7; nothing changes.
    /// * [`ExecError::StackOverflow`] if SP is already 0; nothing changes.
    pub fn push_reg(&mut self, idx: u8) -> Result<(), ExecError> {
        let _ = self.reg(idx)?;
        let sp = self
            .sp()
            .checked_sub(1)
            .ok_or(ExecError::StackOverflow { pc: self.pc })?;
        self.set_reg(SP, sp)?;
        let value = self.reg(idx)?;
        self.ram.write(sp, value);
        self.stats.record_stack_depth(self.stack_base, sp);
        Ok(())
    }

    /// Pops the top of the stack into register `idx`.
    ///
    /// The register is written before SP is incremented, so `POP R7` leaves SP one
    /// past the popped value.
    ///
    /// # Errors
    ///
    /// * [`ExecError::InvalidRegister`] if `idx` is not 0-7; nothing changes.
    /// * [`ExecError::StackUnderflow`] if the incremented SP would pass address 255;
    ///   nothing changes. For `POP R7` the incremented value is the popped byte.
    pub fn pop_reg(&mut self, idx: u8) -> Result<(), ExecError> {
        let _ = self.reg(idx)?;
        let value = self.ram.read(self.sp());
        let base = if idx == SP { value } else { self.sp() };
        let sp = base
            .checked_add(1)
            .ok_or(ExecError::StackUnderflow { pc: self.pc })?;
        self.set_reg(idx, value)?;
        self.set_reg(SP, sp)
    }
}
