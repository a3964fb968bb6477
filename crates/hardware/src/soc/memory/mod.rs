//! Main Memory.
//!
//! This module implements the LS-8's flat memory. It provides:
//! 1. **Storage:** A fixed 256-byte array addressed by an 8-bit address.
//! 2. **Access:** Byte reads and writes, plus checked offset reads used for operand prefetch.
//! 3. **Loading:** Copying a program image into memory starting at address 0.
//!
//! Memory never grows. Because addresses are `u8`, every direct access is in range;
//! address arithmetic that would leave the array is checked by the caller.

use crate::common::{LoadError, MEMORY_SIZE};

/// Flat byte-addressed memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Creates a zero-filled memory.
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Reads the byte at `addr`.
    #[inline(always)]
    pub const fn read(&self, addr: u8) -> u8 {
        self.cells[addr as usize]
    }

    /// Writes `val` to `addr`.
    #[inline(always)]
    pub const fn write(&mut self, addr: u8, val: u8) {
        self.cells[addr as usize] = val;
    }

    /// Reads the byte `offset` cells after `base`.
    ///
    /// Returns `None` when `base + offset` is past the last cell instead of wrapping.
    #[inline]
    pub fn read_offset(&self, base: u8, offset: u8) -> Option<u8> {
        base.checked_add(offset).map(|addr| self.read(addr))
    }

    /// Copies `image` into memory starting at address 0.
    ///
    /// Cells after the image keep their current contents; on a fresh memory they are zero.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ProgramTooLarge`] if `image` is longer than memory.
    pub fn load(&mut self, image: &[u8]) -> Result<(), LoadError> {
        let dest = self
            .cells
            .get_mut(..image.len())
            .ok_or(LoadError::ProgramTooLarge {
                len: image.len(),
                capacity: MEMORY_SIZE,
            })?;
        dest.copy_from_slice(image);
        Ok(())
    }

    /// Zeroes every cell.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Returns the whole memory as a slice.
    pub const fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.cells.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .field("used", &used)
            .finish()
    }
}
