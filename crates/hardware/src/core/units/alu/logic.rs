//! ALU comparison.

use crate::core::arch::Flags;

/// Compares `a` with `b`, re-deriving every flag bit.
#[inline]
pub const fn compare(a: u8, b: u8) -> Flags {
    Flags::compare(a, b)
}
