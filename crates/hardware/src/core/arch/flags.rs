//! Flags Register.
//!
//! Only the low three bits are defined: Equal (bit 0), Greater-than (bit 1), and
//! Less-than (bit 2). Comparisons re-derive all three bits on every call, so a
//! flag never survives from an earlier comparison.

use std::fmt;

use crate::common::constants::{FLAG_EQUAL, FLAG_GREATER, FLAG_LESS, FLAG_MASK};

/// The LS-8 condition-code register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags(u8);

impl Flags {
    /// Creates a flags register with every bit clear.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Builds a flags value from raw bits; undefined bits are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & FLAG_MASK)
    }

    /// Flags describing the relation between `a` and `b`.
    ///
    /// Exactly one of Equal, Less-than, or Greater-than is set.
    pub const fn compare(a: u8, b: u8) -> Self {
        let mut bits = 0;
        if a == b {
            bits |= FLAG_EQUAL;
        }
        if a < b {
            bits |= FLAG_LESS;
        }
        if a > b {
            bits |= FLAG_GREATER;
        }
        Self(bits)
    }

    /// Raw register value.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether the Equal bit is set.
    pub const fn equal(self) -> bool {
        self.0 & FLAG_EQUAL != 0
    }

    /// Whether the Less-than bit is set.
    pub const fn less(self) -> bool {
        self.0 & FLAG_LESS != 0
    }

    /// Whether the Greater-than bit is set.
    pub const fn greater(self) -> bool {
        self.0 & FLAG_GREATER != 0
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            bit(self.less(), 'L'),
            bit(self.greater(), 'G'),
            bit(self.equal(), 'E')
        )
    }
}
