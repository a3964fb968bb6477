//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the LS-8 integer ALU. Every operation takes two
//! byte-wide register values; arithmetic produces a new register value and
//! comparison produces a new flags register.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Mul (wrapping at the byte boundary)
//! - [`logic`]:      Cmp

/// Wrapping byte arithmetic (add, multiply).
pub mod arithmetic;

/// Comparison producing condition flags.
pub mod logic;

use std::fmt;
use std::str::FromStr;

use crate::common::ExecError;
use crate::core::arch::Flags;
use crate::isa::opcodes;

/// Operations the ALU implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `a + b`, wrapping.
    Add,
    /// `a * b`, wrapping.
    Mul,
    /// Compare `a` with `b`; registers unchanged.
    Cmp,
}

impl AluOp {
    /// Upper-case operation name, as used in assembly and diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Mul => "MUL",
            Self::Cmp => "CMP",
        }
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AluOp {
    type Err = ExecError;

    /// Resolves an operation by name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ADD" => Ok(Self::Add),
            "MUL" => Ok(Self::Mul),
            "CMP" => Ok(Self::Cmp),
            _ => Err(ExecError::UnsupportedOperation(s.to_string())),
        }
    }
}

impl TryFrom<u8> for AluOp {
    type Error = ExecError;

    /// Resolves the operation an ALU-class opcode requests.
    fn try_from(opcode: u8) -> Result<Self, Self::Error> {
        match opcode {
            opcodes::ADD => Ok(Self::Add),
            opcodes::MUL => Ok(Self::Mul),
            opcodes::CMP => Ok(Self::Cmp),
            _ => Err(ExecError::UnsupportedOperation(format!(
                "opcode {opcode:#010b}"
            ))),
        }
    }
}

/// What an ALU operation produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOutcome {
    /// A new value for the destination register.
    Value(u8),
    /// A new flags register; no register changes.
    Flags(Flags),
}

/// Arithmetic Logic Unit (ALU) for byte-wide operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand (value of register A)
    /// * `b`  - Second operand (value of register B)
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::units::alu::{Alu, AluOp, AluOutcome};
    ///
    /// assert_eq!(Alu::execute(AluOp::Mul, 8, 9), AluOutcome::Value(72));
    /// assert_eq!(Alu::execute(AluOp::Add, 200, 100), AluOutcome::Value(44));
    ///
    /// let AluOutcome::Flags(fl) = Alu::execute(AluOp::Cmp, 3, 3) else { panic!() };
    /// assert!(fl.equal());
    /// ```
    pub const fn execute(op: AluOp, a: u8, b: u8) -> AluOutcome {
        match op {
            AluOp::Add | AluOp::Mul => AluOutcome::Value(arithmetic::execute(op, a, b)),
            AluOp::Cmp => AluOutcome::Flags(logic::compare(a, b)),
        }
    }
}
