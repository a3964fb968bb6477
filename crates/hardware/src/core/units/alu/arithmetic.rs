//! ALU arithmetic operations.
//!
//! Results wrap at the byte boundary: the LS-8 has no carry or overflow flag.

use super::AluOp;

/// Executes an arithmetic operation.
///
/// Returns `a` unchanged for non-arithmetic operations.
pub const fn execute(op: AluOp, a: u8, b: u8) -> u8 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Mul => a.wrapping_mul(b),
        AluOp::Cmp => a,
    }
}
