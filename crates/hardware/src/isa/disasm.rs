//! Instruction Disassembler for the LS-8.
//!
//! Converts an opcode and its candidate operand bytes into a human-readable
//! string for debug tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0b1000_0010, 0, 8), "LDI R0, 8");
//! assert_eq!(disassemble(0b0000_0001, 0, 0), "HLT");
//! ```

use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes as op;

/// Returns the mnemonic for `opcode`, or `None` if it is not an LS-8 instruction.
pub const fn mnemonic(opcode: u8) -> Option<&'static str> {
    let mn = match opcode {
        op::HLT => "HLT",
        op::LDI => "LDI",
        op::PRN => "PRN",
        op::ADD => "ADD",
        op::MUL => "MUL",
        op::CMP => "CMP",
        op::PUSH => "PUSH",
        op::POP => "POP",
        op::JMP => "JMP",
        op::JEQ => "JEQ",
        op::JNE => "JNE",
        _ => return None,
    };
    Some(mn)
}

/// Disassembles one instruction.
///
/// Only as many operand bytes as the opcode declares are rendered. Returns
/// `"??? 0xNN"` for unrecognised opcodes.
///
/// # Arguments
///
/// * `ir` - The opcode byte.
/// * `a` - The byte following the opcode.
/// * `b` - The byte after that.
pub fn disassemble(ir: u8, a: u8, b: u8) -> String {
    let Some(mn) = mnemonic(ir) else {
        return format!("??? {ir:#04x}");
    };

    match ir {
        op::LDI => format!("{mn} R{a}, {b}"),
        _ => match ir.operand_count() {
            0 => mn.to_string(),
            1 => format!("{mn} R{a}"),
            _ => format!("{mn} R{a}, R{b}"),
        },
    }
}

/// Disassembles a whole memory image, stopping after the first `HLT` or at the end.
///
/// Each entry is `(address, text)`. Unknown opcodes are listed as single-byte
/// instructions so the listing can continue.
pub fn disassemble_image(image: &[u8]) -> Vec<(u8, String)> {
    let mut listing = Vec::new();
    let mut addr = 0usize;
    while addr < image.len() {
        let ir = image[addr];
        let a = image.get(addr + 1).copied().unwrap_or(0);
        let b = image.get(addr + 2).copied().unwrap_or(0);
        listing.push((addr as u8, disassemble(ir, a, b)));
        if ir == op::HLT {
            break;
        }
        let len = if mnemonic(ir).is_some() {
            ir.instruction_len() as usize
        } else {
            1
        };
        addr += len;
    }
    listing
}
