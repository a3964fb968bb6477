//! Opcode field extraction.
//!
//! Every LS-8 opcode carries its own operand count in the top two bits, so the
//! amount a handler advances the PC is computed from the opcode rather than
//! hardcoded per instruction.

/// Bit mask for the operand-count field (bits 6-7).
pub const OPERAND_COUNT_MASK: u8 = 0b1100_0000;
/// Bit shift for the operand-count field.
pub const OPERAND_COUNT_SHIFT: u32 = 6;
/// Bit marking ALU-class instructions (bit 5).
pub const ALU_BIT: u8 = 0b0010_0000;
/// Bit marking instructions that set the PC directly (bit 4).
pub const SETS_PC_BIT: u8 = 0b0001_0000;
/// Bit mask for the 6-bit operation identifier.
pub const OPERATION_MASK: u8 = 0b0011_1111;

/// Trait for extracting fields from an opcode byte.
pub trait InstructionBits {
    /// Number of operand bytes following the opcode (0-3; the ISA uses 0-2).
    fn operand_count(&self) -> u8;

    /// Total instruction length in bytes: opcode plus operands.
    fn instruction_len(&self) -> u8;

    /// Whether the ALU executes this instruction.
    fn is_alu(&self) -> bool;

    /// Whether the instruction writes the PC itself.
    fn sets_pc(&self) -> bool;

    /// The low six bits identifying the operation.
    fn operation(&self) -> u8;
}

impl InstructionBits for u8 {
    #[inline(always)]
    fn operand_count(&self) -> u8 {
        (self & OPERAND_COUNT_MASK) >> OPERAND_COUNT_SHIFT
    }

    #[inline(always)]
    fn instruction_len(&self) -> u8 {
        self.operand_count() + 1
    }

    #[inline(always)]
    fn is_alu(&self) -> bool {
        self & ALU_BIT != 0
    }

    #[inline(always)]
    fn sets_pc(&self) -> bool {
        self & SETS_PC_BIT != 0
    }

    #[inline(always)]
    fn operation(&self) -> u8 {
        self & OPERATION_MASK
    }
}
