//! Instruction Handlers.
//!
//! One function per instruction, all sharing the [`Handler`](crate::isa::Handler)
//! signature. Each handler is responsible for the PC: either advancing it by the
//! opcode's encoded length or setting it directly.
//!
//! Register operands are validated before any state changes, so a bad register
//! index never leaves a half-executed instruction behind.

use crate::common::ExecError;
use crate::core::Cpu;
use crate::core::units::alu::AluOp;
use crate::isa::Operands;
use crate::soc::Console;

/// `HLT`: stops the execution loop. The PC is left on the `HLT`.
///
/// # Errors
///
/// Never fails; the signature is shared with every other handler.
pub const fn hlt<C: Console>(cpu: &mut Cpu<C>, _ops: Operands) -> Result<(), ExecError> {
    cpu.halt();
    Ok(())
}

/// `LDI reg, imm`: loads an immediate value into a register.
///
/// # Errors
///
/// Returns [`ExecError::InvalidRegister`] for a register operand outside R0-R7, or
/// [`ExecError::PcOverflow`] if the next instruction would start past address 255.
pub fn ldi<C: Console>(cpu: &mut Cpu<C>, ops: Operands) -> Result<(), ExecError> {
    cpu.set_reg(ops.a, ops.b)?;
    cpu.advance(ops.ir)
}

/// `PRN reg`: prints a register's value in decimal.
///
/// # Errors
///
/// Returns [`ExecError::InvalidRegister`] for a register operand outside R0-R7,
/// [`ExecError::Console`] if the console rejects the write, or
/// [`ExecError::PcOverflow`] as for [`ldi`].
pub fn prn<C: Console>(cpu: &mut Cpu<C>, ops: Operands) -> Result<(), ExecError> {
    let value = cpu.reg(ops.a)?;
    cpu.console_mut().print_value(value)?;
    cpu.advance(ops.ir)
}

/// ALU-class instructions (`ADD`, `MUL`, `CMP`): the opcode selects the operation.
///
/// # Errors
///
/// Returns [`ExecError::UnsupportedOperation`] for an opcode the ALU does not
/// implement, plus the register and PC errors of [`ldi`].
pub fn alu<C: Console>(cpu: &mut Cpu<C>, ops: Operands) -> Result<(), ExecError> {
    let op = AluOp::try_from(ops.ir)?;
    cpu.alu(op, ops.a, ops.b)?;
    cpu.advance(ops.ir)
}

/// `PUSH reg`: decrements SP, then stores the register at `Memory[SP]`.
///
/// # Errors
///
/// As [`Cpu::push_reg`], plus [`ExecError::PcOverflow`].
pub fn push<C: Console>(cpu: &mut Cpu<C>, ops: Operands) -> Result<(), ExecError> {
    cpu.push_reg(ops.a)?;
    cpu.advance(ops.ir)
}

/// `POP reg`: loads `Memory[SP]` into the register, then increments SP.
///
/// # Errors
///
/// As [`Cpu::pop_reg`], plus [`ExecError::PcOverflow`].
pub fn pop<C: Console>(cpu: &mut Cpu<C>, ops: Operands) -> Result<(), ExecError> {
    cpu.pop_reg(ops.a)?;
    cpu.advance(ops.ir)
}

/// `JMP reg`: sets the PC to the register's value.
///
/// # Errors
///
/// Returns [`ExecError::InvalidRegister`] for a register operand outside R0-R7.
pub fn jmp<C: Console>(cpu: &mut Cpu<C>, ops: Operands) -> Result<(), ExecError> {
    branch_if(cpu, ops, true)
}

/// `JEQ reg`: jumps if the Equal flag is set.
///
/// # Errors
///
/// Returns [`ExecError::InvalidRegister`] for a register operand outside R0-R7, or
/// [`ExecError::PcOverflow`] when falling through past address 255.
pub fn jeq<C: Console>(cpu: &mut Cpu<C>, ops: Operands) -> Result<(), ExecError> {
    let taken = cpu.fl.equal();
    branch_if(cpu, ops, taken)
}

/// `JNE reg`: jumps if the Equal flag is clear.
///
/// # Errors
///
/// As [`jeq`].
pub fn jne<C: Console>(cpu: &mut Cpu<C>, ops: Operands) -> Result<(), ExecError> {
    let taken = !cpu.fl.equal();
    branch_if(cpu, ops, taken)
}

fn branch_if<C: Console>(cpu: &mut Cpu<C>, ops: Operands, taken: bool) -> Result<(), ExecError> {
    let target = cpu.reg(ops.a)?;
    cpu.stats.record_branch(taken);
    if taken {
        cpu.jump(target);
        Ok(())
    } else {
        cpu.advance(ops.ir)
    }
}
