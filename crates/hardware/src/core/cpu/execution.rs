//! Main Execution Loop.
//!
//! This module implements the fetch/decode/dispatch cycle. It performs the following:
//! 1. **Fetch:** Reads the opcode at PC and prefetches the next two bytes as candidate operands.
//! 2. **Decode:** Looks the opcode up in the dispatch table; a missing entry is fatal.
//! 3. **Dispatch:** Invokes the handler, which performs the instruction and moves the PC.
//! 4. **Observability:** Trace lines, structured logs, and statistics.
//!
//! The loop never advances the PC on a handler's behalf.

use super::Cpu;
use crate::common::ExecError;
use crate::core::units::alu::{Alu, AluOp, AluOutcome};
use crate::isa::disasm;
use crate::isa::{InstructionBits, Operands};
use crate::soc::Console;

impl<C: Console> Cpu<C> {
    /// Runs until `HLT` or a fatal fault.
    ///
    /// # Errors
    ///
    /// Returns the [`ExecError`] that stopped execution. Nothing of the faulting
    /// instruction is retried.
    pub fn run(&mut self) -> Result<(), ExecError> {
        self.halted = false;
        self.stats.start();

        let result = loop {
            if self.halted {
                break Ok(());
            }
            if let Err(e) = self.step() {
                break Err(e);
            }
        };

        self.stats.stop();
        let flushed = self.console.flush();

        match &result {
            Ok(()) => tracing::debug!(
                pc = self.pc,
                retired = self.stats.instructions_retired,
                "halted"
            ),
            Err(e) => tracing::error!(pc = self.pc, error = %e, "execution stopped"),
        }

        result?;
        flushed?;
        Ok(())
    }

    /// Executes exactly one instruction.
    ///
    /// # Errors
    ///
    /// * [`ExecError::Decode`] if no handler is registered for the opcode at PC.
    /// * [`ExecError::OperandOutOfRange`] if the opcode's operands run past the end of memory.
    /// * Any error raised by the handler itself.
    pub fn step(&mut self) -> Result<(), ExecError> {
        let pc = self.pc;
        let ir = self.ram.read(pc);
        let ops = Operands {
            ir,
            a: self.ram.read_offset(pc, 1).unwrap_or(0),
            b: self.ram.read_offset(pc, 2).unwrap_or(0),
        };

        if self.trace {
            eprintln!("{}", self.trace_line());
        }

        let handler = self
            .dispatch
            .lookup(ir)
            .ok_or(ExecError::Decode { opcode: ir, pc })?;

        if pc.checked_add(ir.operand_count()).is_none() {
            return Err(ExecError::OperandOutOfRange { pc });
        }

        tracing::trace!(
            pc,
            inst = %disasm::disassemble(ir, ops.a, ops.b),
            "dispatch"
        );

        handler(self, ops)?;
        self.stats.record(ir);
        Ok(())
    }

    /// Moves the PC past the current instruction, using the length encoded in `ir`.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::PcOverflow`] if the next instruction would start past address 255.
    #[inline]
    pub fn advance(&mut self, ir: u8) -> Result<(), ExecError> {
        self.pc = self
            .pc
            .checked_add(ir.instruction_len())
            .ok_or(ExecError::PcOverflow { pc: self.pc })?;
        Ok(())
    }

    /// Sets the PC to `target`.
    #[inline]
    pub const fn jump(&mut self, target: u8) {
        self.pc = target;
    }

    /// Performs an ALU operation in place on the register file.
    ///
    /// Arithmetic writes the result to `reg_a`; comparison rewrites the flags
    /// register and leaves every register untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::InvalidRegister`] if either index is not 0-7.
    pub fn alu(&mut self, op: AluOp, reg_a: u8, reg_b: u8) -> Result<(), ExecError> {
        let a = self.reg(reg_a)?;
        let b = self.reg(reg_b)?;
        match Alu::execute(op, a, b) {
            AluOutcome::Value(v) => self.set_reg(reg_a, v),
            AluOutcome::Flags(fl) => {
                self.fl = fl;
                Ok(())
            }
        }
    }

    /// Performs an ALU operation selected by name (`"ADD"`, `"MUL"`, `"CMP"`).
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::UnsupportedOperation`] for any other name, or
    /// [`ExecError::InvalidRegister`] as for [`Cpu::alu`].
    pub fn alu_named(&mut self, op: &str, reg_a: u8, reg_b: u8) -> Result<(), ExecError> {
        self.alu(op.parse()?, reg_a, reg_b)
    }
}
