//! Trace Output and State Dumps.

use std::fmt::Write;

use super::Cpu;
use crate::isa::disasm;
use crate::soc::Console;

impl<C: Console> Cpu<C> {
    /// Formats the CPU state about to execute.
    ///
    /// Layout: `TRACE: PC FL | IR A B | R0 .. R7`, each field two uppercase hex digits.
    pub fn trace_line(&self) -> String {
        let mut line = format!(
            "TRACE: {:02X} {:02X} | {:02X} {:02X} {:02X} |",
            self.pc,
            self.fl.bits(),
            self.ram.read(self.pc),
            self.ram.read_offset(self.pc, 1).unwrap_or(0),
            self.ram.read_offset(self.pc, 2).unwrap_or(0),
        );
        for value in self.regs.as_array() {
            let _ = write!(line, " {value:02X}");
        }
        line
    }

    /// Disassembles the instruction at PC.
    ///
    /// After a fault the PC still points at the faulting instruction, so this
    /// names what failed; an undecodable opcode renders as `??? 0xNN`.
    pub fn current_instruction(&self) -> String {
        disasm::disassemble(
            self.ram.read(self.pc),
            self.ram.read_offset(self.pc, 1).unwrap_or(0),
            self.ram.read_offset(self.pc, 2).unwrap_or(0),
        )
    }

    /// Dumps the current CPU state (PC, flags, registers, and the instruction at PC) to stderr.
    pub fn dump_state(&self) {
        eprintln!("PC = {:#04x}  FL = {} ({:#05b})", self.pc, self.fl, self.fl.bits());
        eprintln!("IR = {}", self.current_instruction());
        self.regs.dump();
    }
}
