//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns the entire machine state.
//! It coordinates the following:
//! 1. **State Management:** Registers, program counter, flags, and the halt latch.
//! 2. **Dispatch:** The opcode-to-handler table built at construction.
//! 3. **Memory:** The flat 256-byte memory and the stack carved from its top.
//! 4. **Output:** The console device written by `PRN`.
//!
//! A `Cpu` is single-use per program load; [`Cpu::reset`] re-initializes it in place.

/// Fetch/decode/dispatch loop, PC control, and ALU access.
pub mod execution;

/// Memory access and stack operations.
pub mod memory;

/// Trace output and state dumps.
pub mod trace;

use crate::common::{ExecError, LoadError, SP};
use crate::config::Config;
use crate::core::arch::{Flags, Gpr};
use crate::isa::DispatchTable;
use crate::soc::{Console, Memory, StdoutConsole};
use crate::stats::SimStats;

/// Main CPU structure containing all processor state.
#[derive(Debug)]
pub struct Cpu<C: Console = StdoutConsole> {
    /// General-purpose registers (R7 is the stack pointer).
    pub regs: Gpr,
    /// Main memory.
    pub ram: Memory,
    /// Program Counter.
    pub pc: u8,
    /// Flags register.
    pub fl: Flags,
    /// Write a trace line to stderr before each instruction.
    pub trace: bool,
    /// Execution statistics.
    pub stats: SimStats,

    halted: bool,
    stack_base: u8,
    console: C,
    dispatch: DispatchTable<C>,
}

impl Cpu<StdoutConsole> {
    /// Creates a CPU that prints to standard output.
    pub fn new(config: &Config) -> Self {
        Self::with_console(config, StdoutConsole::new())
    }
}

impl<C: Console> Cpu<C> {
    /// Creates a CPU with the given console device.
    ///
    /// Memory, registers, and flags start zeroed, except SP (R7), which holds
    /// `config.system.stack_base`.
    pub fn with_console(config: &Config, console: C) -> Self {
        let mut cpu = Self {
            regs: Gpr::new(),
            ram: Memory::new(),
            pc: 0,
            fl: Flags::new(),
            trace: config.general.trace_instructions,
            stats: SimStats::default(),
            halted: false,
            stack_base: config.system.stack_base,
            console,
            dispatch: DispatchTable::new(),
        };
        cpu.init_sp();
        cpu
    }

    /// Copies a program image into memory starting at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ProgramTooLarge`] if the image exceeds memory.
    pub fn load(&mut self, image: &[u8]) -> Result<(), LoadError> {
        self.ram.load(image)?;
        tracing::debug!(bytes = image.len(), "program loaded");
        Ok(())
    }

    /// Returns the CPU to its freshly constructed state.
    ///
    /// Memory, registers, flags, PC, and statistics are cleared and SP is set back
    /// to the stack base. The console and any custom dispatch entries are kept.
    pub fn reset(&mut self) {
        self.ram.clear();
        self.regs.clear();
        self.pc = 0;
        self.fl = Flags::new();
        self.stats = SimStats::default();
        self.halted = false;
        self.init_sp();
    }

    fn init_sp(&mut self) {
        // SP is always a valid register index.
        let _ = self.regs.write(SP, self.stack_base);
    }

    /// Whether the last instruction executed was `HLT`.
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// Stops the execution loop after the current instruction.
    pub const fn halt(&mut self) {
        self.halted = true;
    }

    /// Configured initial stack pointer.
    pub const fn stack_base(&self) -> u8 {
        self.stack_base
    }

    /// Reads a register, validating the index.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::InvalidRegister`] if `idx` is not 0-7.
    #[inline]
    pub fn reg(&self, idx: u8) -> Result<u8, ExecError> {
        self.regs
            .read(idx)
            .ok_or(ExecError::InvalidRegister { index: idx, pc: self.pc })
    }

    /// Writes a register, validating the index.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::InvalidRegister`] if `idx` is not 0-7.
    #[inline]
    pub fn set_reg(&mut self, idx: u8, val: u8) -> Result<(), ExecError> {
        self.regs
            .write(idx, val)
            .ok_or(ExecError::InvalidRegister { index: idx, pc: self.pc })
    }

    /// Current stack pointer (R7).
    #[inline]
    pub fn sp(&self) -> u8 {
        self.regs.read(SP).unwrap_or_default()
    }

    /// The console device.
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// The console device, mutably.
    pub const fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    /// Consumes the CPU, returning its console device.
    pub fn into_console(self) -> C {
        self.console
    }

    /// The opcode dispatch table.
    pub const fn dispatch(&self) -> &DispatchTable<C> {
        &self.dispatch
    }

    /// The opcode dispatch table, mutably, for registering additional instructions.
    pub const fn dispatch_mut(&mut self) -> &mut DispatchTable<C> {
        &mut self.dispatch
    }
}
