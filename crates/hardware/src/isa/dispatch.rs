//! Opcode Dispatch Table.
//!
//! Maps every opcode byte to an optional handler. The table is a fixed
//! 256-entry array built once when the CPU is constructed; an empty slot is
//! the only source of decode errors.

use std::fmt;

use crate::common::ExecError;
use crate::core::Cpu;
use crate::isa::handlers;
use crate::isa::opcodes;
use crate::soc::Console;

/// Opcode and the two candidate operand bytes fetched after it.
///
/// `a` and `b` are always fetched; handlers that take fewer operands ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operands {
    /// The opcode byte (instruction register).
    pub ir: u8,
    /// Byte at `PC + 1`, or 0 past the end of memory.
    pub a: u8,
    /// Byte at `PC + 2`, or 0 past the end of memory.
    pub b: u8,
}

/// Common signature of every instruction handler.
///
/// A handler performs the instruction and leaves the PC pointing at the next
/// instruction to fetch.
pub type Handler<C> = fn(&mut Cpu<C>, Operands) -> Result<(), ExecError>;

/// Opcode-indexed handler table.
pub struct DispatchTable<C: Console> {
    handlers: [Option<Handler<C>>; 256],
}

impl<C: Console> DispatchTable<C> {
    /// Creates a table with every LS-8 instruction registered.
    pub fn new() -> Self {
        let mut table = Self::empty();
        table.register(opcodes::HLT, handlers::hlt);
        table.register(opcodes::LDI, handlers::ldi);
        table.register(opcodes::PRN, handlers::prn);
        table.register(opcodes::ADD, handlers::alu);
        table.register(opcodes::MUL, handlers::alu);
        table.register(opcodes::CMP, handlers::alu);
        table.register(opcodes::PUSH, handlers::push);
        table.register(opcodes::POP, handlers::pop);
        table.register(opcodes::JMP, handlers::jmp);
        table.register(opcodes::JEQ, handlers::jeq);
        table.register(opcodes::JNE, handlers::jne);
        table
    }

    /// Creates a table with no handlers.
    pub const fn empty() -> Self {
        Self {
            handlers: [None; 256],
        }
    }

    /// Installs `handler` for `opcode`, replacing any previous entry.
    pub const fn register(&mut self, opcode: u8, handler: Handler<C>) {
        self.handlers[opcode as usize] = Some(handler);
    }

    /// Removes the handler for `opcode`.
    pub const fn unregister(&mut self, opcode: u8) {
        self.handlers[opcode as usize] = None;
    }

    /// Returns the handler registered for `opcode`.
    #[inline(always)]
    pub const fn lookup(&self, opcode: u8) -> Option<Handler<C>> {
        self.handlers[opcode as usize]
    }

    /// Number of registered opcodes.
    pub fn len(&self) -> usize {
        self.handlers.iter().filter(|h| h.is_some()).count()
    }

    /// Whether no opcode is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the registered opcodes in ascending order.
    pub fn opcodes(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(|&op| self.lookup(op).is_some())
    }
}

impl<C: Console> Default for DispatchTable<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Console> fmt::Debug for DispatchTable<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchTable")
            .field("registered", &self.len())
            .finish()
    }
}
