//! Error definitions.
//!
//! This module defines every failure the emulator can report. It provides:
//! 1. **Load Errors:** Missing or malformed program images.
//! 2. **Execution Errors:** Decode failures and architectural faults raised while running.
//! 3. **Configuration Errors:** Unreadable or invalid JSON configuration.
//! 4. **Exit Codes:** A stable mapping from each error class to a process exit status.
//!
//! Every error is terminal for the run; none are retried.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit status for a normal, HLT-terminated run.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status when an opcode with no registered handler is executed.
pub const EXIT_UNKNOWN_INSTRUCTION: i32 = 1;
/// Exit status when the program file does not exist.
pub const EXIT_NOT_FOUND: i32 = 2;
/// Exit status for a malformed or unreadable program image or configuration.
pub const EXIT_BAD_INPUT: i32 = 3;
/// Exit status for any other fatal runtime fault.
pub const EXIT_FAULT: i32 = 4;
/// Exit status for command-line usage errors.
pub const EXIT_USAGE: i32 = 64;

/// Errors raised while turning a program image into memory contents.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file does not exist.
    #[error("{}: not found", path.display())]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// The program source could not be read.
    #[error("failed to read program: {0}")]
    Io(#[from] io::Error),

    /// A retained line is not an 8-bit binary number.
    #[error("line {line}: malformed instruction byte {token:?}")]
    Malformed {
        /// 1-based line number in the source.
        line: usize,
        /// The offending token, comments and whitespace stripped.
        token: String,
    },

    /// The program holds more bytes than memory has cells.
    #[error("program is {len} bytes, memory holds {capacity}")]
    ProgramTooLarge {
        /// Number of instruction bytes in the program.
        len: usize,
        /// Memory capacity in bytes.
        capacity: usize,
    },
}

/// Fatal faults raised by the execution engine.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The opcode at `pc` has no entry in the dispatch table.
    #[error("unknown instruction {opcode:#010b} at pc {pc:#04x}")]
    Decode {
        /// The opcode byte that failed to decode.
        opcode: u8,
        /// Address the opcode was fetched from.
        pc: u8,
    },

    /// The ALU was asked to perform an operation it does not implement.
    #[error("unsupported ALU operation {0}")]
    UnsupportedOperation(String),

    /// An instruction named a register outside R0-R7.
    #[error("invalid register index {index} at pc {pc:#04x}")]
    InvalidRegister {
        /// The register operand that was out of range.
        index: u8,
        /// Address of the faulting instruction.
        pc: u8,
    },

    /// The operand bytes of the instruction at `pc` extend past the end of memory.
    #[error("operands of instruction at pc {pc:#04x} extend past the end of memory")]
    OperandOutOfRange {
        /// Address of the faulting instruction.
        pc: u8,
    },

    /// Advancing the program counter would move it past the end of memory.
    #[error("program counter overflow advancing from pc {pc:#04x}")]
    PcOverflow {
        /// Address of the instruction that tried to advance.
        pc: u8,
    },

    /// A push would move the stack pointer below address 0.
    #[error("stack overflow at pc {pc:#04x}")]
    StackOverflow {
        /// Address of the faulting instruction.
        pc: u8,
    },

    /// A pop would move the stack pointer past address 255.
    #[error("stack underflow at pc {pc:#04x}")]
    StackUnderflow {
        /// Address of the faulting instruction.
        pc: u8,
    },

    /// The console rejected output.
    #[error("console write failed: {0}")]
    Console(#[from] io::Error),
}

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    /// The configuration is not valid JSON for [`crate::Config`].
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Umbrella error for a complete load-and-run session.
#[derive(Debug, Error)]
pub enum SimError {
    /// Program loading failed; nothing was executed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Configuration could not be read.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Execution stopped on a fatal fault.
    #[error(transparent)]
    Exec(#[from] ExecError),
}

impl SimError {
    /// Returns the process exit status an operator sees for this error.
    ///
    /// A missing program and an unknown instruction always map to distinct codes.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Load(LoadError::NotFound { .. }) => EXIT_NOT_FOUND,
            Self::Load(_) | Self::Config(_) => EXIT_BAD_INPUT,
            Self::Exec(ExecError::Decode { .. }) => EXIT_UNKNOWN_INSTRUCTION,
            Self::Exec(_) => EXIT_FAULT,
        }
    }
}
