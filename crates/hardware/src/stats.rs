//! Execution statistics collection and reporting.
//!
//! This module tracks what a run did. It provides:
//! 1. **Retirement:** Instructions retired and host execution time.
//! 2. **Instruction mix:** Counts by category (ALU, stack, branch, I/O, other).
//! 3. **Branches:** Taken and not-taken conditional/unconditional jumps.
//! 4. **Stack:** The deepest the stack grew below its base.

use std::time::{Duration, Instant};

use crate::isa::InstructionBits;
use crate::isa::opcodes;

/// Execution statistics for one run.
#[derive(Debug, Clone, Default)]
pub struct SimStats {
    start_time: Option<Instant>,
    elapsed: Duration,

    /// Number of instructions that completed.
    pub instructions_retired: u64,

    /// ALU instructions retired (ADD, MUL, CMP).
    pub inst_alu: u64,
    /// Stack instructions retired (PUSH, POP).
    pub inst_stack: u64,
    /// Control-transfer instructions retired (JMP, JEQ, JNE).
    pub inst_branch: u64,
    /// Output instructions retired (PRN).
    pub inst_io: u64,
    /// Everything else (LDI, HLT).
    pub inst_other: u64,

    /// Jumps that changed the PC.
    pub branches_taken: u64,
    /// Conditional jumps that fell through.
    pub branches_not_taken: u64,

    /// Largest distance SP moved below the stack base.
    pub max_stack_depth: u8,
}

impl SimStats {
    /// Marks the start of a run.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Marks the end of a run, accumulating elapsed host time.
    pub fn stop(&mut self) {
        if let Some(start) = self.start_time.take() {
            self.elapsed += start.elapsed();
        }
    }

    /// Host time spent inside `run`.
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Records a retired instruction.
    pub fn record(&mut self, ir: u8) {
        self.instructions_retired += 1;
        match ir {
            opcodes::PUSH | opcodes::POP => self.inst_stack += 1,
            opcodes::PRN => self.inst_io += 1,
            _ if ir.is_alu() => self.inst_alu += 1,
            _ if ir.sets_pc() => self.inst_branch += 1,
            _ => self.inst_other += 1,
        }
    }

    /// Records the outcome of a jump.
    pub const fn record_branch(&mut self, taken: bool) {
        if taken {
            self.branches_taken += 1;
        } else {
            self.branches_not_taken += 1;
        }
    }

    /// Records the stack pointer after a push.
    pub fn record_stack_depth(&mut self, base: u8, sp: u8) {
        let depth = base.saturating_sub(sp);
        self.max_stack_depth = self.max_stack_depth.max(depth);
    }

    /// Prints a summary to stderr.
    pub fn print(&self) {
        let secs = self.elapsed.as_secs_f64();
        #[allow(clippy::cast_precision_loss)]
        let ips = if secs > 0.0 {
            self.instructions_retired as f64 / secs
        } else {
            0.0
        };

        eprintln!("==== LS-8 statistics ====");
        eprintln!("  instructions retired  {}", self.instructions_retired);
        eprintln!("  host time             {secs:.6}s ({ips:.0} inst/s)");
        eprintln!(
            "  mix                   alu={} stack={} branch={} io={} other={}",
            self.inst_alu, self.inst_stack, self.inst_branch, self.inst_io, self.inst_other
        );
        eprintln!(
            "  branches              taken={} not-taken={}",
            self.branches_taken, self.branches_not_taken
        );
        eprintln!("  max stack depth       {}", self.max_stack_depth);
    }
}
