//! Console device implementations.
//!
//! 1. **`StdoutConsole`:** Writes values to the process's standard output.
//! 2. **`CaptureConsole`:** Records values in memory for embedding and tests.

/// Standard-output and in-memory console sinks.
pub mod console;

pub use console::{CaptureConsole, StdoutConsole};
