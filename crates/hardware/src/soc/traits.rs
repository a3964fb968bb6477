//! Device trait for console output.
//!
//! This module defines the `Console` trait implemented by every output sink the CPU
//! can print to. `PRN` is the machine's only user-visible output channel, so the
//! trait is narrow: one decimal value per call.

use std::io;

/// Output sink for `PRN`.
///
/// Implementors write the decimal representation of `value` followed by a newline.
pub trait Console {
    /// Emits one register value.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the sink rejects the write.
    fn print_value(&mut self, value: u8) -> io::Result<()>;

    /// Flushes any buffered output. The default does nothing.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the flush fails.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
