//! Console sinks.

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::soc::traits::Console;

/// Console that writes each value on its own line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl StdoutConsole {
    /// Creates a new stdout console.
    pub const fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn print_value(&mut self, value: u8) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{value}")
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().lock().flush()
    }
}

/// Console that records every printed value.
#[derive(Debug, Default, Clone)]
pub struct CaptureConsole {
    values: Vec<u8>,
}

impl CaptureConsole {
    /// Creates an empty capture console.
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Returns the printed values in order.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Returns the output exactly as `StdoutConsole` would have written it.
    pub fn output(&self) -> String {
        self.values.iter().fold(String::new(), |mut out, v| {
            let _ = writeln!(out, "{v}");
            out
        })
    }

    /// Discards all recorded values.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl Console for CaptureConsole {
    fn print_value(&mut self, value: u8) -> io::Result<()> {
        self.values.push(value);
        Ok(())
    }
}
