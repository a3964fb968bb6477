//! System Components.
//!
//! This module organizes the components that surround the CPU core: the flat
//! main memory and the console device written by `PRN`.

/// Console device implementations.
pub mod devices;

/// Flat main memory.
pub mod memory;

/// Device trait definitions.
pub mod traits;

pub use devices::{CaptureConsole, StdoutConsole};
pub use memory::Memory;
pub use traits::Console;
