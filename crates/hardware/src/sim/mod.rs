//! Program loading.
//!
//! Turns LS-8 program images (one binary byte per line) into memory contents.

pub mod loader;
