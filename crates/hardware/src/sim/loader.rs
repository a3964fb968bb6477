//! Program Loader.
//!
//! This module reads LS-8 program images. It performs:
//! 1. **Parsing:** One instruction byte per line, written in base 2 (e.g. `10000010`).
//! 2. **Comments:** Everything after `#` is ignored; blank and comment-only lines are skipped.
//! 3. **Validation:** Malformed tokens and oversized programs are rejected before anything runs.
//!
//! # Examples
//!
//! ```
//! use ls8_core::sim::loader;
//!
//! let source = "\
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//!
//! 00000001 # HLT
//! ";
//! let image = loader::parse_program(source).unwrap();
//! assert_eq!(image, vec![0b1000_0010, 0, 8, 1]);
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::common::{LoadError, MEMORY_SIZE};
use crate::core::Cpu;
use crate::soc::Console;

/// Comment delimiter in program images.
const COMMENT: char = '#';

/// Parses a program image held in memory.
///
/// # Errors
///
/// * [`LoadError::Malformed`] for a line that is not an 8-bit binary number.
/// * [`LoadError::ProgramTooLarge`] if the program exceeds memory.
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut image = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        push_line(&mut image, idx + 1, line)?;
    }
    check_size(image)
}

/// Parses a program image from a reader, line by line.
///
/// # Errors
///
/// As [`parse_program`], plus [`LoadError::Io`] if reading fails.
pub fn read_program<R: BufRead>(reader: R) -> Result<Vec<u8>, LoadError> {
    let mut image = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        push_line(&mut image, idx + 1, &line?)?;
    }
    check_size(image)
}

/// Reads and parses a program image file.
///
/// # Errors
///
/// * [`LoadError::NotFound`] if `path` does not exist.
/// * [`LoadError::Io`] for any other read failure.
/// * Parse errors as for [`parse_program`].
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io(e),
    })?;
    let image = read_program(BufReader::new(file))?;
    tracing::debug!(path = %path.display(), bytes = image.len(), "program parsed");
    Ok(image)
}

/// Reads a program file straight into a CPU's memory.
///
/// # Errors
///
/// As [`load_file`].
pub fn load_into<C: Console>(cpu: &mut Cpu<C>, path: impl AsRef<Path>) -> Result<(), LoadError> {
    let image = load_file(path)?;
    cpu.load(&image)
}

fn push_line(image: &mut Vec<u8>, line_no: usize, line: &str) -> Result<(), LoadError> {
    let token = line.split(COMMENT).next().unwrap_or_default().trim();
    if token.is_empty() {
        return Ok(());
    }
    let byte = parse_byte(token).ok_or_else(|| LoadError::Malformed {
        line: line_no,
        token: token.to_string(),
    })?;
    image.push(byte);
    Ok(())
}

fn check_size(image: Vec<u8>) -> Result<Vec<u8>, LoadError> {
    if image.len() > MEMORY_SIZE {
        return Err(LoadError::ProgramTooLarge {
            len: image.len(),
            capacity: MEMORY_SIZE,
        });
    }
    Ok(image)
}

fn parse_byte(token: &str) -> Option<u8> {
    if !token.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    u8::from_str_radix(token, 2).ok()
}
