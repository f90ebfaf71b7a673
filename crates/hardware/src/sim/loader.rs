//! Program Loader.
//!
//! This module turns program sources into bytes placed at sequential addresses from 0. It performs:
//! 1. **Parsing:** Each line is blank, a `#` comment, or one 8-bit binary literal with an
//!    optional trailing comment (`10000010 # LDI R0,8`).
//! 2. **Placement:** Bytes are written in file order; a malformed line stops loading with the
//!    bytes before it already in memory.
//! 3. **File access:** Reads program sources from disk.

use std::fs;
use std::path::Path;

use crate::common::error::LoadError;

/// Marker that starts a comment running to the end of the line.
pub const COMMENT_MARKER: char = '#';

/// Longest accepted binary literal, in digits.
const MAX_LITERAL_DIGITS: usize = 8;

/// Parses one source line.
///
/// # Returns
///
/// `Ok(None)` for blank and comment-only lines, `Ok(Some(byte))` for an instruction byte.
///
/// # Errors
///
/// [`LoadError::Malformed`] if the line holds anything other than 1-8 binary digits.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<u8>, LoadError> {
    let token = line
        .split(COMMENT_MARKER)
        .next()
        .unwrap_or_default()
        .trim();
    if token.is_empty() {
        return Ok(None);
    }

    let malformed = || LoadError::Malformed {
        line: line_no,
        token: token.to_owned(),
    };
    if token.len() > MAX_LITERAL_DIGITS || !token.bytes().all(|c| c == b'0' || c == b'1') {
        return Err(malformed());
    }
    u8::from_str_radix(token, 2).map(Some).map_err(|_| malformed())
}

/// Iterates over the instruction bytes of a program source, in file order.
///
/// Line numbers in errors are 1-based.
pub fn program_bytes(source: &str) -> impl Iterator<Item = Result<u8, LoadError>> + '_ {
    source
        .lines()
        .enumerate()
        .filter_map(|(i, line)| parse_line(i + 1, line).transpose())
}

/// Parses a whole program source into bytes without placing it anywhere.
///
/// # Errors
///
/// The first [`LoadError::Malformed`] line encountered.
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadError> {
    program_bytes(source).collect()
}

/// Writes a program source into `memory` starting at address 0.
///
/// Bytes are written as they are parsed, so on error every address before the failing
/// line holds its loaded value and every address after is untouched.
///
/// # Returns
///
/// The number of bytes written.
///
/// # Errors
///
/// * [`LoadError::Malformed`] for a bad line.
/// * [`LoadError::TooLarge`] if the program needs more than `memory.len()` bytes.
pub fn load_source(memory: &mut [u8], source: &str) -> Result<usize, LoadError> {
    let mut address = 0;
    for byte in program_bytes(source) {
        let byte = byte?;
        let Some(cell) = memory.get_mut(address) else {
            return Err(LoadError::TooLarge { len: address + 1 });
        };
        *cell = byte;
        address += 1;
    }
    Ok(address)
}

/// Writes already-assembled bytes into `memory` starting at address 0.
///
/// # Errors
///
/// [`LoadError::TooLarge`] if `program` is longer than memory; the bytes that fit are
/// still written.
pub fn load_bytes(memory: &mut [u8], program: &[u8]) -> Result<usize, LoadError> {
    let n = program.len().min(memory.len());
    memory[..n].copy_from_slice(&program[..n]);
    if program.len() > memory.len() {
        return Err(LoadError::TooLarge { len: program.len() });
    }
    Ok(n)
}

/// Reads a program source file into a string.
///
/// # Errors
///
/// [`LoadError::Io`] if the file cannot be read.
pub fn read_program_file(path: impl AsRef<Path>) -> Result<String, LoadError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
