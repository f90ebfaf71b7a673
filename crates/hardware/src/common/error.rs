//! Loader and Engine Error Definitions.
//!
//! This module defines every way a program can fail to load or to execute. It provides:
//! 1. **Load Errors:** Malformed instruction literals, oversized programs, and file I/O failures.
//! 2. **Decode Errors:** Opcode bytes with no instruction and register operands outside the file.
//! 3. **Address Errors:** Any access that resolves outside the 256-byte memory space.
//! 4. **Runtime Errors:** The single terminal error a run can end with, wrapping the above.
//! 5. **Config Errors:** Unreadable or invalid JSON configuration.
//!
//! All errors are unrecoverable: the engine stops at the failing step and leaves the CPU state
//! exactly as it was before that step began.

use std::path::PathBuf;

use thiserror::Error;

use super::data::AccessType;

/// Errors raised while placing a program into memory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A source line is neither blank, a comment, nor an 8-bit binary literal.
    #[error("line {line}: malformed instruction literal {token:?}")]
    Malformed {
        /// 1-based line number in the program source.
        line: usize,
        /// The offending text with comments and surrounding whitespace removed.
        token: String,
    },

    /// The program has more bytes than the memory space can hold.
    #[error("program is {len} bytes but memory holds only 256")]
    TooLarge {
        /// Number of program bytes seen when the limit was exceeded.
        len: usize,
    },

    /// A program or configuration file could not be read.
    #[error("could not read {}: {source}", path.display())]
    Io {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while decoding the instruction at the program counter.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The opcode byte matches no instruction in the ISA.
    #[error("unknown opcode {opcode:#010b} at {pc:#04x}")]
    UnknownOpcode {
        /// The raw opcode byte.
        opcode: u8,
        /// Address the byte was fetched from.
        pc: usize,
    },

    /// A register operand names a register outside `R0`-`R7`.
    #[error("register operand {index} out of range at {pc:#04x}")]
    InvalidRegister {
        /// The raw operand byte.
        index: u8,
        /// Address of the instruction carrying the operand.
        pc: usize,
    },
}

/// A memory access resolved to an address outside `0x00`-`0xFF`.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("{access} at address {address:#x} is outside memory")]
pub struct AddressError {
    /// The out-of-range address.
    pub address: usize,
    /// Kind of access that was attempted.
    pub access: AccessType,
}

/// The ALU was asked to perform an operation it does not implement.
///
/// Only reachable if the dispatch table routes a non-arithmetic opcode to the ALU.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("opcode {opcode:#010b} is not an ALU operation")]
pub struct UnsupportedOperationError {
    /// The opcode that has no ALU counterpart.
    pub opcode: u8,
}

/// Terminal error of a run; the machine reports exactly one of these or halts cleanly.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RuntimeError {
    /// The instruction at PC could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// An access left the address space.
    #[error(transparent)]
    Address(#[from] AddressError),

    /// Internal invariant violation in ALU dispatch.
    #[error(transparent)]
    UnsupportedOperation(#[from] UnsupportedOperationError),
}

/// Errors raised while reading a JSON configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read {}: {source}", path.display())]
    Io {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The text is not a valid configuration.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
