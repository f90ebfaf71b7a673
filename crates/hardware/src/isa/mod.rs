//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode encodings, the opcode layout rules, decoding, and disassembly for the
//! machine's fixed 13-instruction set.
//!
//! # Opcode layout
//!
//! ```text
//!  7 6   5     4      3 2 1 0
//! +---+-----+-------+---------+
//! | n | ALU | sets  |  id     |
//! |   |     |  PC   |         |
//! +---+-----+-------+---------+
//! ```
//!
//! `n` is the operand count; an instruction occupies `n + 1` bytes.

/// Instruction decoding from memory.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Opcode layout fields and the closed `Opcode` enum.
pub mod instruction;

/// Raw opcode byte constants.
pub mod opcodes;

pub use decode::{Instruction, decode};
pub use instruction::{Opcode, OpcodeBits};
