//! Memory Access Types.
//!
//! This module defines the classification of memory accesses used by the engine.
//! These types are used for the following:
//! 1. **Fault Reporting:** Telling the caller which kind of access left the address space.
//! 2. **Diagnostics:** Rendering readable address errors in the CLI.

use std::fmt;

/// Type of memory access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// Opcode fetch at the program counter.
    ///
    /// Also used when a control transfer would leave the program counter outside memory.
    Fetch,

    /// Fetch of one of the two candidate operand bytes following an opcode.
    Operand,

    /// Data read (host `ram_read` or a stack pop).
    Read,

    /// Data write (host `ram_write` or a stack push).
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fetch => "fetch",
            Self::Operand => "operand fetch",
            Self::Read => "read",
            Self::Write => "write",
        };
        f.write_str(name)
    }
}
