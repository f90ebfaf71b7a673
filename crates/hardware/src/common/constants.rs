//! Global Machine Constants.
//!
//! This module defines the fixed architectural parameters of the machine. It includes:
//! 1. **Storage Sizes:** Register count and the size of the flat memory space.
//! 2. **Stack Constants:** The stack pointer register and its reset value.
//! 3. **Flag Constants:** Bit masks for the flag register.

/// Number of general-purpose registers (`R0`-`R7`).
pub const NUM_REGS: usize = 8;

/// Size of the flat memory space in bytes (addresses `0x00`-`0xFF`).
pub const MEMORY_SIZE: usize = 256;

/// Register index reserved as the stack pointer.
pub const REG_SP: usize = 7;

/// Reset value of the stack pointer.
///
/// The stack grows downward from here; the first push writes to `0xF3`.
pub const SP_INIT: u8 = 0xF4;

/// Equality bit of the flag register, set by `CMP`.
pub const FL_EQUAL: u8 = 0b0000_0001;

/// Number of operand bytes fetched after every opcode, used or not.
pub const OPERAND_FETCH_WIDTH: usize = 2;
