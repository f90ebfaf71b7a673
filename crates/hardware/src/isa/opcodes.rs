//! Opcode Bytes.
//!
//! Raw encodings of the 13 instructions. Bits 7-6 hold the operand count, bit 5 marks
//! arithmetic/compare instructions, bit 4 marks instructions that set PC themselves, and
//! bits 3-0 identify the instruction.

/// Halt the machine.
pub const HLT: u8 = 0b0000_0001;

/// Load an immediate into a register.
pub const LDI: u8 = 0b1000_0010;

/// Print a register in decimal.
pub const PRN: u8 = 0b0100_0111;

/// Multiply two registers.
pub const MUL: u8 = 0b1010_0010;

/// Add two registers.
pub const ADD: u8 = 0b1010_0000;

/// Push a register onto the stack.
pub const PUSH: u8 = 0b0100_0101;

/// Pop the stack into a register.
pub const POP: u8 = 0b0100_0110;

/// Call the subroutine whose address is in a register.
pub const CALL: u8 = 0b0101_0000;

/// Return from a subroutine.
pub const RET: u8 = 0b0001_0001;

/// Compare two registers for equality.
pub const CMP: u8 = 0b1010_0111;

/// Jump to the address in a register.
pub const JMP: u8 = 0b0101_0100;

/// Jump if the equal flag is set.
pub const JEQ: u8 = 0b0101_0101;

/// Jump if the equal flag is clear.
pub const JNE: u8 = 0b0101_0110;
