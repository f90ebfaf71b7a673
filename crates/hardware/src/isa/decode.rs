//! Instruction Decoder.
//!
//! This module turns the bytes at PC into an [`Instruction`]. It performs:
//! 1. **Fetch:** Reads the opcode and, unconditionally, the two bytes after it.
//! 2. **Bounds Checking:** Any of those three reads past the end of memory is an address error.
//! 3. **Opcode Lookup:** Maps the byte onto the closed [`Opcode`] set.
//! 4. **Register Validation:** Rejects register operands outside `R0`-`R7` before execution.
//!
//! Decoding never mutates machine state, so a failed decode leaves the CPU untouched.

use crate::common::constants::{NUM_REGS, OPERAND_FETCH_WIDTH};
use crate::common::data::AccessType;
use crate::common::error::{AddressError, DecodeError, RuntimeError};

use super::instruction::Opcode;

/// A fully decoded instruction and the address it was fetched from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Address of the opcode byte.
    pub pc: usize,
    /// The decoded opcode.
    pub opcode: Opcode,
    /// First byte after the opcode, used or not.
    pub operand_a: u8,
    /// Second byte after the opcode, used or not.
    pub operand_b: u8,
}

impl Instruction {
    /// Length of this instruction in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.opcode.size()
    }

    /// Address of the instruction that follows this one in memory.
    #[inline]
    pub fn next_pc(&self) -> usize {
        self.pc + self.size()
    }

    /// `operand_a` as a register index. Valid once decoding has succeeded.
    #[inline]
    pub fn reg_a(&self) -> usize {
        usize::from(self.operand_a)
    }

    /// `operand_b` as a register index. Valid once decoding has succeeded.
    #[inline]
    pub fn reg_b(&self) -> usize {
        usize::from(self.operand_b)
    }
}

/// Reads one byte for the decoder, reporting `access` if `addr` is outside memory.
#[inline]
fn fetch_byte(memory: &[u8], addr: usize, access: AccessType) -> Result<u8, AddressError> {
    memory.get(addr).copied().ok_or(AddressError {
        address: addr,
        access,
    })
}

/// Fetches the raw opcode byte and both candidate operand bytes at `pc`.
///
/// # Errors
///
/// Returns an [`AddressError`] if `pc`, `pc + 1` or `pc + 2` lies outside `memory`.
pub fn fetch(memory: &[u8], pc: usize) -> Result<(u8, u8, u8), AddressError> {
    let opcode = fetch_byte(memory, pc, AccessType::Fetch)?;
    let mut operands = [0u8; OPERAND_FETCH_WIDTH];
    for (i, slot) in operands.iter_mut().enumerate() {
        *slot = fetch_byte(memory, pc + 1 + i, AccessType::Operand)?;
    }
    Ok((opcode, operands[0], operands[1]))
}

/// Decodes the instruction at `pc`.
///
/// # Arguments
///
/// * `memory` - The machine's memory.
/// * `pc` - Address of the opcode byte.
///
/// # Errors
///
/// * [`RuntimeError::Address`] if any of the three fetched bytes is outside memory.
/// * [`RuntimeError::Decode`] if the opcode is unknown or a register operand is out of range.
pub fn decode(memory: &[u8], pc: usize) -> Result<Instruction, RuntimeError> {
    let (raw, operand_a, operand_b) = fetch(memory, pc)?;
    let opcode =
        Opcode::try_from(raw).map_err(|opcode| DecodeError::UnknownOpcode { opcode, pc })?;

    for &index in [operand_a, operand_b]
        .iter()
        .take(opcode.register_operands())
    {
        if usize::from(index) >= NUM_REGS {
            return Err(DecodeError::InvalidRegister { index, pc }.into());
        }
    }

    Ok(Instruction {
        pc,
        opcode,
        operand_a,
        operand_b,
    })
}
