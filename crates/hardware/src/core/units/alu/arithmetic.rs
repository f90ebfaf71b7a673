//! ALU arithmetic operations.
//!
//! Implements byte-wide addition and multiplication. Registers are eight bits wide, so
//! every result is reduced modulo 256.

use super::AluOp;

/// Executes an arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform.
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The wrapped 8-bit result.
pub fn execute(op: AluOp, a: u8, b: u8) -> u8 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Mul => a.wrapping_mul(b),
    }
}
