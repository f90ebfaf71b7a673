//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the single entry point for register-to-register arithmetic.
//! Every arithmetic instruction names its operation with an [`AluOp`] and goes through
//! [`Alu::execute`], so new operations only need a variant and an arm here.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Mul

/// Byte-wide arithmetic operations (add, multiply).
pub mod arithmetic;

use std::fmt;

use crate::common::error::UnsupportedOperationError;
use crate::isa::instruction::Opcode;

/// Operation selector for the ALU.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping multiplication.
    Mul,
}

impl AluOp {
    /// Mnemonic of the instruction that performs this operation.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Mul => "MUL",
        }
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<Opcode> for AluOp {
    type Error = UnsupportedOperationError;

    fn try_from(op: Opcode) -> Result<Self, Self::Error> {
        match op {
            Opcode::Add => Ok(Self::Add),
            Opcode::Mul => Ok(Self::Mul),
            other => Err(UnsupportedOperationError {
                opcode: other.byte(),
            }),
        }
    }
}

/// Arithmetic Logic Unit for byte-wide register operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation on two register values.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation to perform.
    /// * `a`  - Value of the destination register.
    /// * `b`  - Value of the source register.
    ///
    /// # Returns
    ///
    /// The result modulo 256.
    ///
    /// # Examples
    ///
    /// ```
    /// use vcpu8_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 255, 1), 0);
    /// assert_eq!(Alu::execute(AluOp::Mul, 255, 2), 254);
    /// assert_eq!(Alu::execute(AluOp::Mul, 8, 9), 72);
    /// ```
    pub fn execute(op: AluOp, a: u8, b: u8) -> u8 {
        match op {
            AluOp::Add | AluOp::Mul => arithmetic::execute(op, a, b),
        }
    }
}
