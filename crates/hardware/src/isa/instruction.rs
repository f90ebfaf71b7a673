//! Opcode layout and the closed instruction set.
//!
//! Provides bit extraction for the opcode byte and the `Opcode` enum covering every
//! instruction the machine understands.

use std::fmt;

use super::opcodes;

/// Shift of the operand-count field (bits 7-6).
pub const OPERAND_COUNT_SHIFT: u8 = 6;
/// Bit marking arithmetic and compare instructions (bit 5).
pub const ALU_BIT: u8 = 1 << 5;
/// Bit marking instructions that set PC themselves (bit 4).
pub const SETS_PC_BIT: u8 = 1 << 4;

/// Trait for extracting layout fields from a raw opcode byte.
///
/// These fields are meaningful for any byte, including ones that decode to no instruction.
pub trait OpcodeBits {
    /// Number of operand bytes the instruction declares (0-3).
    fn operand_count(&self) -> usize;

    /// Total instruction length in bytes: the opcode plus its operands.
    fn instruction_len(&self) -> usize;

    /// Whether the handler owns PC, so the engine must not auto-advance it.
    fn sets_pc(&self) -> bool;

    /// Whether the instruction belongs to the arithmetic/compare group.
    fn is_alu(&self) -> bool;
}

impl OpcodeBits for u8 {
    #[inline(always)]
    fn operand_count(&self) -> usize {
        usize::from(self >> OPERAND_COUNT_SHIFT)
    }

    #[inline(always)]
    fn instruction_len(&self) -> usize {
        self.operand_count() + 1
    }

    #[inline(always)]
    fn sets_pc(&self) -> bool {
        self & SETS_PC_BIT != 0
    }

    #[inline(always)]
    fn is_alu(&self) -> bool {
        self & ALU_BIT != 0
    }
}

/// Every instruction of the ISA.
///
/// The discriminant is the opcode byte, so `op as u8` yields the encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Opcode {
    /// Halt.
    Hlt = opcodes::HLT,
    /// `reg[a] = b`.
    Ldi = opcodes::LDI,
    /// Print `reg[a]`.
    Prn = opcodes::PRN,
    /// `reg[a] = reg[a] * reg[b]`.
    Mul = opcodes::MUL,
    /// `reg[a] = reg[a] + reg[b]`.
    Add = opcodes::ADD,
    /// Push `reg[a]`.
    Push = opcodes::PUSH,
    /// Pop into `reg[a]`.
    Pop = opcodes::POP,
    /// Push the return address and jump to `reg[a]`.
    Call = opcodes::CALL,
    /// Pop PC.
    Ret = opcodes::RET,
    /// Set the equal flag if `reg[a] == reg[b]`.
    Cmp = opcodes::CMP,
    /// Jump to `reg[a]`.
    Jmp = opcodes::JMP,
    /// Jump to `reg[a]` if the equal flag is set.
    Jeq = opcodes::JEQ,
    /// Jump to `reg[a]` if the equal flag is clear.
    Jne = opcodes::JNE,
}

impl Opcode {
    /// All instructions, in opcode-table order.
    pub const ALL: [Self; 13] = [
        Self::Hlt,
        Self::Ldi,
        Self::Prn,
        Self::Mul,
        Self::Add,
        Self::Push,
        Self::Pop,
        Self::Call,
        Self::Ret,
        Self::Cmp,
        Self::Jmp,
        Self::Jeq,
        Self::Jne,
    ];

    /// The raw opcode byte.
    #[inline]
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Upper-case assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Hlt => "HLT",
            Self::Ldi => "LDI",
            Self::Prn => "PRN",
            Self::Mul => "MUL",
            Self::Add => "ADD",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Call => "CALL",
            Self::Ret => "RET",
            Self::Cmp => "CMP",
            Self::Jmp => "JMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
        }
    }

    /// How many leading operands name a register (LDI's second operand is an immediate).
    pub const fn register_operands(self) -> usize {
        match self {
            Self::Hlt | Self::Ret => 0,
            Self::Ldi
            | Self::Prn
            | Self::Push
            | Self::Pop
            | Self::Call
            | Self::Jmp
            | Self::Jeq
            | Self::Jne => 1,
            Self::Mul | Self::Add | Self::Cmp => 2,
        }
    }

    /// Instruction length in bytes, derived from the opcode layout.
    #[inline]
    pub fn size(self) -> usize {
        self.byte().instruction_len()
    }

    /// Whether the handler owns PC.
    #[inline]
    pub fn sets_pc(self) -> bool {
        self.byte().sets_pc()
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        let op = match byte {
            opcodes::HLT => Self::Hlt,
            opcodes::LDI => Self::Ldi,
            opcodes::PRN => Self::Prn,
            opcodes::MUL => Self::Mul,
            opcodes::ADD => Self::Add,
            opcodes::PUSH => Self::Push,
            opcodes::POP => Self::Pop,
            opcodes::CALL => Self::Call,
            opcodes::RET => Self::Ret,
            opcodes::CMP => Self::Cmp,
            opcodes::JMP => Self::Jmp,
            opcodes::JEQ => Self::Jeq,
            opcodes::JNE => Self::Jne,
            other => return Err(other),
        };
        Ok(op)
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> Self {
        op.byte()
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
