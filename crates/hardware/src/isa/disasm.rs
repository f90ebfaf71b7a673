//! Instruction Disassembler.
//!
//! Converts decoded instructions and raw program images into readable assembly for
//! debug tracing, the CLI `disasm` command, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use vcpu8_core::isa::disasm::disassemble_program;
//! let listing = disassemble_program(&[0b1000_0010, 0, 8, 0b0000_0001]);
//! assert_eq!(listing, vec!["00: LDI R0,8", "03: HLT"]);
//! ```

use super::decode::Instruction;
use super::instruction::Opcode;

/// Formats the operands of `op` given its two operand bytes.
fn operands(op: Opcode, a: u8, b: u8) -> String {
    match op {
        Opcode::Hlt | Opcode::Ret => String::new(),
        Opcode::Ldi => format!(" R{a},{b}"),
        Opcode::Mul | Opcode::Add | Opcode::Cmp => format!(" R{a},R{b}"),
        Opcode::Prn
        | Opcode::Push
        | Opcode::Pop
        | Opcode::Call
        | Opcode::Jmp
        | Opcode::Jeq
        | Opcode::Jne => format!(" R{a}"),
    }
}

/// Disassembles a decoded instruction, e.g. `"LDI R0,8"` or `"PRN R0"`.
pub fn disassemble(inst: &Instruction) -> String {
    format!(
        "{}{}",
        inst.opcode.mnemonic(),
        operands(inst.opcode, inst.operand_a, inst.operand_b)
    )
}

/// Produces a listing of a program image, one line per instruction.
///
/// Each line is prefixed with the two-digit hex address. Bytes that do not start a
/// complete instruction are listed as `.byte 0xNN` and skipped one at a time.
pub fn disassemble_program(program: &[u8]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut addr = 0;
    while addr < program.len() {
        let byte = program[addr];
        let decoded = Opcode::try_from(byte)
            .ok()
            .filter(|op| addr + op.size() <= program.len());
        match decoded {
            Some(op) => {
                let a = program.get(addr + 1).copied().unwrap_or(0);
                let b = program.get(addr + 2).copied().unwrap_or(0);
                let a = if op.size() > 1 { a } else { 0 };
                let b = if op.size() > 2 { b } else { 0 };
                lines.push(format!("{addr:02X}: {}{}", op.mnemonic(), operands(op, a, b)));
                addr += op.size();
            }
            None => {
                lines.push(format!("{addr:02X}: .byte {byte:#04x}"));
                addr += 1;
            }
        }
    }
    lines
}
