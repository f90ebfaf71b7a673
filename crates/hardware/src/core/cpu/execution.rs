//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle of the CPU. It performs the following:
//! 1. **Fetch/Decode:** Reads the opcode and both candidate operands at PC.
//! 2. **Dispatch:** An exhaustive match over [`Opcode`] selects the instruction handler.
//! 3. **PC Advance:** Instructions without the sets-PC bit advance PC by their length.
//! 4. **Observability:** Optional per-step trace lines and `tracing` events.
//!
//! A step that fails leaves every register, memory cell, flag and PC as they were.

use super::{Cpu, RunState};
use crate::common::constants::{FL_EQUAL, NUM_REGS};
use crate::common::data::AccessType;
use crate::common::error::{AddressError, RuntimeError};
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::decode::{Instruction, decode};
use crate::isa::disasm::disassemble;
use crate::isa::instruction::Opcode;
use crate::soc::OutputSink;

impl<S: OutputSink> Cpu<S> {
    /// Executes one instruction.
    ///
    /// Does nothing once the CPU has halted.
    ///
    /// # Returns
    ///
    /// The run state after the instruction.
    ///
    /// # Errors
    ///
    /// Any [`RuntimeError`] raised while fetching, decoding or executing. The CPU state is
    /// left as it was before the step.
    pub fn step(&mut self) -> Result<RunState, RuntimeError> {
        if self.state == RunState::Halted {
            return Ok(RunState::Halted);
        }

        if self.trace {
            let line = self.trace_line();
            self.sink.trace(&line);
        }

        let inst = decode(&self.ram, self.pc)?;
        tracing::trace!(
            pc = inst.pc,
            opcode = inst.opcode.byte(),
            "{}",
            disassemble(&inst)
        );

        self.execute(&inst)?;
        if !inst.opcode.sets_pc() {
            self.pc = inst.next_pc();
        }
        self.stats.record(inst.opcode);
        Ok(self.state)
    }

    /// Runs until `HLT`.
    ///
    /// There is no step limit: a program that loops forever runs forever.
    ///
    /// # Errors
    ///
    /// The first [`RuntimeError`]; the run stops at the failing step.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        while self.state == RunState::Running {
            if let Err(err) = self.step() {
                tracing::warn!(pc = self.pc, %err, "run aborted");
                return Err(err);
            }
        }
        tracing::debug!(steps = self.stats.steps, "halted");
        Ok(())
    }

    /// Applies an ALU operation to two registers: `reg[reg_a] = reg[reg_a] OP reg[reg_b]`.
    ///
    /// # Panics
    ///
    /// Panics if either index is 8 or more. Decoded instructions are always in range.
    pub fn alu(&mut self, op: AluOp, reg_a: usize, reg_b: usize) {
        debug_assert!(reg_a < NUM_REGS && reg_b < NUM_REGS);
        let result = Alu::execute(op, self.regs.read(reg_a), self.regs.read(reg_b));
        self.regs.write(reg_a, result);
    }

    /// Dispatches a decoded instruction to its handler.
    fn execute(&mut self, inst: &Instruction) -> Result<(), RuntimeError> {
        match inst.opcode {
            Opcode::Hlt => self.state = RunState::Halted,
            Opcode::Ldi => self.regs.write(inst.reg_a(), inst.operand_b),
            Opcode::Prn => self.sink.print_value(self.regs.read(inst.reg_a())),
            Opcode::Mul | Opcode::Add => {
                let op = AluOp::try_from(inst.opcode)?;
                self.alu(op, inst.reg_a(), inst.reg_b());
            }
            Opcode::Push => self.push(self.regs.read(inst.reg_a()))?,
            Opcode::Pop => {
                let val = self.pop()?;
                self.regs.write(inst.reg_a(), val);
            }
            Opcode::Call => self.call(inst)?,
            Opcode::Ret => self.pc = usize::from(self.pop()?),
            Opcode::Cmp => {
                // Only ever sets the bit; a false compare leaves the previous result.
                if self.regs.read(inst.reg_a()) == self.regs.read(inst.reg_b()) {
                    self.fl = FL_EQUAL;
                }
            }
            Opcode::Jmp => self.jump(inst),
            Opcode::Jeq => self.branch_if(inst, self.equal_flag()),
            Opcode::Jne => self.branch_if(inst, !self.equal_flag()),
        }
        Ok(())
    }

    /// Pushes the address after the `CALL` and jumps to the target register.
    ///
    /// The target is read after the push, so `CALL R7` jumps to the decremented SP.
    fn call(&mut self, inst: &Instruction) -> Result<(), AddressError> {
        let ret = inst.next_pc();
        let ret_byte = u8::try_from(ret).map_err(|_| AddressError {
            address: ret,
            access: AccessType::Fetch,
        })?;
        self.push(ret_byte)?;
        self.jump(inst);
        Ok(())
    }

    #[inline]
    fn jump(&mut self, inst: &Instruction) {
        self.pc = usize::from(self.regs.read(inst.reg_a()));
    }

    /// Jumps when `taken`, otherwise falls through by the instruction's own length.
    #[inline]
    fn branch_if(&mut self, inst: &Instruction, taken: bool) {
        if taken {
            self.jump(inst);
        } else {
            self.pc = inst.next_pc();
        }
    }

    /// Formats the diagnostic trace line for the instruction at PC.
    ///
    /// `TRACE: PC | OP A B | R0 .. R7`, every field two upper-case hex digits. Bytes past the
    /// end of memory show as `00`.
    pub fn trace_line(&self) -> String {
        let byte = |addr: usize| self.ram.get(addr).copied().unwrap_or(0);
        let mut line = format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc,
            byte(self.pc),
            byte(self.pc + 1),
            byte(self.pc + 2)
        );
        for r in self.regs.as_slice() {
            line.push_str(&format!(" {r:02X}"));
        }
        line
    }
}
