//! Simulation statistics collection and reporting.
//!
//! This module tracks what a run executed. It provides:
//! 1. **Throughput:** Steps retired, host time, and derived steps per second.
//! 2. **Instruction mix:** Counts per opcode and per category (ALU, stack, control, I/O).
//! 3. **Output:** Number of values the program printed.

use std::collections::BTreeMap;
use std::time::Instant;

use crate::isa::instruction::{Opcode, OpcodeBits};

/// Simulation statistics for one CPU instance.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions that completed without error.
    pub steps: u64,
    /// Number of values emitted by `PRN`.
    pub outputs: u64,
    /// Completed instructions per opcode.
    pub per_opcode: BTreeMap<Opcode, u64>,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            steps: 0,
            outputs: 0,
            per_opcode: BTreeMap::new(),
        }
    }
}

impl SimStats {
    /// Records one completed instruction.
    pub fn record(&mut self, op: Opcode) {
        self.steps += 1;
        if op == Opcode::Prn {
            self.outputs += 1;
        }
        *self.per_opcode.entry(op).or_insert(0) += 1;
    }

    /// Number of times `op` completed.
    pub fn count(&self, op: Opcode) -> u64 {
        self.per_opcode.get(&op).copied().unwrap_or(0)
    }

    /// Completed arithmetic and compare instructions.
    pub fn alu_ops(&self) -> u64 {
        self.sum(|op| op.byte().is_alu())
    }

    /// Completed instructions that set PC themselves (calls, returns, jumps).
    pub fn control_ops(&self) -> u64 {
        self.sum(|op| op.sets_pc())
    }

    /// Completed `PUSH`/`POP` instructions.
    pub fn stack_ops(&self) -> u64 {
        self.sum(|op| matches!(op, Opcode::Push | Opcode::Pop))
    }

    fn sum(&self, filter: impl Fn(Opcode) -> bool) -> u64 {
        self.per_opcode
            .iter()
            .filter(|&(&op, _)| filter(op))
            .map(|(_, n)| n)
            .sum()
    }

    /// Prints all statistics to stderr, keeping stdout for program output.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64().max(f64::EPSILON);
        let steps = self.steps.max(1) as f64;
        let pct = |n: u64| (n as f64 / steps) * 100.0;

        eprintln!("\n==========================================================");
        eprintln!("VCPU8 SIMULATION STATISTICS");
        eprintln!("==========================================================");
        eprintln!("host_seconds             {seconds:.4} s");
        eprintln!("sim_steps                {}", self.steps);
        eprintln!("sim_steps_per_sec        {:.0}", self.steps as f64 / seconds);
        eprintln!("sim_outputs              {}", self.outputs);
        eprintln!("----------------------------------------------------------");
        eprintln!("INSTRUCTION MIX");
        eprintln!("  op.alu                 {} ({:.2}%)", self.alu_ops(), pct(self.alu_ops()));
        eprintln!("  op.stack               {} ({:.2}%)", self.stack_ops(), pct(self.stack_ops()));
        eprintln!(
            "  op.control             {} ({:.2}%)",
            self.control_ops(),
            pct(self.control_ops())
        );
        eprintln!("----------------------------------------------------------");
        eprintln!("PER OPCODE");
        for (op, n) in &self.per_opcode {
            eprintln!("  {:<22} {}", op.mnemonic(), n);
        }
        eprintln!("==========================================================");
    }
}
