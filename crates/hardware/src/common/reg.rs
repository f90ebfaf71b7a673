//! General-Purpose Register File.
//!
//! This module provides the `RegisterFile` struct holding the eight byte-wide registers.
//! It provides:
//! 1. **Storage:** Eight `u8` registers, `R0`-`R7`, with `R7` doubling as the stack pointer.
//! 2. **Reset State:** All registers zero except the stack pointer, which starts at `0xF4`.
//! 3. **Observability:** Debugging utilities for dumping register state during simulation.

use super::constants::{NUM_REGS, REG_SP, SP_INIT};

/// Register file of eight byte-wide general-purpose registers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; NUM_REGS],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file in its reset state.
    ///
    /// # Returns
    ///
    /// A new `RegisterFile` with every register zero and `R7` set to [`SP_INIT`].
    pub fn new() -> Self {
        let mut regs = [0; NUM_REGS];
        regs[REG_SP] = SP_INIT;
        Self { regs }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    ///
    /// # Panics
    ///
    /// Panics if `idx` is 8 or more. The engine validates operand bytes before indexing.
    pub fn read(&self, idx: usize) -> u8 {
        self.regs[idx]
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    /// * `val` - The byte to store.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is 8 or more.
    pub fn write(&mut self, idx: usize, val: u8) {
        self.regs[idx] = val;
    }

    /// Current stack pointer (`R7`).
    pub fn sp(&self) -> u8 {
        self.regs[REG_SP]
    }

    /// Replaces the stack pointer (`R7`).
    pub fn set_sp(&mut self, val: u8) {
        self.regs[REG_SP] = val;
    }

    /// All eight registers in index order.
    pub fn as_slice(&self) -> &[u8; NUM_REGS] {
        &self.regs
    }

    /// Dumps the contents of all registers to stdout.
    ///
    /// Displays registers in pairs with hexadecimal and decimal values.
    pub fn dump(&self) {
        for i in (0..NUM_REGS).step_by(2) {
            println!(
                "R{}={:#04x} ({:>3})  R{}={:#04x} ({:>3})",
                i,
                self.regs[i],
                self.regs[i],
                i + 1,
                self.regs[i + 1],
                self.regs[i + 1]
            );
        }
    }
}
