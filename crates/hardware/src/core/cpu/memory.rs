//! Memory Access and Stack Primitives.
//!
//! This module implements every memory access the engine performs outside of instruction
//! fetch. It provides:
//! 1. **Host Access:** Bounds-checked `ram_read`/`ram_write`.
//! 2. **Stack Discipline:** `push` pre-decrements SP, `pop` post-increments it, both modulo 256.

use super::Cpu;
use crate::common::data::AccessType;
use crate::common::error::AddressError;
use crate::soc::OutputSink;

impl<S: OutputSink> Cpu<S> {
    /// Reads the byte at `addr`.
    ///
    /// # Errors
    ///
    /// [`AddressError`] with [`AccessType::Read`] if `addr` is 256 or more.
    pub fn ram_read(&self, addr: usize) -> Result<u8, AddressError> {
        self.ram.get(addr).copied().ok_or(AddressError {
            address: addr,
            access: AccessType::Read,
        })
    }

    /// Writes `val` to `addr`.
    ///
    /// # Errors
    ///
    /// [`AddressError`] with [`AccessType::Write`] if `addr` is 256 or more.
    pub fn ram_write(&mut self, addr: usize, val: u8) -> Result<(), AddressError> {
        let cell = self.ram.get_mut(addr).ok_or(AddressError {
            address: addr,
            access: AccessType::Write,
        })?;
        *cell = val;
        Ok(())
    }

    /// Pushes `val`: `SP = SP - 1`, then `memory[SP] = val`.
    ///
    /// # Errors
    ///
    /// Propagates [`AddressError`] from the write; SP is left unchanged in that case.
    pub fn push(&mut self, val: u8) -> Result<(), AddressError> {
        let sp = self.regs.sp().wrapping_sub(1);
        self.ram_write(usize::from(sp), val)?;
        self.regs.set_sp(sp);
        Ok(())
    }

    /// Pops a value: `val = memory[SP]`, then `SP = SP + 1`.
    ///
    /// # Errors
    ///
    /// Propagates [`AddressError`] from the read; SP is left unchanged in that case.
    pub fn pop(&mut self) -> Result<u8, AddressError> {
        let sp = self.regs.sp();
        let val = self.ram_read(usize::from(sp))?;
        self.regs.set_sp(sp.wrapping_add(1));
        Ok(val)
    }
}
