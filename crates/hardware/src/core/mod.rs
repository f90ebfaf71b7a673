//! Core processor implementation.
//!
//! This module contains the CPU state, the execution loop, and the functional units it
//! drives.

/// CPU state, program loading, memory access, and execution.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::{Cpu, RunState};
