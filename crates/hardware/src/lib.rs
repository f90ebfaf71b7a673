//! 8-bit virtual CPU library.
//!
//! This crate implements a deterministic, byte-wide virtual machine with the following:
//! 1. **Core:** Eight registers (`R7` = stack pointer), 256 bytes of memory, PC, and a flag register.
//! 2. **ISA:** A closed 13-instruction set whose opcode byte encodes length and PC ownership.
//! 3. **Execution:** A fetch-decode-execute loop that runs until `HLT` or a fatal error.
//! 4. **Simulation:** Text program loader, output sinks, configuration, and statistics.
//!
//! ```
//! use vcpu8_core::Cpu;
//! use vcpu8_core::soc::BufferSink;
//!
//! let mut cpu = Cpu::with_sink(BufferSink::new());
//! cpu.load("10000010\n00000000\n00001000\n01000111\n00000000\n00000001\n").unwrap();
//! cpu.run().unwrap();
//! assert_eq!(cpu.sink().values(), &[8]);
//! assert!(cpu.is_halted());
//! ```

/// Common types and constants (registers, access types, errors).
pub mod common;
/// Run configuration (tracing, dumps, statistics).
pub mod config;
/// CPU core (state, execution, ALU).
pub mod core;
/// Instruction set (opcodes, decode, disassembly).
pub mod isa;
/// Program loader.
pub mod sim;
/// Output sinks.
pub mod soc;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Main CPU type; owns registers, memory, flags and the output sink.
pub use crate::core::{Cpu, RunState};
/// Error types surfaced by loading and running.
pub use crate::common::error::{LoadError, RuntimeError};
