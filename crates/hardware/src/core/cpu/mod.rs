//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns the entire machine state.
//! It coordinates the following:
//! 1. **State Management:** Registers, program counter, flag register, and run state.
//! 2. **Memory:** The flat 256-byte memory space and the stack living inside it.
//! 3. **Program Loading:** Text, byte, and file programs placed from address 0.
//! 4. **Output:** The sink receiving `PRN` values and trace lines.

/// Fetch-decode-execute loop and instruction handlers.
pub mod execution;

/// Bounds-checked memory access and stack primitives.
pub mod memory;

use std::fmt;
use std::path::Path;

use crate::common::constants::{FL_EQUAL, MEMORY_SIZE};
use crate::common::error::LoadError;
use crate::common::RegisterFile;
use crate::config::Config;
use crate::sim::loader;
use crate::soc::{Console, OutputSink};
use crate::stats::SimStats;

/// Execution state of the fetch loop.
///
/// `Halted` is terminal: once reached, `step` and `run` do nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum RunState {
    /// Fetching and executing instructions.
    #[default]
    Running,
    /// Stopped by `HLT`.
    Halted,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Running => "running",
            Self::Halted => "halted",
        })
    }
}

/// Main CPU structure containing all machine state.
#[derive(Debug)]
pub struct Cpu<S = Console> {
    /// General-purpose registers; `R7` is the stack pointer.
    pub regs: RegisterFile,
    /// Flat memory, addresses `0x00`-`0xFF`.
    pub ram: [u8; MEMORY_SIZE],
    /// Program Counter.
    pub pc: usize,
    /// Flag register; only [`FL_EQUAL`] is defined.
    pub fl: u8,
    /// Whether the fetch loop is running.
    pub state: RunState,
    /// Enable instruction tracing.
    pub trace: bool,
    /// Run statistics.
    pub stats: SimStats,
    sink: S,
}

impl Cpu<Console> {
    /// Creates a CPU in its reset state that prints to the console.
    pub fn new() -> Self {
        Self::with_sink(Console)
    }
}

impl Default for Cpu<Console> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: OutputSink> Cpu<S> {
    /// Creates a CPU in its reset state that emits output to `sink`.
    ///
    /// Registers are zero except `SP = 0xF4`; PC, FL and memory are zero; the state is
    /// [`RunState::Running`].
    pub fn with_sink(sink: S) -> Self {
        Self {
            regs: RegisterFile::new(),
            ram: [0; MEMORY_SIZE],
            pc: 0,
            fl: 0,
            state: RunState::Running,
            trace: false,
            stats: SimStats::default(),
            sink,
        }
    }

    /// Creates a CPU configured from `config`.
    ///
    /// # Arguments
    ///
    /// * `config` - Run options; only `general.trace_instructions` affects the CPU itself.
    /// * `sink` - Destination for program output.
    pub fn with_config(config: &Config, sink: S) -> Self {
        let mut cpu = Self::with_sink(sink);
        cpu.trace = config.general.trace_instructions;
        cpu
    }

    /// Loads a text program into memory from address 0.
    ///
    /// # Errors
    ///
    /// [`LoadError::Malformed`] or [`LoadError::TooLarge`]. Bytes loaded before the failing
    /// line stay in memory.
    pub fn load(&mut self, source: &str) -> Result<(), LoadError> {
        let len = loader::load_source(&mut self.ram, source)?;
        tracing::debug!(bytes = len, "program loaded");
        Ok(())
    }

    /// Loads an assembled program image into memory from address 0.
    ///
    /// # Errors
    ///
    /// [`LoadError::TooLarge`] if `program` exceeds 256 bytes.
    pub fn load_bytes(&mut self, program: &[u8]) -> Result<(), LoadError> {
        let len = loader::load_bytes(&mut self.ram, program)?;
        tracing::debug!(bytes = len, "program image loaded");
        Ok(())
    }

    /// Reads a text program from disk and loads it.
    ///
    /// # Errors
    ///
    /// [`LoadError::Io`] if the file cannot be read, otherwise as [`Cpu::load`].
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let source = loader::read_program_file(path)?;
        self.load(&source)
    }

    /// Whether the most recent true `CMP` left the equal flag set.
    pub fn equal_flag(&self) -> bool {
        self.fl & FL_EQUAL != 0
    }

    /// Whether `HLT` has been executed.
    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }

    /// Shared access to the output sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Exclusive access to the output sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the CPU, returning its output sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Dumps the current CPU state (PC, FL, run state and registers) to stdout.
    pub fn dump_state(&self) {
        println!(
            "PC = {:#04x}  FL = {:#010b}  state = {}",
            self.pc, self.fl, self.state
        );
        self.regs.dump();
    }
}
