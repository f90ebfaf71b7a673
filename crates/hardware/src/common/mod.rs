//! Common utilities and types used throughout the virtual CPU.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the machine. It includes:
//! 1. **Constants:** Register count, memory size, stack and flag parameters.
//! 2. **Memory Access:** Classification of accesses (fetch, operand, read, write).
//! 3. **Error Handling:** Load, decode, address, and runtime error types.
//! 4. **Register Management:** The eight-register file.

/// Machine-wide constants.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types for loading and execution.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{FL_EQUAL, MEMORY_SIZE, NUM_REGS, REG_SP, SP_INIT};
pub use data::AccessType;
pub use error::{
    AddressError, ConfigError, DecodeError, LoadError, RuntimeError, UnsupportedOperationError,
};
pub use reg::RegisterFile;
