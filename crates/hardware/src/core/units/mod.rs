//! Functional units used by the execution engine.

/// Arithmetic Logic Unit (add, multiply).
pub mod alu;
