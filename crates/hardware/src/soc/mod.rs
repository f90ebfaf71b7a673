//! Host-facing I/O.
//!
//! This module organizes where a running program's output goes: the `OutputSink` trait
//! and the console and buffer sinks shipped with the crate.

/// Console and buffering sink implementations.
pub mod console;

/// Output sink trait definition.
pub mod traits;

pub use console::{BufferSink, Console};
pub use traits::OutputSink;
