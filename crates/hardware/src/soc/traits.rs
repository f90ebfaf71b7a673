//! Output sink trait for program-visible output.
//!
//! This module defines the `OutputSink` trait implemented by everything that can receive
//! what a running program emits. It provides:
//! 1. **Program Output:** One call per executed `PRN`, in execution order.
//! 2. **Diagnostics:** Optional per-step trace lines when instruction tracing is enabled.
//!
//! Both calls happen synchronously inside the step that produces them.

/// Receiver for values printed by `PRN` and for trace lines.
pub trait OutputSink {
    /// Receives one printed register value.
    fn print_value(&mut self, value: u8);

    /// Receives one formatted trace line (no trailing newline).
    fn trace(&mut self, line: &str) {
        eprintln!("{line}");
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn print_value(&mut self, value: u8) {
        (**self).print_value(value);
    }

    fn trace(&mut self, line: &str) {
        (**self).trace(line);
    }
}
