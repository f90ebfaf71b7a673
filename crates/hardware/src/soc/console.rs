//! Built-in output sinks.
//!
//! Provides the two sinks a host normally needs:
//! 1. **Console:** Writes values to stdout and trace lines to stderr.
//! 2. **Buffer:** Records everything in order for embedding hosts and tests.

use std::io::{self, Write};

use super::traits::OutputSink;

/// Sink that prints values in decimal to stdout, one per line.
#[derive(Clone, Copy, Debug, Default)]
pub struct Console;

impl OutputSink for Console {
    fn print_value(&mut self, value: u8) {
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{value}");
        let _ = stdout.flush();
    }

    fn trace(&mut self, line: &str) {
        let _ = writeln!(io::stderr().lock(), "{line}");
    }
}

/// Sink that records printed values and trace lines in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BufferSink {
    values: Vec<u8>,
    traces: Vec<String>,
}

impl BufferSink {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Values printed so far, in execution order.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Trace lines recorded so far.
    pub fn traces(&self) -> &[String] {
        &self.traces
    }

    /// Printed values rendered exactly as the console would show them.
    pub fn rendered(&self) -> String {
        self.values.iter().map(|v| format!("{v}\n")).collect()
    }
}

impl OutputSink for BufferSink {
    fn print_value(&mut self, value: u8) {
        self.values.push(value);
    }

    fn trace(&mut self, line: &str) {
        self.traces.push(line.to_owned());
    }
}
