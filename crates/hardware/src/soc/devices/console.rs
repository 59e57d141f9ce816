//! Console implementations.
//!
//! Provides the two consoles the emulator ships with:
//! 1. **Stdout:** Prints each value as a decimal integer on its own line.
//! 2. **Buffer:** Collects values in memory for tests and embedders.

use crate::soc::traits::Console;

/// Console that prints each value in decimal, one per line, to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn emit(&mut self, value: u8) {
        println!("{value}");
    }
}

/// Console that records every value it receives.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BufferConsole {
    values: Vec<u8>,
}

impl BufferConsole {
    /// Creates an empty buffer console.
    pub fn new() -> Self {
        Self::default()
    }

    /// Values received so far, in order.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Removes and returns everything received so far.
    pub fn take(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.values)
    }

    /// Output as stdout would have shown it: one decimal value per line.
    pub fn to_text(&self) -> String {
        self.values.iter().map(|v| format!("{v}\n")).collect()
    }
}

impl Console for BufferConsole {
    fn emit(&mut self, value: u8) {
        self.values.push(value);
    }
}
