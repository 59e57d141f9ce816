//! Device trait for CPU output.
//!
//! This module defines the `Console` trait implemented by anything that can
//! receive `PRN` output. The engine calls `emit` once per `PRN`, in execution
//! order, with the raw register value; formatting is left to the implementor.

/// Sink for values printed by the `PRN` instruction.
pub trait Console {
    /// Receives one printed register value.
    fn emit(&mut self, value: u8);
}
