//! LS-8 architectural components.
//!
//! This module contains the pieces of CPU state besides registers and memory:
//! 1. **Flags:** The Equal, Less, and Greater condition bits written by `CMP`.
//! 2. **State:** Whether the CPU is running, halted, or faulted.

/// Comparison condition flags.
pub mod flags;

/// Run state of the CPU.
pub mod state;
