//! Common utilities and types used throughout the emulator.
//!
//! This module provides the building blocks shared by every other component:
//! 1. **Constants:** Memory size, register count, and stack pointer conventions.
//! 2. **Error Handling:** Load-time and execution-time error types.
//! 3. **Register Management:** The eight byte-wide general-purpose registers.

/// Common constants used throughout the emulator.
pub mod constants;

/// Error types for loading and execution.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{INITIAL_SP, MEMORY_SIZE, NUM_REGISTERS, REG_SP};
pub use error::{CpuError, LoadError};
pub use reg::RegisterFile;
