//! Core processor implementation.
//!
//! This module contains the CPU: its architectural state, the
//! fetch-decode-execute loop, and the ALU.

/// Architectural state that is not a register (condition flags, run state).
pub mod arch;

/// CPU core implementation and execution loop.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
