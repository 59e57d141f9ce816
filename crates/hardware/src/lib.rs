//! LS-8 register-machine emulator library.
//!
//! This crate implements a small 8-bit virtual CPU with the following:
//! 1. **Core:** Register file, condition flags, ALU, and the fetch-decode-execute loop.
//! 2. **ISA:** Opcode table, instruction decoding, and a disassembler for traces.
//! 3. **SoC:** The 256-byte memory and the console that `PRN` writes to.
//! 4. **Simulation:** Program text loader, configuration, and statistics collection.
//!
//! ```
//! use ls8_core::{Config, Simulator};
//! use ls8_core::soc::BufferConsole;
//!
//! let program = "10000010\n00000000\n00001000\n01000111\n00000000\n00000001\n";
//! let mut sim = Simulator::new(&Config::default(), BufferConsole::new());
//! sim.load_source(program).unwrap();
//! sim.run().unwrap();
//! assert_eq!(sim.console.values(), &[8]);
//! ```

/// Common types and constants (sizes, errors, register file).
pub mod common;
/// Emulator configuration (trace toggle, stack pointer, unknown-opcode policy).
pub mod config;
/// CPU core (architectural state, execution, ALU).
pub mod core;
/// Instruction set (opcodes, decode, disassembly).
pub mod isa;
/// Program loader and simulator façade.
pub mod sim;
/// Memory and console output.
pub mod soc;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; holds registers, flags, memory, and stats.
pub use crate::core::Cpu;
/// Top-level simulator owning a CPU and its console.
pub use crate::sim::simulator::Simulator;
