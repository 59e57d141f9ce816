//! Load and Execution Error definitions.
//!
//! This module defines the error handling for the emulator. It provides:
//! 1. **Load Errors:** Malformed program text, oversized images, and I/O failures.
//! 2. **CPU Errors:** Conditions that abort a run and leave the CPU faulted.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::isa::instruction::Opcode;

/// Errors raised while turning program text into a memory image.
///
/// Any of these aborts the load before a single instruction executes.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A meaningful line did not start with a base-2 literal.
    #[error("line {line}: `{token}` is not a binary literal")]
    MalformedToken {
        /// 1-based line number in the source text.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// The image does not fit in memory.
    #[error("program is {len} bytes but memory holds only {capacity}")]
    ProgramTooLarge {
        /// Number of bytes in the image.
        len: usize,
        /// Memory capacity in bytes.
        capacity: usize,
    },

    /// The program file could not be read.
    #[error("could not read program '{}': {source}", path.display())]
    Io {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Errors that stop the fetch-decode-execute loop.
///
/// When `step` returns one of these the CPU has already moved to
/// [`CpuState::Faulted`](crate::core::arch::state::CpuState::Faulted).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CpuError {
    /// The ALU was handed an opcode it does not implement.
    ///
    /// This is a dispatch bug in the engine, not a property of the program.
    #[error("unsupported ALU operation {0}")]
    UnsupportedAluOperation(Opcode),

    /// An operand named a register outside `R0..=R7`.
    #[error("invalid register R{reg} at pc {pc:#04x}")]
    InvalidRegister {
        /// Operand byte that was used as a register index.
        reg: u8,
        /// Address of the faulting instruction.
        pc: u8,
    },

    /// The byte at PC is not an opcode. Only raised under the `fault` policy.
    #[error("unknown opcode {opcode:#010b} at pc {pc:#04x}")]
    UnknownOpcode {
        /// The byte that failed to decode.
        opcode: u8,
        /// Address it was fetched from.
        pc: u8,
    },
}
