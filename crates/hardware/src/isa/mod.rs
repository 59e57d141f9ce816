//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the LS-8 opcode encodings, the decoded instruction representation,
//! decoding from memory bytes, and a disassembler.
//!
//! # Encoding
//!
//! Every instruction is one opcode byte followed by up to two operand bytes.
//! The opcode's top two bits hold its operand count, bit 5 marks ALU
//! operations, and bit 4 marks instructions that set the PC themselves.

/// Instruction decoding from raw memory bytes.
pub mod decode;

/// Instruction disassembler for debug tracing and the CLI.
pub mod disasm;

/// Opcode table and decoded instruction structures.
pub mod instruction;

/// Raw opcode byte values.
pub mod opcodes;

pub use decode::decode;
pub use instruction::{Instruction, Opcode};
