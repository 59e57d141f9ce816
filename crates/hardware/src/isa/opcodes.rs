//! LS-8 Opcodes.
//!
//! Defines the opcode byte of every implemented instruction, plus the field
//! layout shared by all of them.

/// Halt the CPU.
pub const HLT: u8 = 0b0000_0001;

/// Load immediate into register.
pub const LDI: u8 = 0b1000_0010;

/// Print register as a decimal integer.
pub const PRN: u8 = 0b0100_0111;

/// Multiply two registers, result in the first.
pub const MUL: u8 = 0b1010_0010;

/// Add two registers, result in the first.
pub const ADD: u8 = 0b1010_0000;

/// Compare two registers and set the flags.
pub const CMP: u8 = 0b1010_0111;

/// Jump to the address held in a register.
pub const JMP: u8 = 0b0101_0100;

/// Jump if the Equal flag is set.
pub const JEQ: u8 = 0b0101_0101;

/// Jump if the Equal flag is clear.
pub const JNE: u8 = 0b0101_0110;

/// Push register onto the stack.
pub const PUSH: u8 = 0b0100_0101;

/// Pop the top of the stack into a register.
pub const POP: u8 = 0b0100_0110;

/// Shift to extract the operand count (bits 7-6).
pub const OPERAND_COUNT_SHIFT: u32 = 6;

/// Bit marking ALU operations (bit 5).
pub const ALU_BIT: u8 = 0b0010_0000;

/// Bit marking instructions that set the PC directly (bit 4).
pub const SETS_PC_BIT: u8 = 0b0001_0000;
