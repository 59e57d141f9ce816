//! Global System Constants.
//!
//! This module defines machine-wide constants. It includes:
//! 1. **Memory Constants:** Size of the flat address space.
//! 2. **Register Constants:** Register count and the stack pointer convention.

/// Number of byte cells in main memory. Addresses are 8-bit, so this is the whole space.
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 8;

/// Register index used as the stack pointer.
pub const REG_SP: usize = 7;

/// Reset value of the stack pointer.
///
/// The stack grows downward from here, leaving `0xF4..=0xFF` above it untouched.
pub const INITIAL_SP: u8 = 0xF4;

/// Address the program counter holds after reset and where programs are loaded.
pub const RESET_VECTOR: u8 = 0x00;
