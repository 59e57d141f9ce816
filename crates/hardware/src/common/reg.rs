//! General-Purpose Register File.
//!
//! This module provides the `RegisterFile` struct holding the eight byte-wide
//! registers `R0`-`R7`. It provides:
//! 1. **Storage:** Eight 8-bit registers; arithmetic on them wraps modulo 256.
//! 2. **Stack Pointer:** `R7` doubles as the stack pointer by convention.
//! 3. **Observability:** Debugging utilities for dumping register state.

use super::constants::{INITIAL_SP, NUM_REGISTERS, REG_SP};

/// General-purpose register file.
///
/// There is no separate storage for the stack pointer; it is simply `R7`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; NUM_REGISTERS],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new(INITIAL_SP)
    }
}

impl RegisterFile {
    /// Creates a register file with `R0`-`R6` zeroed and the stack pointer set to `sp`.
    pub fn new(sp: u8) -> Self {
        let mut regs = [0; NUM_REGISTERS];
        regs[REG_SP] = sp;
        Self { regs }
    }

    /// Returns the register index for an operand byte, or `None` if it names no register.
    #[inline]
    pub fn index(operand: u8) -> Option<usize> {
        let idx = operand as usize;
        (idx < NUM_REGISTERS).then_some(idx)
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not below [`NUM_REGISTERS`]; use [`RegisterFile::index`]
    /// to validate operand bytes first.
    #[inline]
    pub fn read(&self, idx: usize) -> u8 {
        self.regs[idx]
    }

    /// Writes a register.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not below [`NUM_REGISTERS`].
    #[inline]
    pub fn write(&mut self, idx: usize, val: u8) {
        self.regs[idx] = val;
    }

    /// Current stack pointer (`R7`).
    #[inline]
    pub fn sp(&self) -> u8 {
        self.regs[REG_SP]
    }

    /// Sets the stack pointer (`R7`).
    #[inline]
    pub fn set_sp(&mut self, val: u8) {
        self.regs[REG_SP] = val;
    }

    /// Returns a copy of all eight registers.
    pub fn as_array(&self) -> [u8; NUM_REGISTERS] {
        self.regs
    }

    /// Dumps the contents of all registers to stdout, four per line.
    pub fn dump(&self) {
        for i in (0..NUM_REGISTERS).step_by(4) {
            println!(
                "R{}={:#04x} R{}={:#04x} R{}={:#04x} R{}={:#04x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1],
                i + 2,
                self.regs[i + 2],
                i + 3,
                self.regs[i + 3]
            );
        }
    }
}
