//! Memory Access Helpers.
//!
//! This module provides the CPU's view of memory. It performs the following:
//! 1. **Fetch:** Reads the opcode and both operand slots at the PC.
//! 2. **Stack:** Pushes and pops through the stack pointer in `R7`.
//!
//! Addresses are `u8` and every offset wraps, so no access can leave the
//! 256-byte space, including operand prefetch at `0xFE` and `0xFF`.

use super::Cpu;
use crate::isa::decode::FETCH_WIDTH;

impl Cpu {
    /// Fetches the byte at PC and the two after it.
    ///
    /// Both operand slots are read whether or not the opcode uses them.
    pub fn fetch(&self) -> [u8; FETCH_WIDTH] {
        let pc = self.pc;
        [
            self.memory.read(pc),
            self.memory.read(pc.wrapping_add(1)),
            self.memory.read(pc.wrapping_add(2)),
        ]
    }

    /// Decrements the stack pointer, then stores the value of register `idx` at it.
    ///
    /// The register is read after the decrement, so `PUSH R7` stores the new
    /// stack pointer.
    pub fn push_reg(&mut self, idx: usize) {
        let sp = self.regs.sp().wrapping_sub(1);
        self.regs.set_sp(sp);
        let val = self.regs.read(idx);
        self.memory.write(sp, val);
    }

    /// Loads the byte at the stack pointer into register `idx`, then increments the stack pointer.
    ///
    /// The increment happens after the write, so `POP R7` leaves the popped
    /// value plus one in `R7`.
    pub fn pop_reg(&mut self, idx: usize) {
        let val = self.memory.read(self.regs.sp());
        self.regs.write(idx, val);
        let sp = self.regs.sp().wrapping_add(1);
        self.regs.set_sp(sp);
    }
}
