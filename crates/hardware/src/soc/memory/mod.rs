//! Main Memory.
//!
//! This module implements the LS-8's single flat address space. It provides:
//! 1. **Storage:** 256 zero-initialised byte cells shared by code, data, and stack.
//! 2. **Access:** Byte reads and writes addressed by `u8`, so every address is in range.
//! 3. **Loading:** Bulk writes used by the program loader.

use crate::common::constants::MEMORY_SIZE;

/// Main memory: 256 bytes addressed `0x00..=0xFF`.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.cells.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .field("nonzero_prefix", &&self.cells[..used])
            .finish()
    }
}

impl Memory {
    /// Creates a zero-filled memory.
    pub fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Reads one byte.
    #[inline]
    pub fn read(&self, addr: u8) -> u8 {
        self.cells[addr as usize]
    }

    /// Writes one byte.
    #[inline]
    pub fn write(&mut self, addr: u8, val: u8) {
        self.cells[addr as usize] = val;
    }

    /// Copies `data` into memory starting at `offset`.
    ///
    /// Bytes that would land past `0xFF` are dropped; callers that care about
    /// truncation check the length first, as the loader does.
    pub fn write_bytes(&mut self, offset: u8, data: &[u8]) {
        let start = offset as usize;
        for (cell, byte) in self.cells[start..].iter_mut().zip(data) {
            *cell = *byte;
        }
    }

    /// Size in bytes.
    pub const fn len(&self) -> usize {
        MEMORY_SIZE
    }

    /// Always `false`; present for symmetry with `len`.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// The whole memory image.
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}
