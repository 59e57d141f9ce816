//! ALU arithmetic operations.
//!
//! Registers are one byte wide, so every result wraps modulo 256. Overflow is
//! never signalled.

use crate::isa::instruction::Opcode;

/// Executes an arithmetic operation on two register values.
///
/// # Returns
///
/// The wrapped 8-bit result, or `None` if `op` is not arithmetic.
pub fn execute(op: Opcode, a: u8, b: u8) -> Option<u8> {
    match op {
        Opcode::Add => Some(a.wrapping_add(b)),
        Opcode::Mul => Some(a.wrapping_mul(b)),
        _ => None,
    }
}
