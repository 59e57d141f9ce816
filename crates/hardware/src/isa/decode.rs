//! LS-8 Instruction Decoder.
//!
//! Turns the three bytes starting at the PC into an [`Instruction`]. The
//! engine always prefetches both operand bytes; the decoder keeps only the
//! ones the opcode actually uses.

use super::instruction::{Instruction, Opcode};

/// Number of bytes fetched per cycle: the opcode plus two operand slots.
pub const FETCH_WIDTH: usize = 3;

/// Decodes an instruction from an opcode byte and the two bytes after it.
///
/// # Returns
///
/// The decoded instruction, or the opcode byte itself if it names no instruction.
pub fn decode(bytes: [u8; FETCH_WIDTH]) -> Result<Instruction, u8> {
    let [opcode, a, b] = bytes;
    let opcode = Opcode::try_from(opcode)?;
    Ok(Instruction::from_parts(opcode, a, b))
}
