//! Instruction Disassembler for the LS-8.
//!
//! Converts decoded instructions, or raw memory images, into human-readable
//! text for debug tracing, logging, and the `ls8 disasm` command.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::Instruction;
//! use ls8_core::isa::disasm::disassemble;
//! let text = disassemble(&Instruction::Ldi { reg: 0, imm: 8 });
//! assert_eq!(text, "LDI R0, 8");
//! ```

use super::decode::{FETCH_WIDTH, decode};
use super::instruction::Instruction;

/// Formats a register operand.
#[inline]
fn reg(idx: u8) -> String {
    format!("R{idx}")
}

/// Disassembles a decoded instruction.
///
/// Register operands print as `R<n>`, immediates in decimal.
pub fn disassemble(inst: &Instruction) -> String {
    let name = inst.opcode().mnemonic();
    match *inst {
        Instruction::Hlt => name.to_string(),
        Instruction::Ldi { reg: r, imm } => format!("{name} {}, {imm}", reg(r)),
        Instruction::Mul { reg_a, reg_b }
        | Instruction::Add { reg_a, reg_b }
        | Instruction::Cmp { reg_a, reg_b } => format!("{name} {}, {}", reg(reg_a), reg(reg_b)),
        Instruction::Prn { reg: r }
        | Instruction::Jmp { reg: r }
        | Instruction::Jeq { reg: r }
        | Instruction::Jne { reg: r }
        | Instruction::Push { reg: r }
        | Instruction::Pop { reg: r } => format!("{name} {}", reg(r)),
    }
}

/// Disassembles the instruction encoded by `bytes`.
///
/// Returns `"unknown 0b........"` for bytes that are not an opcode.
pub fn disassemble_bytes(bytes: [u8; FETCH_WIDTH]) -> String {
    match decode(bytes) {
        Ok(inst) => disassemble(&inst),
        Err(byte) => format!("unknown {byte:#010b}"),
    }
}

/// One line of a linear-sweep listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    /// Address of the first byte.
    pub addr: u8,
    /// The bytes this line covers.
    pub bytes: Vec<u8>,
    /// Disassembled text, or a `.byte` directive for data.
    pub text: String,
}

/// Disassembles a whole image by linear sweep from address 0.
///
/// Bytes that do not decode are listed as `.byte` and the sweep resumes at the
/// next address. Operand bytes missing past the end of `image` read as zero,
/// as they would from freshly reset memory.
pub fn disassemble_image(image: &[u8]) -> Vec<Listing> {
    let mut out = Vec::new();
    let mut addr = 0usize;
    while addr < image.len() {
        let at = |i: usize| image.get(addr + i).copied().unwrap_or(0);
        let fetched = [at(0), at(1), at(2)];
        let (len, text) = match decode(fetched) {
            Ok(inst) => (inst.size() as usize, disassemble(&inst)),
            Err(byte) => (1, format!(".byte {byte:#04x}")),
        };
        let end = (addr + len).min(image.len());
        out.push(Listing {
            addr: addr as u8,
            bytes: image[addr..end].to_vec(),
            text,
        });
        addr += len;
    }
    out
}
