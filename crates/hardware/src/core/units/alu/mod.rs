//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the ALU used by `ADD`, `MUL`, and `CMP`. Operands
//! are always register indices; the ALU reads the registers itself, writes
//! arithmetic results back to the first register, and writes comparison
//! results to the flags.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Mul
//! - [`logic`]:      Cmp

/// Wrapping 8-bit arithmetic (add, multiply).
pub mod arithmetic;

/// Comparison into the condition flags.
pub mod logic;

use crate::common::error::CpuError;
use crate::common::reg::RegisterFile;
use crate::core::arch::flags::Flags;
use crate::isa::instruction::Opcode;

/// Arithmetic Logic Unit.
#[derive(Clone, Copy, Debug, Default)]
pub struct Alu;

impl Alu {
    /// Applies an ALU operation to two registers.
    ///
    /// # Arguments
    ///
    /// * `op`    - `Opcode::Add`, `Opcode::Mul`, or `Opcode::Cmp`.
    /// * `a`     - Index of the first register (destination for arithmetic).
    /// * `b`     - Index of the second register.
    /// * `regs`  - Register file to read and write.
    /// * `flags` - Flags written by `Cmp`.
    ///
    /// # Errors
    ///
    /// Returns `CpuError::UnsupportedAluOperation` for any other opcode.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::common::RegisterFile;
    /// use ls8_core::core::arch::flags::Flags;
    /// use ls8_core::core::units::alu::Alu;
    /// use ls8_core::isa::Opcode;
    ///
    /// let mut regs = RegisterFile::default();
    /// let mut flags = Flags::new();
    /// regs.write(0, 200);
    /// regs.write(1, 100);
    ///
    /// Alu::apply(Opcode::Add, 0, 1, &mut regs, &mut flags).unwrap();
    /// assert_eq!(regs.read(0), 44); // 300 wraps to 44
    ///
    /// Alu::apply(Opcode::Cmp, 0, 1, &mut regs, &mut flags).unwrap();
    /// assert!(flags.is_less());
    ///
    /// assert!(Alu::apply(Opcode::Ldi, 0, 1, &mut regs, &mut flags).is_err());
    /// ```
    pub fn apply(
        op: Opcode,
        a: usize,
        b: usize,
        regs: &mut RegisterFile,
        flags: &mut Flags,
    ) -> Result<(), CpuError> {
        let (va, vb) = (regs.read(a), regs.read(b));
        match op {
            Opcode::Add | Opcode::Mul => {
                let result = arithmetic::execute(op, va, vb)
                    .ok_or(CpuError::UnsupportedAluOperation(op))?;
                regs.write(a, result);
            }
            Opcode::Cmp => logic::compare(flags, va, vb),
            _ => return Err(CpuError::UnsupportedAluOperation(op)),
        }
        Ok(())
    }
}
