//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle. It performs the following:
//! 1. **Fetch:** Reads the opcode and both operand slots at the PC.
//! 2. **Decode:** Maps the opcode byte to an [`Instruction`] via the opcode table.
//! 3. **Execute:** Dispatches to the ALU or performs register, stack, and I/O work.
//! 4. **PC update:** Advances by the instruction size unless a jump replaced the PC.

use super::Cpu;
use crate::common::error::CpuError;
use crate::common::reg::RegisterFile;
use crate::core::arch::state::CpuState;
use crate::core::units::alu::Alu;
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::Instruction;
use crate::soc::traits::Console;

impl Cpu {
    /// Executes one instruction.
    ///
    /// Stepping a CPU that has already halted or faulted does nothing and
    /// returns its state.
    ///
    /// # Returns
    ///
    /// The run state after the cycle.
    ///
    /// # Errors
    ///
    /// Any `CpuError`; the CPU is `Faulted` when this returns `Err`.
    pub fn step(&mut self, console: &mut dyn Console) -> Result<CpuState, CpuError> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        if self.trace {
            eprintln!("{}", self.trace_line());
        }

        self.stats.cycles += 1;
        let pc = self.pc;
        let inst = match decode(self.fetch()) {
            Ok(inst) => inst,
            Err(opcode) => return self.unknown_opcode(opcode, pc),
        };

        tracing::trace!(pc, inst = %disassemble(&inst), "execute");

        match self.execute(inst, console) {
            Ok(jumped) => {
                self.stats.record(inst.opcode(), jumped);
                Ok(self.state)
            }
            Err(e) => Err(self.fault(e)),
        }
    }

    /// Steps until the CPU halts.
    ///
    /// Under the default unknown-opcode policy a program that runs into a
    /// non-opcode byte never halts, and neither does this call.
    ///
    /// # Errors
    ///
    /// The first `CpuError` raised by `step`.
    pub fn run(&mut self, console: &mut dyn Console) -> Result<(), CpuError> {
        while self.step(console)? == CpuState::Running {}
        tracing::debug!(
            cycles = self.stats.cycles,
            retired = self.stats.instructions_retired,
            state = %self.state,
            "cpu stopped"
        );
        Ok(())
    }

    /// Validates a register operand.
    fn reg(&self, operand: u8) -> Result<usize, CpuError> {
        RegisterFile::index(operand).ok_or(CpuError::InvalidRegister {
            reg: operand,
            pc: self.pc,
        })
    }

    /// Executes a decoded instruction and updates the PC.
    ///
    /// # Returns
    ///
    /// `true` if the instruction replaced the PC instead of advancing it.
    fn execute(&mut self, inst: Instruction, console: &mut dyn Console) -> Result<bool, CpuError> {
        let next = self.pc.wrapping_add(inst.size());
        let mut target = None;

        match inst {
            Instruction::Hlt => self.state = CpuState::Halted,
            Instruction::Ldi { reg, imm } => {
                let r = self.reg(reg)?;
                self.regs.write(r, imm);
            }
            Instruction::Prn { reg } => {
                let r = self.reg(reg)?;
                console.emit(self.regs.read(r));
            }
            Instruction::Mul { reg_a, reg_b }
            | Instruction::Add { reg_a, reg_b }
            | Instruction::Cmp { reg_a, reg_b } => {
                let (a, b) = (self.reg(reg_a)?, self.reg(reg_b)?);
                Alu::apply(inst.opcode(), a, b, &mut self.regs, &mut self.flags)?;
            }
            Instruction::Jmp { reg } => {
                target = Some(self.regs.read(self.reg(reg)?));
            }
            // The target register is only read when the branch is taken.
            Instruction::Jeq { reg } => {
                if self.flags.is_equal() {
                    target = Some(self.regs.read(self.reg(reg)?));
                }
            }
            Instruction::Jne { reg } => {
                if !self.flags.is_equal() {
                    target = Some(self.regs.read(self.reg(reg)?));
                }
            }
            Instruction::Push { reg } => {
                let r = self.reg(reg)?;
                self.push_reg(r);
            }
            Instruction::Pop { reg } => {
                let r = self.reg(reg)?;
                self.pop_reg(r);
            }
        }

        self.pc = target.unwrap_or(next);
        Ok(target.is_some())
    }
}
