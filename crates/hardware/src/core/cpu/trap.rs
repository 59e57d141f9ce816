//! Unknown-Opcode and Fault Handling.
//!
//! This module decides what happens when a cycle cannot complete normally:
//! 1. **Unknown opcodes:** Spin in place or fault, per `UnknownOpcodePolicy`.
//! 2. **Faults:** Any execution error moves the CPU to `Faulted`.

use super::Cpu;
use crate::common::error::CpuError;
use crate::config::UnknownOpcodePolicy;
use crate::core::arch::state::CpuState;

impl Cpu {
    /// Handles a fetched byte that is not an opcode.
    ///
    /// Under `Spin` the PC is left where it is and the CPU keeps running, so
    /// the next cycle fetches the same byte again. The warning is logged once
    /// per PC rather than every cycle.
    ///
    /// # Errors
    ///
    /// Returns `CpuError::UnknownOpcode` under `Fault`.
    pub(crate) fn unknown_opcode(&mut self, opcode: u8, pc: u8) -> Result<CpuState, CpuError> {
        self.stats.unknown_opcode_cycles += 1;
        match self.unknown_opcode {
            UnknownOpcodePolicy::Spin => {
                if self.last_unknown_pc != Some(pc) {
                    tracing::warn!(pc, opcode, "unknown instruction");
                    self.last_unknown_pc = Some(pc);
                }
                Ok(self.state)
            }
            UnknownOpcodePolicy::Fault => Err(self.fault(CpuError::UnknownOpcode { opcode, pc })),
        }
    }

    /// Moves the CPU to `Faulted` and hands the error back for propagation.
    pub(crate) fn fault(&mut self, err: CpuError) -> CpuError {
        tracing::debug!(pc = self.pc, error = %err, "cpu faulted");
        self.state = CpuState::Faulted;
        err
    }
}
