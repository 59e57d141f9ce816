//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire machine state. It coordinates the following:
//! 1. **State Management:** Maintains registers, flags, program counter, and run state.
//! 2. **Memory:** Owns the 256-byte memory holding code, data, and stack.
//! 3. **Observability:** Instruction tracing and statistics.

/// Instruction execution and the fetch-decode-execute loop.
pub mod execution;

/// Instruction fetch and stack access.
pub mod memory;

/// Per-cycle trace output.
pub mod trace;

/// Unknown-opcode and fault handling.
pub mod trap;

use crate::common::RegisterFile;
use crate::common::constants::RESET_VECTOR;
use crate::config::{Config, UnknownOpcodePolicy};
use crate::core::arch::flags::Flags;
use crate::core::arch::state::CpuState;
use crate::soc::memory::Memory;
use crate::stats::SimStats;

/// Main CPU structure containing all machine state.
///
/// One `Cpu` is one machine: nothing in it is shared, and all mutation goes
/// through `&mut self`.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose registers; `R7` is the stack pointer.
    pub regs: RegisterFile,
    /// Condition flags written by `CMP`.
    pub flags: Flags,
    /// Program Counter.
    pub pc: u8,
    /// Run state.
    pub state: CpuState,
    /// Main memory.
    pub memory: Memory,

    /// Print a trace line before every instruction.
    pub trace: bool,
    /// What to do when the byte at PC is not an opcode.
    pub unknown_opcode: UnknownOpcodePolicy,
    /// Execution statistics.
    pub stats: SimStats,
    /// Last PC an unknown opcode was reported at (avoid repeating the warning every cycle).
    pub last_unknown_pc: Option<u8>,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Cpu {
    /// Creates a new CPU in its reset state.
    ///
    /// Memory and `R0`-`R6` are zeroed, the stack pointer comes from the
    /// configuration, flags are clear, and the PC is 0.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(config.general.initial_sp),
            flags: Flags::new(),
            pc: RESET_VECTOR,
            state: CpuState::Running,
            memory: Memory::new(),
            trace: config.general.trace_instructions,
            unknown_opcode: config.general.unknown_opcode,
            stats: SimStats::default(),
            last_unknown_pc: None,
        }
    }

    /// True once the CPU has halted or faulted.
    pub fn is_stopped(&self) -> bool {
        self.state.is_terminal()
    }

    /// Dumps the current CPU state (PC, flags, and registers) to stdout.
    pub fn dump_state(&self) {
        println!("PC = {:#04x}  state = {}", self.pc, self.state);
        println!(
            "FL = E:{} L:{} G:{}",
            u8::from(self.flags.is_equal()),
            u8::from(self.flags.is_less()),
            u8::from(self.flags.is_greater())
        );
        self.regs.dump();
    }
}
