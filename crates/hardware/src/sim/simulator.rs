//! Simulator: owns both the CPU and its console side-by-side.
//!
//! Keeping the console outside `Cpu` lets the CPU borrow it mutably for each
//! step without the two fighting over `&mut self`.

use std::path::Path;

use crate::common::error::{CpuError, LoadError};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::arch::state::CpuState;
use crate::sim::loader;
use crate::soc::devices::StdoutConsole;
use crate::soc::traits::Console;

/// Top-level simulator: CPU state + the console `PRN` writes to.
#[derive(Debug)]
pub struct Simulator<C = StdoutConsole> {
    /// CPU state (registers, flags, memory, stats).
    pub cpu: Cpu,
    /// Output device.
    pub console: C,
}

impl<C: Console> Simulator<C> {
    /// Creates a new simulator with a reset CPU.
    pub fn new(config: &Config, console: C) -> Self {
        Self {
            cpu: Cpu::new(config),
            console,
        }
    }

    /// Loads a memory image at address 0.
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), LoadError> {
        loader::load_into(&mut self.cpu.memory, image)
    }

    /// Parses program text and loads it. Memory is untouched if parsing fails.
    pub fn load_source(&mut self, source: &str) -> Result<(), LoadError> {
        let image = loader::parse_program(source)?;
        self.load_image(&image)
    }

    /// Reads, parses, and loads a program file.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let image = loader::load_program_file(path)?;
        self.load_image(&image)
    }

    /// Advances the simulator by one instruction.
    pub fn tick(&mut self) -> Result<CpuState, CpuError> {
        self.cpu.step(&mut self.console)
    }

    /// Runs until the CPU halts.
    pub fn run(&mut self) -> Result<(), CpuError> {
        self.cpu.run(&mut self.console)
    }

    /// Runs for at most `max_cycles` cycles and returns the state reached.
    ///
    /// Useful for embedders that cannot afford the unbounded spin on an
    /// unknown opcode.
    pub fn run_for(&mut self, max_cycles: u64) -> Result<CpuState, CpuError> {
        for _ in 0..max_cycles {
            if self.tick()?.is_terminal() {
                break;
            }
        }
        Ok(self.cpu.state)
    }
}
