use ls8_core::Simulator;
use ls8_core::common::CpuError;
use ls8_core::config::{Config, UnknownOpcodePolicy};
use ls8_core::core::Cpu;
use ls8_core::core::arch::state::CpuState;
use ls8_core::isa::Instruction;
use ls8_core::soc::BufferConsole;
use tracing_subscriber::EnvFilter;

use super::builder::program::assemble;

/// Cycle budget for `run_bounded`; far more than any test program needs.
pub const MAX_CYCLES: u64 = 10_000;

pub struct TestContext {
    pub sim: Simulator<BufferConsole>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        Self {
            sim: Simulator::new(config, BufferConsole::new()),
        }
    }

    /// A context whose CPU faults on unknown opcodes instead of spinning.
    pub fn faulting() -> Self {
        let mut config = Config::default();
        config.general.unknown_opcode = UnknownOpcodePolicy::Fault;
        Self::with_config(&config)
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    /// Assemble `program` and load it at address 0.
    pub fn load_program(mut self, program: &[Instruction]) -> Self {
        self.sim.load_image(&assemble(program)).unwrap();
        self
    }

    /// Load raw bytes at address 0.
    pub fn load_bytes(mut self, image: &[u8]) -> Self {
        self.sim.load_image(image).unwrap();
        self
    }

    pub fn set_reg(&mut self, reg: usize, val: u8) {
        self.sim.cpu.regs.write(reg, val);
    }

    pub fn get_reg(&self, reg: usize) -> u8 {
        self.sim.cpu.regs.read(reg)
    }

    pub fn pc(&self) -> u8 {
        self.sim.cpu.pc
    }

    pub fn state(&self) -> CpuState {
        self.sim.cpu.state
    }

    /// Execute one instruction.
    pub fn step(&mut self) -> Result<CpuState, CpuError> {
        self.sim.tick()
    }

    /// Execute `n` instructions, panicking on error.
    pub fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            self.step().unwrap();
        }
    }

    /// Run to completion but give up after `MAX_CYCLES`.
    pub fn run_bounded(&mut self) -> Result<CpuState, CpuError> {
        self.sim.run_for(MAX_CYCLES)
    }

    /// Everything printed so far.
    pub fn output(&self) -> &[u8] {
        self.sim.console.values()
    }
}
