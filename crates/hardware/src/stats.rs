//! Execution statistics collection and reporting.
//!
//! This module tracks what a run did. It provides:
//! 1. **Cycles:** Total cycles, retired instructions, and cycles lost to unknown opcodes.
//! 2. **Instruction mix:** Counts by category (ALU, load, branch, stack, I/O, system).
//! 3. **Branches:** How many conditional and unconditional jumps were taken.

use std::fmt::Write as _;
use std::time::Instant;

use crate::isa::instruction::Opcode;

/// Execution statistics.
///
/// A cycle is one trip through fetch-decode-execute. Every cycle either
/// retires exactly one instruction or spins on an unknown opcode.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total cycles elapsed.
    pub cycles: u64,
    /// Number of instructions executed to completion.
    pub instructions_retired: u64,

    /// `ADD`, `MUL`, and `CMP`.
    pub inst_alu: u64,
    /// `LDI`.
    pub inst_load: u64,
    /// `JMP`, `JEQ`, and `JNE`.
    pub inst_branch: u64,
    /// Branches that replaced the PC.
    pub branches_taken: u64,
    /// `PUSH` and `POP`.
    pub inst_stack: u64,
    /// `PRN`.
    pub inst_io: u64,
    /// `HLT`.
    pub inst_system: u64,

    /// Cycles that fetched a byte that is not an opcode.
    pub unknown_opcode_cycles: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_branch: 0,
            branches_taken: 0,
            inst_stack: 0,
            inst_io: 0,
            inst_system: 0,
            unknown_opcode_cycles: 0,
        }
    }
}

impl SimStats {
    /// Counts one retired instruction.
    ///
    /// `jumped` is whether the instruction replaced the PC.
    pub fn record(&mut self, opcode: Opcode, jumped: bool) {
        self.instructions_retired += 1;
        match opcode {
            Opcode::Add | Opcode::Mul | Opcode::Cmp => self.inst_alu += 1,
            Opcode::Ldi => self.inst_load += 1,
            Opcode::Jmp | Opcode::Jeq | Opcode::Jne => {
                self.inst_branch += 1;
                if jumped {
                    self.branches_taken += 1;
                }
            }
            Opcode::Push | Opcode::Pop => self.inst_stack += 1,
            Opcode::Prn => self.inst_io += 1,
            Opcode::Hlt => self.inst_system += 1,
        }
    }

    /// Renders the statistics report.
    pub fn report(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / instr) * 100.0;

        let mut out = String::new();
        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "LS-8 EXECUTION STATISTICS");
        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "host_seconds             {seconds:.4} s");
        let _ = writeln!(out, "sim_cycles               {}", self.cycles);
        let _ = writeln!(out, "sim_insts                {}", self.instructions_retired);
        let _ = writeln!(out, "unknown_opcode_cycles    {}", self.unknown_opcode_cycles);
        let _ = writeln!(out, "----------------------------------------------------------");
        let _ = writeln!(out, "INSTRUCTION MIX");
        for (name, n) in [
            ("alu", self.inst_alu),
            ("load", self.inst_load),
            ("branch", self.inst_branch),
            ("stack", self.inst_stack),
            ("io", self.inst_io),
            ("system", self.inst_system),
        ] {
            let _ = writeln!(out, "  op.{name:<19} {n} ({:.2}%)", pct(n));
        }
        let _ = writeln!(out, "  branch.taken           {}", self.branches_taken);
        let _ = writeln!(out, "==========================================================");
        out
    }

    /// Prints the report to stderr, keeping stdout for program output.
    pub fn print(&self) {
        eprint!("{}", self.report());
    }
}
