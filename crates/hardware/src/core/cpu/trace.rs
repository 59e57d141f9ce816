//! Instruction Trace.
//!
//! Renders the machine state as one line per cycle:
//!
//! ```text
//! TRACE: PC | M[PC] M[PC+1] M[PC+2] | R0 R1 R2 R3 R4 R5 R6 R7
//! ```
//!
//! All values are two-digit upper-case hex. Producing a trace never changes
//! CPU state.

use std::fmt::Write as _;

use super::Cpu;

impl Cpu {
    /// Formats the current PC, the three fetch bytes, and all registers.
    pub fn trace_line(&self) -> String {
        let [op, a, b] = self.fetch();
        let mut line = format!("TRACE: {:02X} | {op:02X} {a:02X} {b:02X} |", self.pc);
        for val in self.regs.as_array() {
            let _ = write!(line, " {val:02X}");
        }
        line
    }
}
