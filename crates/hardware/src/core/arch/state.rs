//! CPU Run State.
//!
//! This module defines the states of the fetch-decode-execute state machine.
//! A CPU starts `Running` and leaves that state at most once.

use std::fmt;

/// Run state of the CPU.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CpuState {
    /// Fetching and executing instructions.
    #[default]
    Running,

    /// Stopped by `HLT`. Terminal.
    Halted,

    /// Stopped by an execution error. Terminal.
    Faulted,
}

impl CpuState {
    /// True for `Halted` and `Faulted`.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }

    /// Returns the human-readable name of the state.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Halted => "halted",
            Self::Faulted => "faulted",
        }
    }
}

impl fmt::Display for CpuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
