//! Configuration system for the LS-8 emulator.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Reset values of a freshly powered-on LS-8.
//! 2. **Structures:** A `general` section for tracing, stack, and fault policy.
//! 3. **Enums:** The policy applied when the CPU fetches a byte that is not an opcode.
//!
//! Configuration is supplied as JSON (`ls8 run --config <file>`) or built with
//! `Config::default()`. Every field is optional, so `{}` is a valid document.

use serde::Deserialize;

/// Default configuration constants for the emulator.
mod defaults {
    /// Reset value of the stack pointer (`R7`).
    pub const INITIAL_SP: u8 = crate::common::constants::INITIAL_SP;
}

/// What the CPU does when the byte at PC is not an opcode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownOpcodePolicy {
    /// Report the byte and retry the same PC on the next cycle.
    ///
    /// The PC does not advance and the CPU stays `Running`, so `run` never
    /// returns. This is the classic LS-8 behaviour and the default.
    #[default]
    #[serde(alias = "Spin")]
    Spin,
    /// Move the CPU to `Faulted` and return `CpuError::UnknownOpcode`.
    #[serde(alias = "Fault")]
    Fault,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use ls8_core::config::{Config, UnknownOpcodePolicy};
///
/// let json = r#"{
///     "general": {
///         "trace_instructions": true,
///         "unknown_opcode": "fault"
///     }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.initial_sp, 0xF4);
/// assert_eq!(config.general.unknown_opcode, UnknownOpcodePolicy::Fault);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General emulation settings
    #[serde(default)]
    pub general: GeneralConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// General emulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Print a `TRACE:` line to stderr before every instruction
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial stack pointer (`R7`)
    #[serde(default = "GeneralConfig::default_initial_sp")]
    pub initial_sp: u8,

    /// Behaviour on an undecodable opcode
    #[serde(default)]
    pub unknown_opcode: UnknownOpcodePolicy,
}

impl GeneralConfig {
    /// Returns the default initial stack pointer.
    fn default_initial_sp() -> u8 {
        defaults::INITIAL_SP
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            initial_sp: defaults::INITIAL_SP,
            unknown_opcode: UnknownOpcodePolicy::Spin,
        }
    }
}
