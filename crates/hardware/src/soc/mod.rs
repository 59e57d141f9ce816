//! System-on-Chip (SoC) Components.
//!
//! This module organizes the components around the core: the flat 256-byte
//! memory and the console that receives `PRN` output.

/// Output devices attached to the CPU.
pub mod devices;

/// Main memory.
pub mod memory;

/// Device trait definitions.
pub mod traits;

pub use devices::{BufferConsole, StdoutConsole};
pub use memory::Memory;
pub use traits::Console;
