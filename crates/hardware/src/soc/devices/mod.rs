//! Output Devices.
//!
//! The only device class the LS-8 has is a console: a sink for the decimal
//! values printed by `PRN`.

/// Stdout and in-memory console implementations.
pub mod console;

pub use console::{BufferConsole, StdoutConsole};
