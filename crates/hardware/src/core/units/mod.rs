//! Execution units and functional components.
//!
//! The LS-8 has a single execution unit, the ALU. Everything else
//! (loads, jumps, stack traffic) is handled directly by the CPU.

/// Arithmetic Logic Unit for register arithmetic and comparison.
pub mod alu;
