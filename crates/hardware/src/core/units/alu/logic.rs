//! ALU comparison.
//!
//! `CMP` uses unsigned ordering on the two register values.

use crate::core::arch::flags::Flags;

/// Compares two register values into the flags.
#[inline]
pub fn compare(flags: &mut Flags, a: u8, b: u8) {
    flags.compare(a, b);
}
