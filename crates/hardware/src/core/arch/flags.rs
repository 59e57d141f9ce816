//! Condition Flags.
//!
//! The LS-8 keeps three independent condition bits. Only `CMP` writes them and
//! only `JEQ`/`JNE` read them, so they are plain booleans rather than a packed
//! flags register. They are sticky: each holds its value until the next `CMP`.

use std::cmp::Ordering;

/// Result flags of the most recent comparison.
///
/// All three are clear at reset. After `compare` exactly one is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    equal: bool,
    less: bool,
    greater: bool,
}

impl Flags {
    /// Creates a flag set with every bit clear.
    pub const fn new() -> Self {
        Self {
            equal: false,
            less: false,
            greater: false,
        }
    }

    /// Compares two byte values and sets exactly one flag.
    pub fn compare(&mut self, a: u8, b: u8) {
        let ord = a.cmp(&b);
        self.equal = ord == Ordering::Equal;
        self.less = ord == Ordering::Less;
        self.greater = ord == Ordering::Greater;
    }

    /// `a == b` at the last comparison.
    #[inline]
    pub const fn is_equal(&self) -> bool {
        self.equal
    }

    /// `a < b` at the last comparison.
    #[inline]
    pub const fn is_less(&self) -> bool {
        self.less
    }

    /// `a > b` at the last comparison.
    #[inline]
    pub const fn is_greater(&self) -> bool {
        self.greater
    }
}
