//! # Comparison Flags
//!
//! The LS-8 flags register records the outcome of the most recent `CMP`.
//!
//! Bit layout (`00000LGE`):
//! - Bit 2: L (less than)
//! - Bit 1: G (greater than)
//! - Bit 0: E (equal)
//!
//! A comparison always sets exactly one of these bits and clears the others.

use std::cmp::Ordering;
use std::fmt;

/// Packed flags register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags(u8);

impl Flags {
    /// Equal flag (bit 0).
    pub const EQUAL: u8 = 0b0000_0001;

    /// Greater-than flag (bit 1).
    pub const GREATER: u8 = 0b0000_0010;

    /// Less-than flag (bit 2).
    pub const LESS: u8 = 0b0000_0100;

    /// Builds the flags value produced by comparing register A against register B.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8::Flags;
    ///
    /// let flags = Flags::from_comparison(3, 7);
    /// assert!(flags.less());
    /// assert!(!flags.equal());
    /// assert_eq!(flags.bits(), Flags::LESS);
    /// ```
    pub fn from_comparison(a: u8, b: u8) -> Self {
        match a.cmp(&b) {
            Ordering::Equal => Flags(Self::EQUAL),
            Ordering::Greater => Flags(Self::GREATER),
            Ordering::Less => Flags(Self::LESS),
        }
    }

    /// Returns the raw register byte.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if the E flag is set.
    pub fn equal(self) -> bool {
        self.0 & Self::EQUAL != 0
    }

    /// Returns true if the G flag is set.
    pub fn greater(self) -> bool {
        self.0 & Self::GREATER != 0
    }

    /// Returns true if the L flag is set.
    pub fn less(self) -> bool {
        self.0 & Self::LESS != 0
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let bit = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            bit(self.less(), 'L'),
            bit(self.greater(), 'G'),
            bit(self.equal(), 'E')
        )
    }
}
