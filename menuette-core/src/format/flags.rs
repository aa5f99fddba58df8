//! Compact format flags
//!
//! Bits 5-6 select the major mode. The low bits are modifiers whose meaning
//! depends on the mode:
//!
//! | Mode    | Bit 0      | Bit 1          | Bit 2        | Bits 3-4 |
//! |---------|------------|----------------|--------------|----------|
//! | Decimal | unsigned   | leading zeros  | force sign   | scale    |
//! | Hex     | two digits | `0x` prefix    |              |          |
//! | Binary  | `0b` prefix|                |              |          |
//! | Boolean | Yes/No     | T/F            |              |          |

use core::ops::BitOr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const MAJOR_MASK: u8 = 0x60;
const SCALE_SHIFT: u8 = 3;
const SCALE_MASK: u8 = 0x03 << SCALE_SHIFT;

/// Primary representation selected by a [`Format`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Major {
    Decimal,
    Hex,
    Binary,
    Boolean,
}

/// How a 16-bit value is rendered as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Format(u8);

impl Format {
    // Major modes
    pub const DECIMAL: Self = Self(0x00);
    pub const HEX: Self = Self(0x20);
    pub const BINARY: Self = Self(0x40);
    pub const BOOLEAN: Self = Self(0x60);

    // Decimal modifiers
    pub const SIGNED: Self = Self(0x00);
    pub const UNSIGNED: Self = Self(0x01);
    pub const LEADING_ZEROS: Self = Self(0x02);
    pub const INCLUDE_SIGN: Self = Self(0x04);
    pub const X1: Self = Self(0x00);
    pub const X10: Self = Self(0x08);
    pub const X100: Self = Self(0x10);
    pub const X1000: Self = Self(0x18);

    // Hex
    pub const HEX4: Self = Self(0x20);
    pub const HEX2: Self = Self(0x21);
    pub const HEX_0X: Self = Self(0x22);

    // Binary
    pub const BINARY_0B: Self = Self(0x41);

    // Boolean
    pub const TRUE_FALSE: Self = Self(0x60);
    pub const YES_NO: Self = Self(0x61);
    pub const TF: Self = Self(0x62);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Combine two flag sets
    ///
    /// `const` counterpart of `|` for use in static item tables.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn major(self) -> Major {
        match self.0 & MAJOR_MASK {
            0x00 => Major::Decimal,
            0x20 => Major::Hex,
            0x40 => Major::Binary,
            _ => Major::Boolean,
        }
    }

    /// Signed decimal: arithmetic saturates at the `i16` range
    pub const fn is_signed(self) -> bool {
        matches!(self.major(), Major::Decimal) && !self.has(Self::UNSIGNED)
    }

    /// Number of digits after the decimal point (0-3)
    pub const fn scale_digits(self) -> u8 {
        (self.0 & SCALE_MASK) >> SCALE_SHIFT
    }

    /// Test a modifier bit, ignoring the major mode
    pub const fn has(self, modifier: Self) -> bool {
        let bits = modifier.0 & !MAJOR_MASK;
        bits != 0 && self.0 & bits == bits
    }
}

impl BitOr for Format {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}
