// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! 4-bit unsigned field

use core::fmt;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

use super::error::NibbleOutOfRange;

/// Unsigned 4-bit value (0-15)
///
/// Holds one half of the configuration byte. Construction either masks
/// (`from_low_bits`/`from_high_bits`, matching what the wires do) or checks
/// (`TryFrom<u8>`).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "u8", into = "u8"))]
#[repr(transparent)]
pub struct Nibble(u8);

impl Nibble {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(0x0F);

    /// Bits 3:0 of `byte`
    #[inline]
    pub const fn from_low_bits(byte: u8) -> Self {
        Self(byte & 0x0F)
    }

    /// Bits 7:4 of `byte`
    #[inline]
    pub const fn from_high_bits(byte: u8) -> Self {
        Self(byte >> 4)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Nibble {
    type Error = NibbleOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > Self::MAX.0 {
            return Err(NibbleOutOfRange(value));
        }
        Ok(Self(value))
    }
}

impl From<Nibble> for u8 {
    #[inline]
    fn from(value: Nibble) -> Self {
        value.0
    }
}

impl fmt::Display for Nibble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
