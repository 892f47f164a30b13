// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for bit-width conversions
//!
//! The core itself never fails. These errors only surface when a caller asks for a
//! checked conversion from a wider integer.

use core::fmt;

#[cfg(feature = "std")]
extern crate std;

/// A value did not fit in 4 bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NibbleOutOfRange(pub u8);

impl fmt::Display for NibbleOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value {} does not fit in 4 bits (0-15)", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NibbleOutOfRange {}
