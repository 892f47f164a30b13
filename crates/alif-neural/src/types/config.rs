// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Packed configuration byte (leak + adaptation decay)

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

use super::nibble::Nibble;

/// Per-run configuration of the neuron core
///
/// On the pins this is a single byte: `leak` in bits 3:0, `decay` in bits 7:4.
/// Every combination is legal; `decay = 0` disables adaptation recovery and
/// `leak = 0` disables the membrane leak.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub struct NeuronConfig {
    /// Membrane leak subtracted every enabled cycle
    pub leak: Nibble,

    /// Adaptation decay subtracted every enabled cycle without a spike
    pub decay: Nibble,
}

impl NeuronConfig {
    pub const fn new(leak: Nibble, decay: Nibble) -> Self {
        Self { leak, decay }
    }

    /// Unpack the configuration byte as driven on the bidirectional port
    #[inline]
    pub const fn from_byte(byte: u8) -> Self {
        Self {
            leak: Nibble::from_low_bits(byte),
            decay: Nibble::from_high_bits(byte),
        }
    }

    /// Pack back into the configuration byte
    #[inline]
    pub const fn to_byte(self) -> u8 {
        (self.decay.get() << 4) | self.leak.get()
    }
}

impl From<u8> for NeuronConfig {
    fn from(byte: u8) -> Self {
        Self::from_byte(byte)
    }
}

impl From<NeuronConfig> for u8 {
    fn from(config: NeuronConfig) -> Self {
        config.to_byte()
    }
}
