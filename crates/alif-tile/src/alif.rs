// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # ALIF Neuron Tile
//!
//! Pin mapping:
//!
//! ```text
//! ui_in[7:0]    input current (unsigned)
//! uio_in[3:0]   leak
//! uio_in[7:4]   adaptation decay
//! uo_out[0]     spike
//! uo_out[7:1]   reserved, always 0
//! uio_out[7:0]  adaptation level (telemetry, value before this edge)
//! uio_oe[7:0]   0xFF, the bidirectional port is driven by the tile
//! ```

use alif_neural::{CoreInputs, NeuronConfig, NeuronCore};

use crate::design::TileDesign;
use crate::pins::{TileInputs, TileOutputs};

/// Output enables reported by the neuron tile: the whole bidirectional port carries telemetry
pub const ALIF_UIO_OE: u8 = 0xFF;

/// Adaptive leaky integrate-and-fire neuron behind the tile pins
#[derive(Debug, Clone, Default)]
pub struct AlifTile {
    core: NeuronCore,
}

impl AlifTile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing core (for starting from a known register state)
    pub fn from_core(core: NeuronCore) -> Self {
        Self { core }
    }

    /// Internal registers, for inspection only
    pub fn core(&self) -> &NeuronCore {
        &self.core
    }
}

impl TileDesign for AlifTile {
    fn design_name(&self) -> &'static str {
        "alif-neuron"
    }

    fn clock(&mut self, inputs: &TileInputs) -> TileOutputs {
        let out = self.core.clock(CoreInputs {
            reset: inputs.in_reset(),
            enable: inputs.ena,
            input_current: inputs.ui_in,
            config: NeuronConfig::from_byte(inputs.uio_in),
        });

        TileOutputs {
            uo_out: out.spike_byte(),
            uio_out: out.adaptation_out,
            uio_oe: ALIF_UIO_OE,
        }
    }

    fn spike_bit(&self) -> Option<u8> {
        Some(0)
    }
}
