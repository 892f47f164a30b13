// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Free-running 8-bit counter tile
//!
//! `uo_out` shows the count register as it stood when the edge arrived, then the
//! register increments (wrapping) if the tile is enabled. The bidirectional port
//! is unused: `uio_out = 0`, `uio_oe = 0`.

use crate::design::TileDesign;
use crate::pins::{TileInputs, TileOutputs};

#[derive(Debug, Clone, Default)]
pub struct CounterTile {
    count: u8,
}

impl CounterTile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u8 {
        self.count
    }
}

impl TileDesign for CounterTile {
    fn design_name(&self) -> &'static str {
        "counter"
    }

    fn clock(&mut self, inputs: &TileInputs) -> TileOutputs {
        if inputs.in_reset() {
            self.count = 0;
            return TileOutputs::default();
        }

        let sampled = self.count;
        if inputs.ena {
            self.count = self.count.wrapping_add(1);
        }

        TileOutputs {
            uo_out: sampled,
            uio_out: 0,
            uio_oe: 0,
        }
    }
}
