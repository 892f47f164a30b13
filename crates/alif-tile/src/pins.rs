// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Tile pin bundles
//!
//! The bidirectional port is split into its two directions (`uio_in` on the
//! input side, `uio_out` + `uio_oe` on the output side) instead of one aliased
//! register; the design decides which direction is live through `uio_oe`.

use serde::{Deserialize, Serialize};

/// Values driven into the tile before a rising edge
///
/// `Default` is the power-on condition: reset asserted, tile disabled, all
/// buses low.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileInputs {
    /// Dedicated inputs
    pub ui_in: u8,
    /// Bidirectional port, input direction
    pub uio_in: u8,
    /// Tile enable
    pub ena: bool,
    /// Active-low synchronous reset
    pub rst_n: bool,
}

impl TileInputs {
    /// Reset is asserted (rst_n low)
    #[inline]
    pub const fn in_reset(&self) -> bool {
        !self.rst_n
    }
}

/// Values sampled from the tile at a rising edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileOutputs {
    /// Dedicated outputs
    pub uo_out: u8,
    /// Bidirectional port, output direction
    pub uio_out: u8,
    /// Output enables for the bidirectional port (1 = tile drives the pin)
    pub uio_oe: u8,
}
