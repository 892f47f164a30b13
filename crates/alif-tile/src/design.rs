// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Tile Design Architecture
//!
//! A tile design is a synchronous circuit behind the standard pin bundle. The
//! testbench is generic over this trait so the same stimulus vocabulary drives
//! every design.
//!
//! ## Adding a New Design
//!
//! 1. Create `src/your_design.rs`
//! 2. Implement `TileDesign`
//! 3. Add tests
//! 4. Export in `lib.rs`

use crate::pins::{TileInputs, TileOutputs};

/// Synchronous design behind the tile pins
pub trait TileDesign {
    /// Human-readable design name (used in logs and reports)
    fn design_name(&self) -> &'static str;

    /// Apply one rising edge of `clk` with `inputs` settled
    ///
    /// Returns the outputs observed at that edge. Implementations must treat
    /// `inputs.rst_n == false` as a synchronous reset that takes priority over
    /// every other input.
    fn clock(&mut self, inputs: &TileInputs) -> TileOutputs;

    /// Bit position in `uo_out` carrying a spike flag, if the design has one
    fn spike_bit(&self) -> Option<u8> {
        None
    }
}
