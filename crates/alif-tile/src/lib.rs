// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # ALIF Tile
//!
//! Pin-level wrapper and clocked testbench for small user-project tiles that
//! share the standard 8-in / 8-out / 8-bidirectional pin budget:
//!
//! ```text
//!            ┌──────────────────────┐
//!  ui_in  ──►│                      ├──► uo_out
//!  uio_in ──►│      TileDesign      ├──► uio_out
//!  ena    ──►│                      ├──► uio_oe
//!  rst_n  ──►│                      │
//!  clk    ──►│                      │
//!            └──────────────────────┘
//! ```
//!
//! - [`AlifTile`]: the adaptive leaky integrate-and-fire neuron
//! - [`CounterTile`]: the free-running 8-bit counter the pin harness was first written against
//! - [`Testbench`]: drives the pins one rising edge at a time and checks outputs
//! - [`SpikeTrain`]: inter-spike interval analysis for designs with a spike bit

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod alif;
pub mod counter;
pub mod design;
pub mod error;
pub mod pins;
pub mod spike_train;
pub mod testbench;
pub mod waveform;

pub use alif::AlifTile;
pub use counter::CounterTile;
pub use design::TileDesign;
pub use error::{Port, TestbenchError, TestbenchResult};
pub use pins::{TileInputs, TileOutputs};
pub use spike_train::{IsiSummary, SpikeTrain};
pub use testbench::Testbench;
pub use waveform::{CycleSample, Waveform};
