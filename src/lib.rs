// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # tt-alif - Adaptive LIF Neuron Tile
//!
//! Cycle-accurate behavioral model of a single 8-bit adaptive leaky
//! integrate-and-fire neuron, wrapped in the standard small-tile pin contract,
//! plus the testbench and tooling used to exercise it.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! tt-alif = "0.1"  # Default: all components
//! ```
//!
//! ## Feature Flags
//!
//! - **`full`** (default): All components
//! - **`tile`**: Pin-level wrappers and the clocked testbench
//! - **`config`**: `alif_configuration.toml` loading
//! - **`observability`**: Logging setup and `--debug-<crate>` flags
//! - **`file-logging`**: Per-run JSON log files
//!
//! The neuron core is always available and builds without `std` when used
//! through `alif-neural` directly.
//!
//! ## Usage Examples
//!
//! ### Core only
//!
//! ```rust
//! use tt_alif::prelude::*;
//!
//! let mut core = NeuronCore::new();
//! let config = NeuronConfig::from_byte(0x24); // leak 4, decay 2
//!
//! let out = core.step_with_config(true, 80, config);
//! assert!(!out.spike);
//! let out = core.step_with_config(true, 80, config);
//! assert!(out.spike);
//! assert_eq!(core.adaptation(), 16);
//! ```
//!
//! ### Pin-level testbench
//!
//! ```rust
//! # #[cfg(feature = "tile")]
//! # {
//! use tt_alif::prelude::*;
//!
//! let mut tb = Testbench::new(AlifTile::new());
//! tb.set_ena(true).set_ui_in(80).set_uio_in(0x24);
//! tb.hold_reset(5);
//! let train = tb.run(3000);
//! assert!(train.summary().adapting);
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Core: alif-neural (no_std)                             │
//! │  (NeuronCore, Nibble, update_neuron_alif)               │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Harness: alif-tile                                     │
//! │  (pin contract, AlifTile, CounterTile, Testbench)       │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Tooling: alif-config, alif-observability, alif_sim     │
//! │  (TOML config, logging, scenario runner)                │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## License
//!
//! Apache-2.0

// Re-export core (always available)
pub use alif_neural as neural;

#[cfg(feature = "tile")]
pub use alif_tile as tile;

#[cfg(feature = "config")]
pub use alif_config as config;

#[cfg(feature = "observability")]
pub use alif_observability as observability;

#[cfg(all(feature = "tile", feature = "config"))]
pub mod scenario;

/// Prelude for convenient imports
pub mod prelude {
    pub use alif_neural::{
        net_drive, update_neuron_alif, CoreInputs, Nibble, NeuronConfig, NeuronCore, StepOutput,
        ADAPTATION_STEP, FIRING_THRESHOLD,
    };

    #[cfg(feature = "tile")]
    pub use alif_tile::{
        AlifTile, CounterTile, IsiSummary, SpikeTrain, Testbench, TestbenchError, TileDesign,
        TileInputs, TileOutputs,
    };

    #[cfg(feature = "config")]
    pub use alif_config::{AlifConfig, DesignKind};

    #[cfg(all(feature = "tile", feature = "config"))]
    pub use crate::scenario::{run_scenario, ScenarioOutcome, ScenarioReport};
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
