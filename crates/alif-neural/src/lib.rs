// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # ALIF Neuron Core (Platform-Agnostic)
//!
//! Behavioral model of an 8-bit Adaptive Leaky Integrate-and-Fire neuron as it is
//! laid out in silicon:
//! - **Types**: 4-bit configuration fields and the packed configuration byte
//! - **Dynamics**: the pure per-edge update rule
//! - **Core**: the two-register state machine (`Vm`, `A`) with reset and enable
//!
//! All arithmetic is saturating; every operation is total over its inputs.
//!
//! ## Target Platforms
//! - ✅ Desktop (Linux, macOS, Windows)
//! - ✅ Embedded (`no_std`, disable default features)
//! - ✅ WASM

#![cfg_attr(not(feature = "std"), no_std)]

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod types;

pub mod neuron;
pub mod dynamics;

pub use dynamics::*;

pub use neuron::{CoreInputs, NeuronCore, StepOutput};
pub use types::{Nibble, NibbleOutOfRange, NeuronConfig};
