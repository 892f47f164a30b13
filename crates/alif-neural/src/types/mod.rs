// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Neuron Core Types
//!
//! Bit-width types for the core's configuration port.

pub mod config;
pub mod error;
pub mod nibble;

pub use config::NeuronConfig;
pub use error::NibbleOutOfRange;
pub use nibble::Nibble;
