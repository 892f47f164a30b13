// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # ALIF Neuron Core
//!
//! The complete state of the core is two 8-bit registers:
//!
//! ```text
//! Vm : membrane potential
//! A  : adaptation level ("fatigue")
//!
//! Per enabled clock edge:
//!     adaptation_out = A                          (sampled before the update)
//!     Vm'  = sat_add(Vm, I)
//!     Vm'' = sat_sub(Vm', leak + A)
//!     if Vm'' >= T:  spike, Vm = 0,   A = sat_add(A, ADAPT_STEP)
//!     else:          Vm = Vm'',       A = sat_sub(A, decay)
//! ```
//!
//! Reset clears both registers and wins over everything else on the same edge.
//! A disabled core holds both registers and reports no spike.

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

use crate::dynamics::update_neuron_alif;
use crate::types::{Nibble, NeuronConfig};

/// Outputs observed for one clock edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub struct StepOutput {
    /// Spike flag decided on this edge
    pub spike: bool,

    /// Adaptation level as it was when the edge arrived
    pub adaptation_out: u8,
}

impl StepOutput {
    /// Primary output byte: bit 0 is the spike flag, bits 7:1 are reserved (0)
    #[inline]
    pub const fn spike_byte(self) -> u8 {
        self.spike as u8
    }
}

/// Everything the core samples on one clock edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoreInputs {
    /// Synchronous reset (active high at this level; the pins are active low)
    pub reset: bool,
    pub enable: bool,
    pub input_current: u8,
    pub config: NeuronConfig,
}

/// Adaptive leaky integrate-and-fire neuron core
///
/// A plain value type. Cloning it snapshots the full simulation state.
///
/// # Example
/// ```
/// use alif_neural::{NeuronConfig, NeuronCore};
///
/// let mut core = NeuronCore::new();
/// let config = NeuronConfig::from_byte(0x24); // leak = 4, decay = 2
///
/// let first = core.step_with_config(true, 80, config);
/// assert!(!first.spike);
/// assert_eq!(core.membrane_potential(), 76);
///
/// let second = core.step_with_config(true, 80, config);
/// assert!(second.spike);
/// assert_eq!(second.adaptation_out, 0); // Reported before the spike raised it
/// assert_eq!(core.adaptation(), 16);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub struct NeuronCore {
    membrane_potential: u8,
    adaptation: u8,
}

impl NeuronCore {
    /// Create a core in its reset state
    pub const fn new() -> Self {
        Self {
            membrane_potential: 0,
            adaptation: 0,
        }
    }

    /// Create a core with preloaded registers
    ///
    /// Hardware cannot do this; it exists so tests can start from arbitrary states.
    pub const fn with_state(membrane_potential: u8, adaptation: u8) -> Self {
        Self {
            membrane_potential,
            adaptation,
        }
    }

    /// Clear both registers
    #[inline]
    pub fn reset(&mut self) {
        self.membrane_potential = 0;
        self.adaptation = 0;
    }

    /// Advance one clock edge with reset released
    #[inline]
    pub fn step(
        &mut self,
        enable: bool,
        input_current: u8,
        leak: Nibble,
        decay: Nibble,
    ) -> StepOutput {
        let adaptation_out = self.adaptation;

        if !enable {
            return StepOutput {
                spike: false,
                adaptation_out,
            };
        }

        let spike = update_neuron_alif(
            &mut self.membrane_potential,
            &mut self.adaptation,
            input_current,
            leak.get(),
            decay.get(),
        );

        StepOutput {
            spike,
            adaptation_out,
        }
    }

    /// Advance one clock edge using a packed configuration
    #[inline]
    pub fn step_with_config(
        &mut self,
        enable: bool,
        input_current: u8,
        config: NeuronConfig,
    ) -> StepOutput {
        self.step(enable, input_current, config.leak, config.decay)
    }

    /// Advance one clock edge with every input, reset included
    ///
    /// Reset is applied before any leak/threshold math and the edge reports
    /// `spike = false, adaptation_out = 0`.
    pub fn clock(&mut self, inputs: CoreInputs) -> StepOutput {
        if inputs.reset {
            self.reset();
            return StepOutput::default();
        }
        self.step_with_config(inputs.enable, inputs.input_current, inputs.config)
    }

    #[inline]
    pub const fn membrane_potential(&self) -> u8 {
        self.membrane_potential
    }

    #[inline]
    pub const fn adaptation(&self) -> u8 {
        self.adaptation
    }
}
