// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! Neural dynamics algorithms (ALIF, 8-bit saturating)
//!
//! Pure functions for computing one clock edge of the neuron core.
//! Platform-agnostic, works with `no_std`.

/// Firing threshold applied to the post-leak membrane potential
pub const FIRING_THRESHOLD: u8 = 128;

/// Adaptation added on every spike
pub const ADAPTATION_STEP: u8 = 16;

/// Update a single ALIF (Adaptive Leaky Integrate-and-Fire) neuron by one edge
///
/// # Arguments
/// * `membrane_potential` - `Vm` register (mutable)
/// * `adaptation` - `A` register (mutable)
/// * `input_current` - Input current sampled this edge
/// * `leak` - Leak subtracted this edge (4-bit in hardware)
/// * `decay` - Adaptation decay applied when the neuron does not fire (4-bit in hardware)
///
/// # Returns
/// `true` if neuron fired, `false` otherwise
///
/// # Algorithm
/// 1. Add input current (saturating at 255)
/// 2. Subtract leak plus current adaptation (saturating at 0)
/// 3. If at or above threshold: fire, reset `Vm` to 0, raise `A` by [`ADAPTATION_STEP`]
/// 4. Otherwise: keep the new `Vm`, lower `A` by `decay`
///
/// # Example
/// ```
/// use alif_neural::update_neuron_alif;
///
/// let mut vm = 100;
/// let mut adaptation = 0;
///
/// let fired = update_neuron_alif(&mut vm, &mut adaptation, 40, 4, 2);
/// assert!(fired); // 100 + 40 - 4 = 136 >= 128
/// assert_eq!(vm, 0); // Reset after firing
/// assert_eq!(adaptation, 16);
/// ```
#[inline]
pub fn update_neuron_alif(
    membrane_potential: &mut u8,
    adaptation: &mut u8,
    input_current: u8,
    leak: u8,
    decay: u8,
) -> bool {
    let charged = membrane_potential.saturating_add(input_current);

    // Clamping the drag at 255 is exact: `charged` never exceeds 255.
    let drag = leak.saturating_add(*adaptation);
    let discharged = charged.saturating_sub(drag);

    if discharged >= FIRING_THRESHOLD {
        *membrane_potential = 0;
        *adaptation = adaptation.saturating_add(ADAPTATION_STEP);
        return true;
    }

    *membrane_potential = discharged;
    *adaptation = adaptation.saturating_sub(decay);
    false
}

/// Net per-edge drive once leak and adaptation are taken out
///
/// A non-positive value means the membrane can never climb, so the neuron is
/// silent for as long as the input and adaptation stay where they are.
#[inline]
pub fn net_drive(input_current: u8, leak: u8, adaptation: u8) -> i16 {
    input_current as i16 - leak as i16 - adaptation as i16
}
