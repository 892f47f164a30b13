// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # Clocked Testbench
//!
//! Drives a [`TileDesign`] one rising edge at a time, the way a clocked
//! simulator drives the real tile:
//!
//! ```text
//! tb.set_ena(true).set_ui_in(0).set_uio_in(0);
//! tb.hold_reset(5);           // rst_n low for 5 edges, then released
//! tb.clock(1);                // first edge after release
//! tb.expect_uo_out(0)?;
//! ```
//!
//! Inputs set through the setters are held until changed. Every edge is
//! appended to the spike train (for designs with a spike bit) and, when enabled,
//! to the waveform.

use tracing::{debug, info, trace};

use crate::design::TileDesign;
use crate::error::{Port, TestbenchError, TestbenchResult};
use crate::pins::{TileInputs, TileOutputs};
use crate::spike_train::SpikeTrain;
use crate::waveform::{CycleSample, Waveform};

pub struct Testbench<D: TileDesign> {
    design: D,
    inputs: TileInputs,
    outputs: TileOutputs,
    cycle: u64,
    spike_train: SpikeTrain,
    waveform: Option<Waveform>,
}

impl<D: TileDesign> Testbench<D> {
    /// Wrap `design` with power-on inputs (reset asserted, tile disabled)
    pub fn new(design: D) -> Self {
        Self {
            design,
            inputs: TileInputs::default(),
            outputs: TileOutputs::default(),
            cycle: 0,
            spike_train: SpikeTrain::new(),
            waveform: None,
        }
    }

    /// Record every edge into a [`Waveform`]
    pub fn with_waveform(mut self) -> Self {
        self.waveform = Some(Waveform::new());
        self
    }

    pub fn set_ena(&mut self, ena: bool) -> &mut Self {
        self.inputs.ena = ena;
        self
    }

    pub fn set_ui_in(&mut self, ui_in: u8) -> &mut Self {
        self.inputs.ui_in = ui_in;
        self
    }

    pub fn set_uio_in(&mut self, uio_in: u8) -> &mut Self {
        self.inputs.uio_in = uio_in;
        self
    }

    pub fn set_rst_n(&mut self, rst_n: bool) -> &mut Self {
        self.inputs.rst_n = rst_n;
        self
    }

    /// Apply `edges` rising edges and return the outputs sampled at the last one
    ///
    /// With `edges == 0` nothing happens and the last sampled outputs are returned.
    pub fn clock(&mut self, edges: u32) -> TileOutputs {
        for _ in 0..edges {
            self.edge();
        }
        self.outputs
    }

    /// Hold reset for `edges` rising edges, then release it
    pub fn hold_reset(&mut self, edges: u32) -> TileOutputs {
        debug!(
            "[TB] {}: asserting reset for {} cycles at cycle {}",
            self.design.design_name(),
            edges,
            self.cycle
        );
        self.set_rst_n(false);
        let outputs = self.clock(edges);
        self.set_rst_n(true);
        debug!("[TB] {}: reset released", self.design.design_name());
        outputs
    }

    /// Clock `edges` times and return the spike train recorded so far
    pub fn run(&mut self, edges: u64) -> &SpikeTrain {
        let spikes_before = self.spike_train.spike_count();
        for _ in 0..edges {
            self.edge();
        }
        info!(
            "[TB] {}: ran {} cycles (now at {}), {} new spikes",
            self.design.design_name(),
            edges,
            self.cycle,
            self.spike_train.spike_count() - spikes_before
        );
        &self.spike_train
    }

    fn edge(&mut self) {
        let cycle = self.cycle;
        self.outputs = self.design.clock(&self.inputs);

        trace!(
            target: "alif-tile-trace",
            "[TB] cycle={} rst_n={} ena={} ui_in={} uio_in={:#04x} -> uo_out={:#04x} uio_out={} uio_oe={:#04x}",
            cycle,
            self.inputs.rst_n,
            self.inputs.ena,
            self.inputs.ui_in,
            self.inputs.uio_in,
            self.outputs.uo_out,
            self.outputs.uio_out,
            self.outputs.uio_oe
        );

        if let Some(bit) = self.design.spike_bit() {
            let spike = (self.outputs.uo_out >> bit) & 1 == 1;
            if spike {
                debug!(
                    "[TB] cycle={} spike, adaptation before edge={}",
                    cycle, self.outputs.uio_out
                );
            }
            self.spike_train.record(cycle, spike);
        }

        if let Some(waveform) = self.waveform.as_mut() {
            waveform.push(CycleSample::new(cycle, &self.inputs, &self.outputs));
        }

        self.cycle += 1;
    }

    /// Outputs sampled at the most recent edge
    pub fn outputs(&self) -> TileOutputs {
        self.outputs
    }

    pub fn inputs(&self) -> TileInputs {
        self.inputs
    }

    /// Number of edges applied so far
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn design(&self) -> &D {
        &self.design
    }

    pub fn spike_train(&self) -> &SpikeTrain {
        &self.spike_train
    }

    pub fn waveform(&self) -> Option<&Waveform> {
        self.waveform.as_ref()
    }

    /// Forget recorded spikes and samples (the design state is untouched)
    pub fn clear_recording(&mut self) {
        self.spike_train.clear();
        if let Some(waveform) = self.waveform.as_mut() {
            *waveform = Waveform::new();
        }
    }

    pub fn expect_uo_out(&self, expected: u8) -> TestbenchResult<()> {
        self.expect(Port::UoOut, expected, self.outputs.uo_out)
    }

    pub fn expect_uio_out(&self, expected: u8) -> TestbenchResult<()> {
        self.expect(Port::UioOut, expected, self.outputs.uio_out)
    }

    pub fn expect_uio_oe(&self, expected: u8) -> TestbenchResult<()> {
        self.expect(Port::UioOe, expected, self.outputs.uio_oe)
    }

    fn expect(&self, port: Port, expected: u8, actual: u8) -> TestbenchResult<()> {
        if expected == actual {
            return Ok(());
        }
        Err(TestbenchError::PortMismatch {
            // Report the edge the outputs were sampled at
            cycle: self.cycle.saturating_sub(1),
            port,
            expected,
            actual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AlifTile, CounterTile};

    #[test]
    fn test_power_on_inputs() {
        let tb = Testbench::new(CounterTile::new());
        assert!(tb.inputs().in_reset());
        assert!(!tb.inputs().ena);
        assert_eq!(tb.cycle(), 0);
        assert_eq!(tb.outputs(), TileOutputs::default());
    }

    #[test]
    fn test_hold_reset_releases() {
        let mut tb = Testbench::new(CounterTile::new());
        tb.set_ena(true);
        tb.hold_reset(5);
        assert_eq!(tb.cycle(), 5);
        assert!(!tb.inputs().in_reset());
        assert_eq!(tb.design().count(), 0);
    }

    #[test]
    fn test_clock_zero_edges_is_noop() {
        let mut tb = Testbench::new(CounterTile::new());
        tb.set_ena(true).set_rst_n(true);
        tb.clock(3);
        let before = tb.outputs();
        assert_eq!(tb.clock(0), before);
        assert_eq!(tb.cycle(), 3);
    }

    #[test]
    fn test_mismatch_reports_sampled_cycle() {
        let mut tb = Testbench::new(CounterTile::new());
        tb.set_ena(true).set_rst_n(true);
        tb.clock(4); // samples 0, 1, 2, 3
        assert!(tb.expect_uo_out(3).is_ok());
        assert_eq!(
            tb.expect_uo_out(9),
            Err(TestbenchError::PortMismatch {
                cycle: 3,
                port: Port::UoOut,
                expected: 9,
                actual: 3,
            })
        );
    }

    #[test]
    fn test_counter_records_no_spikes() {
        let mut tb = Testbench::new(CounterTile::new());
        tb.set_ena(true).set_rst_n(true);
        assert!(tb.run(300).is_empty());
    }

    #[test]
    fn test_waveform_and_spikes_recorded() {
        let mut tb = Testbench::new(AlifTile::new()).with_waveform();
        tb.set_ena(true).set_ui_in(80).set_uio_in(0x24);
        tb.hold_reset(2);
        tb.run(10);

        let waveform = tb.waveform().expect("waveform enabled");
        assert_eq!(waveform.len(), 12);
        assert!(!waveform.samples()[0].rst_n);
        assert!(waveform.samples()[2].rst_n);

        // Spikes land on the second, fifth and eighth enabled edges
        assert_eq!(tb.spike_train().spike_cycles(), &[3, 6, 9]);

        tb.clear_recording();
        assert!(tb.spike_train().is_empty());
        assert!(tb.waveform().map_or(false, Waveform::is_empty));
    }
}
