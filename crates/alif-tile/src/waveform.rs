// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Per-edge pin recording

use core::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::pins::{TileInputs, TileOutputs};

/// Pin values at one rising edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleSample {
    pub cycle: u64,
    pub rst_n: bool,
    pub ena: bool,
    pub ui_in: u8,
    pub uio_in: u8,
    pub uo_out: u8,
    pub uio_out: u8,
    pub uio_oe: u8,
}

impl CycleSample {
    pub fn new(cycle: u64, inputs: &TileInputs, outputs: &TileOutputs) -> Self {
        Self {
            cycle,
            rst_n: inputs.rst_n,
            ena: inputs.ena,
            ui_in: inputs.ui_in,
            uio_in: inputs.uio_in,
            uo_out: outputs.uo_out,
            uio_out: outputs.uio_out,
            uio_oe: outputs.uio_oe,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Waveform {
    samples: Vec<CycleSample>,
}

impl Waveform {
    pub const CSV_HEADER: &'static str = "cycle,rst_n,ena,ui_in,uio_in,uo_out,uio_out,uio_oe";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: CycleSample) {
        self.samples.push(sample);
    }

    pub fn samples(&self) -> &[CycleSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// One header line plus one line per edge
    pub fn to_csv(&self) -> String {
        let mut csv = String::with_capacity((self.samples.len() + 1) * 32);
        csv.push_str(Self::CSV_HEADER);
        csv.push('\n');
        for s in &self.samples {
            // Writing into a String cannot fail
            let _ = writeln!(
                csv,
                "{},{},{},{},{},{},{},{}",
                s.cycle,
                s.rst_n as u8,
                s.ena as u8,
                s.ui_in,
                s.uio_in,
                s.uo_out,
                s.uio_out,
                s.uio_oe
            );
        }
        csv
    }
}
