// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Scenario Runner
//!
//! Turns an [`AlifConfig`] into one complete tile run: drive the stimulus onto
//! the pins, hold reset, clock the configured number of edges, then summarize.
//!
//! ```text
//! ena    = stimulus.enable
//! ui_in  = stimulus.input_current
//! uio_in = decay << 4 | leak
//! rst_n  = 0 for simulation.reset_cycles edges, then 1 for simulation.cycles edges
//! ```

use alif_config::{validate_config, AlifConfig, ConfigResult, DesignKind};
use alif_tile::{AlifTile, CounterTile, IsiSummary, Testbench, TileDesign, TileOutputs, Waveform};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Machine-readable result of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub design: DesignKind,
    /// Edges clocked after reset release
    pub cycles: u64,
    pub reset_cycles: u32,
    pub input_current: u8,
    /// Byte driven on `uio_in`
    pub config_byte: u8,
    pub enable: bool,
    /// Interval statistics; `None` for designs without a spike bit
    pub spikes: Option<IsiSummary>,
    /// Edge numbers (counted from the first reset edge) that carried a spike
    pub spike_cycles: Vec<u64>,
    /// Outputs sampled at the last edge
    pub final_outputs: TileOutputs,
    /// Neuron registers after the last edge (neuron design only)
    pub membrane_potential: Option<u8>,
    pub adaptation: Option<u8>,
}

/// Report plus the optional per-edge recording
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub report: ScenarioReport,
    pub waveform: Option<Waveform>,
}

/// Validate `config` and run the scenario it describes
///
/// # Errors
/// Returns `ConfigError::ValidationError` if the configuration is rejected.
pub fn run_scenario(config: &AlifConfig) -> ConfigResult<ScenarioOutcome> {
    validate_config(config)?;
    let config_byte = config.stimulus.config_byte()?;

    info!(
        "[SCENARIO] design={} input_current={} leak={} decay={} enable={} cycles={}",
        config.simulation.design,
        config.stimulus.input_current,
        config.stimulus.leak,
        config.stimulus.decay,
        config.stimulus.enable,
        config.simulation.cycles
    );

    let outcome = match config.simulation.design {
        DesignKind::Alif => {
            let tb = drive(AlifTile::new(), config, config_byte);
            let core = *tb.design().core();
            let mut outcome = summarize(tb, config, config_byte, true);
            outcome.report.membrane_potential = Some(core.membrane_potential());
            outcome.report.adaptation = Some(core.adaptation());
            outcome
        }
        DesignKind::Counter => {
            let tb = drive(CounterTile::new(), config, config_byte);
            summarize(tb, config, config_byte, false)
        }
    };

    if let Some(spikes) = &outcome.report.spikes {
        info!(
            "[SCENARIO] {} spikes, first ISI {:?}, last ISI {:?}, adapting={}",
            spikes.spike_count, spikes.first_interval, spikes.last_interval, spikes.adapting
        );
    }

    Ok(outcome)
}

fn drive<D: TileDesign>(design: D, config: &AlifConfig, config_byte: u8) -> Testbench<D> {
    let mut tb = Testbench::new(design);
    if config.simulation.record_waveform {
        tb = tb.with_waveform();
    }

    tb.set_ena(config.stimulus.enable)
        .set_ui_in(config.stimulus.input_current)
        .set_uio_in(config_byte);
    tb.hold_reset(config.simulation.reset_cycles);
    tb.run(config.simulation.cycles);

    debug!(
        "[SCENARIO] {} finished at cycle {}",
        tb.design().design_name(),
        tb.cycle()
    );
    tb
}

fn summarize<D: TileDesign>(
    tb: Testbench<D>,
    config: &AlifConfig,
    config_byte: u8,
    has_spike_bit: bool,
) -> ScenarioOutcome {
    let report = ScenarioReport {
        design: config.simulation.design,
        cycles: config.simulation.cycles,
        reset_cycles: config.simulation.reset_cycles,
        input_current: config.stimulus.input_current,
        config_byte,
        enable: config.stimulus.enable,
        spikes: has_spike_bit.then(|| tb.spike_train().summary()),
        spike_cycles: tb.spike_train().spike_cycles().to_vec(),
        final_outputs: tb.outputs(),
        membrane_potential: None,
        adaptation: None,
    };

    ScenarioOutcome {
        report,
        waveform: tb.waveform().cloned(),
    }
}

impl ScenarioReport {
    /// Pretty JSON rendering used by the `alif_sim` tool
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alif_config::ConfigError;

    #[test]
    fn test_default_scenario_adapts() {
        let outcome = run_scenario(&AlifConfig::default()).unwrap();
        let spikes = outcome.report.spikes.expect("neuron has a spike bit");

        assert!(spikes.spike_count >= 3);
        assert!(spikes.adapting);
        assert!(spikes.non_decreasing);
        assert_eq!(spikes.check(), Ok(()));
        assert_eq!(outcome.report.config_byte, 0x24);
        assert!(outcome.report.adaptation.is_some());
        assert!(outcome.waveform.is_none());
    }

    #[test]
    fn test_counter_scenario_has_no_spike_summary() {
        let mut config = AlifConfig::default();
        config.simulation.design = DesignKind::Counter;
        config.simulation.cycles = 10;
        config.simulation.record_waveform = true;

        let outcome = run_scenario(&config).unwrap();
        assert!(outcome.report.spikes.is_none());
        assert!(outcome.report.membrane_potential.is_none());
        // Last edge samples the count before its own increment
        assert_eq!(outcome.report.final_outputs.uo_out, 9);
        assert_eq!(outcome.waveform.map(|w| w.len()), Some(15));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = AlifConfig::default();
        config.stimulus.leak = 20;
        assert!(matches!(
            run_scenario(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_report_json() {
        let mut config = AlifConfig::default();
        config.simulation.cycles = 20;
        let json = run_scenario(&config).unwrap().report.to_json().unwrap();
        assert!(json.contains("\"design\": \"alif\""));
        assert!(json.contains("\"spike_cycles\""));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["final_outputs"]["uio_oe"], 255);
    }
}
