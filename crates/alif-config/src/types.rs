// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! This module defines all configuration structs that map to sections in
//! `alif_configuration.toml`.

use core::fmt;
use core::str::FromStr;

use alif_neural::{Nibble, NeuronConfig};
use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AlifConfig {
    pub stimulus: StimulusConfig,
    pub simulation: SimulationConfig,
    pub logging: LoggingConfig,
}

/// Values driven onto the tile inputs for the whole run
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StimulusConfig {
    /// Input current on `ui_in`
    pub input_current: u8,
    /// Leak nibble (0-15)
    pub leak: u8,
    /// Adaptation decay nibble (0-15)
    pub decay: u8,
    /// Drive `ena` high
    pub enable: bool,
}

impl Default for StimulusConfig {
    fn default() -> Self {
        Self {
            input_current: 80,
            leak: 4,
            decay: 2,
            enable: true,
        }
    }
}

impl StimulusConfig {
    /// Checked conversion to the core configuration
    pub fn neuron_config(&self) -> ConfigResult<NeuronConfig> {
        let leak = Nibble::try_from(self.leak)
            .map_err(|e| ConfigError::InvalidValue(format!("stimulus.leak: {}", e)))?;
        let decay = Nibble::try_from(self.decay)
            .map_err(|e| ConfigError::InvalidValue(format!("stimulus.decay: {}", e)))?;
        Ok(NeuronConfig::new(leak, decay))
    }

    /// Value to drive on `uio_in` (leak in bits 3:0, decay in bits 7:4)
    pub fn config_byte(&self) -> ConfigResult<u8> {
        self.neuron_config().map(NeuronConfig::to_byte)
    }
}

/// Which design sits behind the tile pins
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignKind {
    #[default]
    Alif,
    Counter,
}

impl FromStr for DesignKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "alif" | "neuron" => Ok(DesignKind::Alif),
            "counter" => Ok(DesignKind::Counter),
            other => Err(ConfigError::InvalidValue(format!(
                "Unknown design '{}': expected 'alif' or 'counter'",
                other
            ))),
        }
    }
}

impl fmt::Display for DesignKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DesignKind::Alif => write!(f, "alif"),
            DesignKind::Counter => write!(f, "counter"),
        }
    }
}

/// Run length and recording options
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub design: DesignKind,
    /// Rising edges to run after reset is released
    pub cycles: u64,
    /// Rising edges to hold reset before the run
    pub reset_cycles: u32,
    pub record_waveform: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            design: DesignKind::Alif,
            cycles: 3000,
            reset_cycles: 5,
            record_waveform: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn, error
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
