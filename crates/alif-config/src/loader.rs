// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! This module implements the 3-tier configuration loading system:
//! 1. TOML file (base defaults)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::{AlifConfig, ConfigError, ConfigResult, DesignKind, CONFIG_FILE_NAME};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Find the configuration file
///
/// Search order:
/// 1. `ALIF_CONFIG_PATH` environment variable
/// 2. Current working directory: `./alif_configuration.toml`
/// 3. Up to 5 parent directories
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var("ALIF_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by ALIF_CONFIG_PATH not found: {}",
            path.display()
        )));
    }

    let mut search_paths = Vec::new();

    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));

        let mut current = cwd;
        for _ in 0..5 {
            match current.parent() {
                Some(parent) => {
                    search_paths.push(parent.join(CONFIG_FILE_NAME));
                    current = parent.to_path_buf();
                }
                None => break,
            }
        }
    }

    if let Some(found) = search_paths.iter().find(|p| p.exists()) {
        return Ok(found.clone());
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "'{}' not found in any of these locations:\n{}\n\nSet ALIF_CONFIG_PATH environment variable to specify custom location.",
        CONFIG_FILE_NAME, search_list
    )))
}

/// Load configuration from TOML file
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, will search for config file.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Returns
///
/// Complete `AlifConfig` with all overrides applied. Validation is left to the
/// caller (`validate_config`).
///
/// # Errors
///
/// Returns error if config file is not found or contains invalid TOML
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<AlifConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };

    let content = fs::read_to_string(&config_file)?;
    let mut config: AlifConfig = toml::from_str(&content)?;

    apply_environment_overrides(&mut config);

    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    Ok(config)
}

fn parse_bool(value: &str) -> bool {
    let value = value.to_lowercase();
    value == "true" || value == "1" || value == "yes"
}

/// Apply one named override; unparseable values are ignored
fn apply_override(config: &mut AlifConfig, key: &str, value: &str) {
    match key {
        "input_current" => {
            if let Ok(v) = value.parse::<u8>() {
                config.stimulus.input_current = v;
            }
        }
        "leak" => {
            if let Ok(v) = value.parse::<u8>() {
                config.stimulus.leak = v;
            }
        }
        "decay" => {
            if let Ok(v) = value.parse::<u8>() {
                config.stimulus.decay = v;
            }
        }
        "enable" => config.stimulus.enable = parse_bool(value),
        "cycles" => {
            if let Ok(v) = value.parse::<u64>() {
                config.simulation.cycles = v;
            }
        }
        "reset_cycles" => {
            if let Ok(v) = value.parse::<u32>() {
                config.simulation.reset_cycles = v;
            }
        }
        "record_waveform" => config.simulation.record_waveform = parse_bool(value),
        "design" => {
            if let Ok(v) = value.parse::<DesignKind>() {
                config.simulation.design = v;
            }
        }
        "log_level" => config.logging.level = value.to_string(),
        _ => {}
    }
}

/// Override keys shared by the environment (`ALIF_` + uppercase) and the CLI (as-is)
pub const OVERRIDE_KEYS: &[&str] = &[
    "input_current",
    "leak",
    "decay",
    "enable",
    "cycles",
    "reset_cycles",
    "record_waveform",
    "design",
    "log_level",
];

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `ALIF_INPUT_CURRENT` -> `stimulus.input_current`
/// - `ALIF_LEAK` -> `stimulus.leak`
/// - `ALIF_DECAY` -> `stimulus.decay`
/// - `ALIF_ENABLE` -> `stimulus.enable`
/// - `ALIF_CYCLES` -> `simulation.cycles`
/// - `ALIF_RESET_CYCLES` -> `simulation.reset_cycles`
/// - `ALIF_RECORD_WAVEFORM` -> `simulation.record_waveform`
/// - `ALIF_DESIGN` -> `simulation.design`
/// - `ALIF_LOG_LEVEL` -> `logging.level`
pub fn apply_environment_overrides(config: &mut AlifConfig) {
    for key in OVERRIDE_KEYS {
        if let Ok(value) = env::var(format!("ALIF_{}", key.to_uppercase())) {
            apply_override(config, key, &value);
        }
    }
}

/// Apply CLI argument overrides to configuration
///
/// # Arguments
///
/// * `config` - Configuration to modify
/// * `cli_args` - HashMap of CLI arguments (e.g., `{"input_current": "120", "decay": "0"}`)
pub fn apply_cli_overrides(config: &mut AlifConfig, cli_args: &HashMap<String, String>) {
    for key in OVERRIDE_KEYS {
        if let Some(value) = cli_args.get(*key) {
            apply_override(config, key, value);
        }
    }
}
