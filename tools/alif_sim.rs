// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Tile scenario runner.
//!
//! Loads `alif_configuration.toml` (or built-in defaults when none is found),
//! applies `ALIF_*` environment and `--set key=value` overrides, runs the
//! scenario and prints a JSON report on stdout. Logs go to stderr, and also to
//! per-run JSON files under `ALIF_LOG_DIR` when that variable is set.
//!
//! Exit codes: 0 on success, 1 when `--check-adaptation` fails, 2 on usage or
//! configuration errors.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use tracing::{error, info};

use tt_alif::config::{
    apply_cli_overrides, apply_environment_overrides, find_config_file, load_config, AlifConfig,
    ConfigError, OVERRIDE_KEYS,
};
use tt_alif::observability::{debug_flags_help, init_logging, parse_debug_flags};
use tt_alif::scenario::run_scenario;

struct Args {
    config: Option<PathBuf>,
    overrides: HashMap<String, String>,
    waveform_csv: Option<PathBuf>,
    check_adaptation: bool,
}

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: alif_sim [--config <path>] [--set <key>=<value>]... [--waveform-csv <path>] \
         [--check-adaptation] [--debug-<crate>]\n\n\
         Override keys: {}\n\n{}",
        OVERRIDE_KEYS.join(", "),
        debug_flags_help()
    );
    process::exit(2);
}

fn parse_args() -> Args {
    let mut parsed = Args {
        config: None,
        overrides: HashMap::new(),
        waveform_csv: None,
        check_adaptation: false,
    };

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let v = args.next().unwrap_or_else(|| usage_and_exit());
                parsed.config = Some(PathBuf::from(v));
            }
            "--set" => {
                let v = args.next().unwrap_or_else(|| usage_and_exit());
                let (key, value) = v.split_once('=').unwrap_or_else(|| {
                    eprintln!("Expected key=value after --set, got: {v}");
                    usage_and_exit()
                });
                parsed
                    .overrides
                    .insert(key.trim().to_string(), value.trim().to_string());
            }
            "--waveform-csv" => {
                let v = args.next().unwrap_or_else(|| usage_and_exit());
                parsed.waveform_csv = Some(PathBuf::from(v));
                // Nothing to write unless edges are recorded
                parsed
                    .overrides
                    .insert("record_waveform".to_string(), "true".to_string());
            }
            "--check-adaptation" => parsed.check_adaptation = true,
            "-h" | "--help" => usage_and_exit(),
            // Consumed by parse_debug_flags
            other if other.starts_with("--debug-") => {}
            other => {
                eprintln!("Unknown argument: {other}");
                usage_and_exit();
            }
        }
    }

    parsed
}

/// Explicit `--config` must exist; otherwise fall back to defaults when no file is found
fn resolve_config(args: &Args) -> Result<AlifConfig> {
    if let Some(path) = args.config.as_deref() {
        return load_config(Some(path), Some(&args.overrides))
            .with_context(|| format!("Failed to load {}", path.display()));
    }

    match find_config_file() {
        Ok(path) => load_config(Some(&path), Some(&args.overrides))
            .with_context(|| format!("Failed to load {}", path.display())),
        Err(ConfigError::FileNotFound(_)) => {
            let mut config = AlifConfig::default();
            apply_environment_overrides(&mut config);
            apply_cli_overrides(&mut config, &args.overrides);
            Ok(config)
        }
        Err(e) => Err(e.into()),
    }
}

fn run(args: &Args) -> Result<bool> {
    let config = resolve_config(args)?;

    let debug_flags = parse_debug_flags();
    // ALIF_LOG_DIR switches on per-run JSON log files
    #[cfg(feature = "file-logging")]
    let _logging = match env::var_os("ALIF_LOG_DIR") {
        Some(dir) => tt_alif::observability::init_file_logging(
            &debug_flags,
            &config.logging.level,
            Some(PathBuf::from(dir)),
            None,
        )?,
        None => init_logging(&debug_flags, &config.logging.level)?,
    };
    #[cfg(not(feature = "file-logging"))]
    let _logging = init_logging(&debug_flags, &config.logging.level)?;

    let outcome = run_scenario(&config).context("Scenario rejected")?;

    if let (Some(path), Some(waveform)) = (args.waveform_csv.as_ref(), outcome.waveform.as_ref()) {
        fs::write(path, waveform.to_csv())
            .with_context(|| format!("Failed to write waveform to {}", path.display()))?;
        info!("[SIM] wrote {} samples to {}", waveform.len(), path.display());
    }

    println!("{}", outcome.report.to_json()?);

    if !args.check_adaptation {
        return Ok(true);
    }
    match outcome.report.spikes.as_ref().map(|spikes| spikes.check()) {
        Some(Ok(())) => Ok(true),
        Some(Err(e)) => {
            error!("[SIM] adaptation check failed: {}", e);
            Ok(false)
        }
        None => {
            error!(
                "[SIM] adaptation check needs a design with a spike bit, got {}",
                outcome.report.design
            );
            Ok(false)
        }
    }
}

fn main() {
    let args = parse_args();
    match run(&args) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("alif_sim: {e:#}");
            process::exit(2);
        }
    }
}
