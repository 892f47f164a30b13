// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # alif-observability
//!
//! Logging setup shared by the ALIF tooling, with per-crate debug flag support.
//!
//! ## Features
//! - `file-logging`: per-run JSON log files with retention (desktop only)

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod init;

pub use cli::*;
pub use init::*;

/// Crate names accepted by `--debug-<crate>` flags
pub const KNOWN_CRATES: &[&str] = &["tt-alif", "alif-tile", "alif-sim"];
