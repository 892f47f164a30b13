// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Testbench conformance errors

use core::fmt;

/// Result type for testbench checks
pub type TestbenchResult<T> = Result<T, TestbenchError>;

/// Output port of the tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Port {
    UoOut,
    UioOut,
    UioOe,
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Port::UoOut => write!(f, "uo_out"),
            Port::UioOut => write!(f, "uio_out"),
            Port::UioOe => write!(f, "uio_oe"),
        }
    }
}

/// Behavioral-conformance failures observed by the testbench
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TestbenchError {
    #[error("At cycle {cycle}: expected {port} = {expected}, got {actual}")]
    PortMismatch {
        cycle: u64,
        port: Port,
        expected: u8,
        actual: u8,
    },

    #[error("Expected at least {required} spikes, observed {observed}")]
    TooFewSpikes { required: usize, observed: usize },

    #[error("Spike intervals did not lengthen: first {first}, last {last}")]
    NotAdapting { first: u64, last: u64 },

    #[error("Spike intervals shortened between the first ({first}) and the last ({last})")]
    IntervalsShrank { first: u64, last: u64 },
}
