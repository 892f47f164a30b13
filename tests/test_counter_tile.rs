// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Pin-level stimulus for the counter tile.
//!
//! Same sequence a clocked simulator would run against the chip: enable the
//! tile, hold reset low for five edges, release it, then check the count on
//! every following edge.

use tt_alif::prelude::*;
use tt_alif::tile::TestbenchResult;

#[test]
fn test_counter_increments() -> TestbenchResult<()> {
    let mut tb = Testbench::new(CounterTile::new());

    tb.set_ena(true).set_ui_in(0).set_uio_in(0);

    tb.hold_reset(5);

    tb.clock(1);
    tb.expect_uo_out(0)?;

    for i in 1..=8u32 {
        tb.clock(1);
        tb.expect_uo_out((i & 0xFF) as u8)?;
    }

    tb.expect_uio_out(0)?;
    tb.expect_uio_oe(0)?;
    Ok(())
}

#[test]
fn test_counter_wraps_after_255() -> TestbenchResult<()> {
    let mut tb = Testbench::new(CounterTile::new());
    tb.set_ena(true);
    tb.hold_reset(1);

    tb.clock(256);
    tb.expect_uo_out(255)?;
    tb.clock(1);
    tb.expect_uo_out(0)?;
    Ok(())
}

#[test]
fn test_counter_holds_while_disabled() -> TestbenchResult<()> {
    let mut tb = Testbench::new(CounterTile::new());
    tb.set_ena(true);
    tb.hold_reset(3);
    tb.clock(4); // samples 0..=3, register now 4

    tb.set_ena(false);
    tb.clock(10);
    tb.expect_uo_out(4)?;

    tb.set_ena(true);
    tb.clock(1);
    tb.expect_uo_out(4)?;
    tb.clock(1);
    tb.expect_uo_out(5)?;
    Ok(())
}

#[test]
fn test_mid_run_reset_restarts_count() -> TestbenchResult<()> {
    let mut tb = Testbench::new(CounterTile::new());
    tb.set_ena(true);
    tb.hold_reset(2);
    tb.clock(20);

    tb.hold_reset(1);
    tb.expect_uo_out(0)?;
    tb.clock(1);
    tb.expect_uo_out(0)?;
    tb.clock(1);
    tb.expect_uo_out(1)?;
    Ok(())
}

#[test]
fn test_wrong_expectation_is_reported() {
    let mut tb = Testbench::new(CounterTile::new());
    tb.set_ena(true);
    tb.hold_reset(5);
    tb.clock(3);

    let err = tb.expect_uo_out(7).unwrap_err();
    assert_eq!(
        err,
        TestbenchError::PortMismatch {
            cycle: 7,
            port: tt_alif::tile::Port::UoOut,
            expected: 7,
            actual: 2,
        }
    );
    assert!(err.to_string().contains("uo_out"));
}
