// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer_runtime::clock::OverridableClock;
use pacer_runtime::impls::manual::{ManualScheduler, VirtualInstant};
use pacer_test_utils::helpers::{advance_ms, ms};
use pacer_test_utils::Counter;
use pacer_time::prelude::*;

#[test]
fn test_throttle_recovers_when_clock_moves_backwards() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::starting_at(VirtualInstant::from_millis(1_000_000));
    let clock = OverridableClock::new(scheduler.clone());
    let counter = Counter::new();
    let incr = counter.incrementer::<()>().throttle_with(
        ms(100),
        ThrottleOptions::default(),
        scheduler.clone(),
        clock.clone(),
    );

    // Act & Assert
    assert_eq!(incr.call(()), Some(1));

    clock.override_now(VirtualInstant::from_millis(10));
    advance_ms(&scheduler, 200);

    assert_eq!(incr.call(()), Some(2));
    assert_eq!(counter.get(), 2);

    Ok(())
}

#[test]
fn test_throttle_window_restarts_from_regressed_reading() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::starting_at(VirtualInstant::from_millis(5_000));
    let clock = OverridableClock::new(scheduler.clone());
    let counter = Counter::new();
    let incr = counter.incrementer::<()>().throttle_with(
        ms(100),
        ThrottleOptions::leading_only(),
        scheduler.clone(),
        clock.clone(),
    );

    // Act & Assert
    incr.call(());
    clock.override_now(VirtualInstant::from_millis(10));
    incr.call(());
    assert_eq!(counter.get(), 2);

    // The regressed reading opened a fresh window.
    clock.override_now(VirtualInstant::from_millis(60));
    incr.call(());
    assert_eq!(counter.get(), 2);

    clock.override_now(VirtualInstant::from_millis(110));
    incr.call(());
    assert_eq!(counter.get(), 3);

    Ok(())
}

#[test]
fn test_throttle_trailing_edge_survives_clock_regression() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::starting_at(VirtualInstant::from_millis(1_000));
    let clock = OverridableClock::new(scheduler.clone());
    let counter = Counter::new();
    let incr = counter.incrementer::<()>().throttle_with(
        ms(100),
        ThrottleOptions::default(),
        scheduler.clone(),
        clock.clone(),
    );

    // Act
    incr.call(());
    incr.call(());
    clock.override_now(VirtualInstant::from_millis(10));
    advance_ms(&scheduler, 100);

    // Assert
    // The trailing timer is scheduler-relative, so it still fires.
    assert_eq!(counter.get(), 2);

    clock.clear_override();
    advance_ms(&scheduler, 100);
    assert_eq!(incr.call(()), Some(3));

    Ok(())
}
