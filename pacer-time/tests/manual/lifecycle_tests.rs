// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer_runtime::impls::manual::ManualScheduler;
use pacer_test_utils::helpers::{advance_ms, ms};
use pacer_test_utils::{CallLog, Counter};
use pacer_time::prelude::*;

#[test]
fn test_dropping_debounced_cancels_pending_call() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let counter = Counter::new();
    let incr = counter
        .incrementer::<()>()
        .debounce_with_scheduler(ms(50), DebounceOptions::trailing(), scheduler.clone());
    incr.call(());
    assert_eq!(scheduler.pending(), 1);

    // Act
    drop(incr);

    // Assert
    assert_eq!(scheduler.pending(), 0);
    advance_ms(&scheduler, 100);
    assert_eq!(counter.get(), 0);

    Ok(())
}

#[test]
fn test_dropping_throttled_cancels_trailing_call() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let counter = Counter::new();
    let incr = counter.incrementer::<()>().throttle_with(
        ms(50),
        ThrottleOptions::default(),
        scheduler.clone(),
        scheduler.clone(),
    );
    incr.call(());
    incr.call(());

    // Act
    drop(incr);
    advance_ms(&scheduler, 100);

    // Assert
    assert_eq!(counter.get(), 1);
    assert_eq!(scheduler.pending(), 0);

    Ok(())
}

#[test]
fn test_clones_share_one_burst() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let log = CallLog::new();
    let record = debounce(
        log.recorder(),
        ms(50),
        DebounceOptions::trailing(),
        scheduler.clone(),
    );
    let other = record.clone();

    // Act
    record.call("from original");
    advance_ms(&scheduler, 25);
    other.call("from clone");
    drop(record);
    advance_ms(&scheduler, 50);

    // Assert
    assert_eq!(log.snapshot(), vec!["from clone"]);
    assert_eq!(other.last_result(), Some(1));

    Ok(())
}

#[test]
fn test_weak_handle_upgrades_while_alive() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let counter = Counter::new();
    let incr = counter.incrementer::<()>().throttle_with(
        ms(50),
        ThrottleOptions::default(),
        scheduler.clone(),
        scheduler.clone(),
    );
    let weak = incr.downgrade();

    // Act & Assert
    let upgraded = weak.upgrade();
    assert!(upgraded.is_some());
    assert_eq!(upgraded.map(|strong| strong.call(())), Some(Some(1)));

    drop(incr);
    assert!(weak.upgrade().is_none());

    Ok(())
}

#[test]
fn test_wrappers_report_configuration() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let counter = Counter::new();
    let debounced = counter
        .incrementer::<()>()
        .debounce_with_scheduler(ms(30), DebounceOptions::immediate(), scheduler.clone());
    let throttled = counter.incrementer::<()>().throttle_with(
        ms(40),
        ThrottleOptions::leading_only(),
        scheduler.clone(),
        scheduler.clone(),
    );

    // Act
    let debounced_debug = format!("{debounced:?}");
    let throttled_debug = format!("{throttled:?}");

    // Assert
    assert_eq!(debounced.wait(), ms(30));
    assert_eq!(throttled.wait(), ms(40));
    assert!(debounced_debug.contains("immediate: true"));
    assert!(throttled_debug.contains("trailing: false"));

    Ok(())
}
