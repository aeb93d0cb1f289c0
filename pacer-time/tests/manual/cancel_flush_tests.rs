// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer_runtime::impls::manual::ManualScheduler;
use pacer_test_utils::helpers::{advance_ms, ms};
use pacer_test_utils::CallLog;
use pacer_time::prelude::*;

#[test]
fn test_debounce_flush_runs_pending_call_now() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let log = CallLog::new();
    let record = debounce(
        log.recorder(),
        ms(50),
        DebounceOptions::trailing(),
        scheduler.clone(),
    );
    record.call("first");
    record.call("second");

    // Act
    let flushed = record.flush();

    // Assert
    assert_eq!(flushed, Some(1));
    assert_eq!(log.snapshot(), vec!["second"]);
    assert!(!record.is_pending());

    advance_ms(&scheduler, 100);
    assert_eq!(log.len(), 1);

    Ok(())
}

#[test]
fn test_debounce_flush_without_pending_call_returns_last_result() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let log = CallLog::new();
    let record = debounce(
        log.recorder(),
        ms(50),
        DebounceOptions::trailing(),
        scheduler.clone(),
    );

    // Act & Assert
    assert_eq!(record.flush(), None);

    record.call(7);
    advance_ms(&scheduler, 50);
    assert_eq!(record.flush(), Some(1));
    assert_eq!(log.snapshot(), vec![7]);

    Ok(())
}

#[test]
fn test_debounce_cancel_drops_pending_call() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let log = CallLog::new();
    let record = debounce(
        log.recorder(),
        ms(50),
        DebounceOptions::trailing(),
        scheduler.clone(),
    );
    record.call(1);

    // Act
    record.cancel();
    advance_ms(&scheduler, 100);

    // Assert
    assert!(log.is_empty());
    assert!(!record.is_pending());
    assert_eq!(scheduler.pending(), 0);

    Ok(())
}

#[test]
fn test_debounce_cancel_then_call_starts_fresh() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let log = CallLog::new();
    let record = debounce(
        log.recorder(),
        ms(50),
        DebounceOptions::trailing(),
        scheduler.clone(),
    );
    record.call(1);
    advance_ms(&scheduler, 30);

    // Act
    record.cancel();
    record.call(2);
    advance_ms(&scheduler, 49);

    // Assert
    assert!(log.is_empty());

    advance_ms(&scheduler, 1);
    assert_eq!(log.snapshot(), vec![2]);

    Ok(())
}

#[test]
fn test_debounce_immediate_flush_does_not_invoke() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let log = CallLog::new();
    let record = debounce(
        log.recorder(),
        ms(50),
        DebounceOptions::immediate(),
        scheduler.clone(),
    );
    record.call(1);
    record.call(2);

    // Act
    let flushed = record.flush();

    // Assert
    assert_eq!(flushed, Some(1));
    assert_eq!(log.snapshot(), vec![1]);
    assert!(!record.is_pending());

    Ok(())
}

#[test]
fn test_throttle_flush_runs_trailing_call_now() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let log = CallLog::new();
    let record = throttle(
        log.recorder(),
        ms(100),
        ThrottleOptions::default(),
        scheduler.clone(),
        scheduler.clone(),
    );
    record.call(1);
    record.call(2);

    // Act
    let flushed = record.flush();

    // Assert
    assert_eq!(flushed, Some(2));
    assert_eq!(log.snapshot(), vec![1, 2]);
    assert!(!record.is_pending());

    // The flushed call opened a new window.
    record.call(3);
    assert_eq!(log.len(), 2);
    assert!(record.is_pending());

    Ok(())
}

#[test]
fn test_throttle_cancel_resets_window() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let log = CallLog::new();
    let record = throttle(
        log.recorder(),
        ms(100),
        ThrottleOptions::default(),
        scheduler.clone(),
        scheduler.clone(),
    );
    record.call(1);
    record.call(2);

    // Act
    record.cancel();
    advance_ms(&scheduler, 200);

    // Assert
    assert_eq!(log.snapshot(), vec![1]);

    advance_ms(&scheduler, 10);
    record.call(3);
    assert_eq!(log.snapshot(), vec![1, 3]);

    Ok(())
}

#[test]
fn test_throttle_cancel_inside_window_allows_immediate_leading_call() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let log = CallLog::new();
    let record = throttle(
        log.recorder(),
        ms(100),
        ThrottleOptions::default(),
        scheduler.clone(),
        scheduler.clone(),
    );
    record.call(1);

    // Act
    record.cancel();
    let result = record.call(2);

    // Assert
    assert_eq!(result, Some(2));
    assert_eq!(log.snapshot(), vec![1, 2]);

    Ok(())
}
