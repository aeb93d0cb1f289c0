// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer_core::PacerError;
use pacer_test_utils::helpers::ms;
use pacer_test_utils::{CallLog, Counter};
use pacer_time::prelude::*;
use tokio::time::{pause, sleep};

#[tokio::test]
async fn test_throttle_leading_and_trailing_on_tokio() -> anyhow::Result<()> {
    // Arrange
    pause();
    let counter = Counter::new();
    let incr = counter
        .incrementer::<()>()
        .throttle(ms(100), ThrottleOptions::default())?;

    // Act & Assert
    assert_eq!(incr.call(()), Some(1));
    assert_eq!(incr.call(()), Some(1));

    sleep(ms(50)).await;
    assert_eq!(counter.get(), 1);

    sleep(ms(60)).await;
    assert_eq!(counter.get(), 2);
    assert_eq!(incr.last_result(), Some(2));

    Ok(())
}

#[tokio::test]
async fn test_throttle_window_measured_with_tokio_clock() -> anyhow::Result<()> {
    // Arrange
    pause();
    let log = CallLog::new();
    let record = log
        .recorder()
        .throttle(ms(100), ThrottleOptions::leading_only())?;

    // Act
    record.call(1);
    sleep(ms(40)).await;
    record.call(2);
    sleep(ms(70)).await;
    record.call(3);

    // Assert
    assert_eq!(log.snapshot(), vec![1, 3]);

    Ok(())
}

#[tokio::test]
async fn test_throttle_trailing_only_on_tokio() -> anyhow::Result<()> {
    // Arrange
    pause();
    let counter = Counter::new();
    let incr = counter
        .incrementer::<()>()
        .throttle(ms(60), ThrottleOptions::trailing_only())?;

    // Act
    incr.call(());
    incr.call(());

    // Assert
    assert_eq!(counter.get(), 0);
    sleep(ms(96)).await;
    assert_eq!(counter.get(), 1);

    Ok(())
}

#[tokio::test]
async fn test_throttle_flush_cancels_scheduled_task() -> anyhow::Result<()> {
    // Arrange
    pause();
    let log = CallLog::new();
    let record = log.recorder().throttle(ms(100), ThrottleOptions::default())?;
    record.call("a");
    record.call("b");

    // Act
    record.flush();
    sleep(ms(150)).await;

    // Assert
    assert_eq!(log.snapshot(), vec!["a", "b"]);

    Ok(())
}

#[test]
fn test_throttle_outside_runtime_is_an_error() {
    let counter = Counter::new();

    let result = counter
        .incrementer::<()>()
        .throttle(ms(50), ThrottleOptions::default());

    assert!(matches!(result, Err(PacerError::RuntimeUnavailable { .. })));
}
