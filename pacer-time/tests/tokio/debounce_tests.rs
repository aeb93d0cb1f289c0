// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer_core::PacerError;
use pacer_test_utils::helpers::ms;
use pacer_test_utils::{CallLog, Counter};
use pacer_time::prelude::*;
use tokio::time::{pause, sleep};

#[tokio::test]
async fn test_debounce_emits_after_quiet_period() -> anyhow::Result<()> {
    // Arrange
    pause();
    let counter = Counter::new();
    let incr = counter
        .incrementer::<()>()
        .debounce(ms(500), DebounceOptions::trailing())?;

    // Act & Assert
    incr.call(());
    sleep(ms(100)).await;
    assert_eq!(counter.get(), 0);

    sleep(ms(300)).await;
    assert_eq!(counter.get(), 0);

    sleep(ms(110)).await;
    assert_eq!(counter.get(), 1);
    assert_eq!(incr.last_result(), Some(1));

    Ok(())
}

#[tokio::test]
async fn test_debounce_resets_on_new_call() -> anyhow::Result<()> {
    // Arrange
    pause();
    let log = CallLog::new();
    let record = log.recorder().debounce(ms(500), DebounceOptions::trailing())?;

    // Act & Assert
    record.call("alice");
    sleep(ms(300)).await;
    assert!(log.is_empty());

    record.call("bob");
    sleep(ms(300)).await;
    assert!(log.is_empty());

    sleep(ms(210)).await;
    assert_eq!(log.snapshot(), vec!["bob"]);

    Ok(())
}

#[tokio::test]
async fn test_debounce_immediate_on_tokio() -> anyhow::Result<()> {
    // Arrange
    pause();
    let counter = Counter::new();
    let incr = counter
        .incrementer::<()>()
        .debounce(ms(64), DebounceOptions::immediate())?;

    // Act & Assert
    assert_eq!(incr.call(()), Some(1));
    sleep(ms(32)).await;
    assert_eq!(incr.call(()), Some(1));

    sleep(ms(70)).await;
    assert!(!incr.is_pending());
    assert_eq!(incr.call(()), Some(2));

    Ok(())
}

#[tokio::test]
async fn test_debounce_drop_aborts_timer_task() -> anyhow::Result<()> {
    // Arrange
    pause();
    let counter = Counter::new();
    let incr = counter
        .incrementer::<()>()
        .debounce(ms(50), DebounceOptions::trailing())?;
    incr.call(());

    // Act
    drop(incr);
    sleep(ms(100)).await;

    // Assert
    assert_eq!(counter.get(), 0);

    Ok(())
}

#[test]
fn test_debounce_outside_runtime_is_an_error() {
    let counter = Counter::new();

    let result = counter
        .incrementer::<()>()
        .debounce(ms(50), DebounceOptions::trailing());

    assert!(matches!(result, Err(PacerError::RuntimeUnavailable { .. })));
}
