// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer_runtime::impls::manual::{ManualScheduler, VirtualInstant};
use std::time::Duration;

/// Performs one call at each of the given virtual times (milliseconds since the
/// scheduler's epoch, non-decreasing), firing due timers in between.
///
/// Returns what each call returned.
pub fn call_at<R>(
    scheduler: &ManualScheduler,
    times_ms: &[u64],
    mut call: impl FnMut() -> R,
) -> Vec<R> {
    times_ms
        .iter()
        .map(|&ms| {
            scheduler.advance_to(VirtualInstant::from_millis(ms));
            call()
        })
        .collect()
}

/// Advances virtual time by `ms` milliseconds.
pub fn advance_ms(scheduler: &ManualScheduler, ms: u64) -> usize {
    scheduler.advance(Duration::from_millis(ms))
}

/// Shorthand for `Duration::from_millis`.
pub const fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
