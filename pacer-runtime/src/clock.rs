// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::ops::{Add, Sub};
use core::time::Duration;
use parking_lot::Mutex;
use std::sync::Arc;

/// Source of the current instant.
///
/// Wrappers read the clock once per call, so every decision taken within one
/// synchronous turn sees the same instant.
pub trait Clock: Clone + Send + Sync + Debug + 'static {
    type Instant: Copy
        + Debug
        + Ord
        + Send
        + Sync
        + Add<Duration, Output = Self::Instant>
        + Sub<Self::Instant, Output = Duration>;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;
}

/// A clock whose reading can be pinned to a fixed instant.
///
/// While an override is installed every clone reports that instant; clearing it
/// falls back to the wrapped clock. Used to simulate the system time being set
/// backwards (or forwards) underneath a running wrapper.
///
/// # Example
///
/// ```
/// use pacer_runtime::clock::{Clock, OverridableClock};
/// use pacer_runtime::impls::manual::{ManualScheduler, VirtualInstant};
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::starting_at(VirtualInstant::from_millis(1_000));
/// let clock = OverridableClock::new(scheduler.clone());
///
/// clock.override_now(VirtualInstant::from_millis(10));
/// scheduler.advance(Duration::from_millis(200));
/// assert_eq!(clock.now(), VirtualInstant::from_millis(10));
///
/// clock.clear_override();
/// assert_eq!(clock.now(), VirtualInstant::from_millis(1_200));
/// ```
#[derive(Clone, Debug)]
pub struct OverridableClock<K: Clock> {
    inner: K,
    fixed: Arc<Mutex<Option<K::Instant>>>,
}

impl<K: Clock> OverridableClock<K> {
    pub fn new(inner: K) -> Self {
        Self {
            inner,
            fixed: Arc::new(Mutex::new(None)),
        }
    }

    /// Pins every subsequent reading to `instant`.
    pub fn override_now(&self, instant: K::Instant) {
        *self.fixed.lock() = Some(instant);
    }

    /// Restores readings from the wrapped clock.
    pub fn clear_override(&self) {
        *self.fixed.lock() = None;
    }

    pub fn is_overridden(&self) -> bool {
        self.fixed.lock().is_some()
    }

    pub fn inner(&self) -> &K {
        &self.inner
    }
}

impl<K: Clock> Clock for OverridableClock<K> {
    type Instant = K::Instant;

    fn now(&self) -> Self::Instant {
        let fixed = *self.fixed.lock();
        fixed.unwrap_or_else(|| self.inner.now())
    }
}
