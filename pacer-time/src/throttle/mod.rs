// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Throttling: invoke at most once per `wait`-long window.
//!
//! - **Leading edge** (`leading`, default on): a call made outside an active window
//!   runs the callable synchronously and opens a window.
//! - **Trailing edge** (`trailing`, default on): calls made inside the window
//!   capture their input; when the window closes the callable runs once more with
//!   the latest capture, which opens the next window.
//!
//! With `leading` disabled the first call of a quiet period opens the window
//! without running the callable, so exactly one trailing invocation happens per
//! quiet period. With `trailing` disabled calls inside the window are dropped.
//!
//! Windows are measured with the injected [`Clock`]. If the clock reports an
//! instant earlier than the last invocation, the window is treated as over and
//! restarts from the new reading.
//!
//! # Example
//!
//! ```rust
//! use pacer_runtime::impls::manual::ManualScheduler;
//! use pacer_time::{throttle, ThrottleOptions};
//! use std::time::Duration;
//!
//! let scheduler = ManualScheduler::new();
//! let mut counter = 0;
//! let incr = throttle(
//!     move |()| {
//!         counter += 1;
//!         counter
//!     },
//!     Duration::from_millis(100),
//!     ThrottleOptions::default(),
//!     scheduler.clone(),
//!     scheduler.clone(),
//! );
//!
//! assert_eq!(incr.call(()), Some(1));
//! assert_eq!(incr.call(()), Some(1));
//!
//! scheduler.advance(Duration::from_millis(100));
//! assert_eq!(incr.last_result(), Some(2));
//! ```

mod implementation;

pub use implementation::{Throttled, WeakThrottled};

use core::time::Duration;
use pacer_runtime::{Clock, Scheduler};

/// Edges on which a throttled callable runs.
///
/// Disabling both edges yields a callable that never runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottleOptions {
    pub leading: bool,
    pub trailing: bool,
}

impl ThrottleOptions {
    pub const fn new(leading: bool, trailing: bool) -> Self {
        Self { leading, trailing }
    }

    /// No leading invocation; one trailing invocation per quiet period.
    pub const fn trailing_only() -> Self {
        Self::new(false, true)
    }

    /// One leading invocation per window; calls inside the window are dropped.
    pub const fn leading_only() -> Self {
        Self::new(true, false)
    }
}

impl Default for ThrottleOptions {
    fn default() -> Self {
        Self::new(true, true)
    }
}

/// Wraps `func` so that it runs at most once per `wait`.
pub fn throttle<F, T, R, S, K>(
    func: F,
    wait: Duration,
    options: ThrottleOptions,
    scheduler: S,
    clock: K,
) -> Throttled<T, R, S, K>
where
    F: FnMut(T) -> R + Send + 'static,
    T: Send + 'static,
    R: Clone + Send + 'static,
    S: Scheduler,
    K: Clock,
{
    Throttled::new(func, wait, options, scheduler, clock)
}

/// Extension trait providing the `throttle` wrapper for callables.
pub trait ThrottleExt<T, R>: Sized {
    /// Throttles the callable to one invocation per `wait`, measuring windows with
    /// `clock` and scheduling trailing calls on `scheduler`.
    fn throttle_with<S: Scheduler, K: Clock>(
        self,
        wait: Duration,
        options: ThrottleOptions,
        scheduler: S,
        clock: K,
    ) -> Throttled<T, R, S, K>;
}

impl<F, T, R> ThrottleExt<T, R> for F
where
    F: FnMut(T) -> R + Send + 'static,
    T: Send + 'static,
    R: Clone + Send + 'static,
{
    fn throttle_with<S: Scheduler, K: Clock>(
        self,
        wait: Duration,
        options: ThrottleOptions,
        scheduler: S,
        clock: K,
    ) -> Throttled<T, R, S, K> {
        Throttled::new(self, wait, options, scheduler, clock)
    }
}

// =============================================================================
// Convenience extension trait with default scheduler
// =============================================================================

/// A [`Throttled`] driven by the tokio runtime.
#[cfg(feature = "runtime-tokio")]
pub type TokioThrottled<T, R> = Throttled<
    T,
    R,
    pacer_runtime::impls::tokio::TokioScheduler,
    pacer_runtime::impls::tokio::TokioClock,
>;

/// Extension trait for throttling on the tokio runtime driving the current thread.
#[cfg(feature = "runtime-tokio")]
pub trait ThrottleWithDefaultSchedulerExt<T, R>: Sized {
    /// Throttles the callable with a [`TokioScheduler`](pacer_runtime::impls::tokio::TokioScheduler)
    /// bound to the current runtime and a [`TokioClock`](pacer_runtime::impls::tokio::TokioClock).
    ///
    /// # Errors
    /// Returns [`PacerError::RuntimeUnavailable`](pacer_core::PacerError::RuntimeUnavailable)
    /// when called outside a tokio runtime.
    fn throttle(
        self,
        wait: Duration,
        options: ThrottleOptions,
    ) -> pacer_core::Result<TokioThrottled<T, R>>;
}

#[cfg(feature = "runtime-tokio")]
impl<F, T, R> ThrottleWithDefaultSchedulerExt<T, R> for F
where
    F: FnMut(T) -> R + Send + 'static,
    T: Send + 'static,
    R: Clone + Send + 'static,
{
    fn throttle(
        self,
        wait: Duration,
        options: ThrottleOptions,
    ) -> pacer_core::Result<TokioThrottled<T, R>> {
        let scheduler = pacer_runtime::impls::tokio::TokioScheduler::current()?;
        Ok(Throttled::new(
            self,
            wait,
            options,
            scheduler,
            pacer_runtime::impls::tokio::TokioClock,
        ))
    }
}
