// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debouncing: coalesce a burst of calls into a single invocation.
//!
//! Every call restarts a quiet-period timer of length `wait`.
//!
//! **Trailing** mode (default):
//! - Each call captures its input, replacing the previous capture
//! - When `wait` elapses without another call, the callable runs once with the
//!   most recently captured input
//!
//! **Immediate** mode:
//! - The first call of a burst runs the callable synchronously and returns its result
//! - Later calls inside the burst only extend it
//! - Once `wait` elapses without a call the burst is over, and the next call runs
//!   the callable again
//!
//! Every call returns the result of the most recent invocation.
//!
//! # Example
//!
//! ```rust
//! use pacer_runtime::impls::manual::ManualScheduler;
//! use pacer_time::{DebounceExt, DebounceOptions};
//! use std::time::Duration;
//!
//! let scheduler = ManualScheduler::new();
//! let mut counter = 0;
//! let incr = (move |()| {
//!     counter += 1;
//!     counter
//! })
//! .debounce_with_scheduler(
//!     Duration::from_millis(64),
//!     DebounceOptions::immediate(),
//!     scheduler.clone(),
//! );
//!
//! assert_eq!(incr.call(()), Some(1));
//! assert_eq!(incr.call(()), Some(1));
//!
//! scheduler.advance(Duration::from_millis(64));
//! assert_eq!(incr.call(()), Some(2));
//! ```

mod implementation;

pub use implementation::{Debounced, WeakDebounced};

use core::time::Duration;
use pacer_runtime::Scheduler;

/// Edge on which a debounced callable runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DebounceOptions {
    /// Run on the leading edge of a burst instead of after the quiet period.
    pub immediate: bool,
}

impl DebounceOptions {
    pub const fn trailing() -> Self {
        Self { immediate: false }
    }

    pub const fn immediate() -> Self {
        Self { immediate: true }
    }
}

/// Wraps `func` so that bursts of calls collapse into a single invocation.
pub fn debounce<F, T, R, S>(
    func: F,
    wait: Duration,
    options: DebounceOptions,
    scheduler: S,
) -> Debounced<T, R, S>
where
    F: FnMut(T) -> R + Send + 'static,
    T: Send + 'static,
    R: Clone + Send + 'static,
    S: Scheduler,
{
    Debounced::new(func, wait, options, scheduler)
}

/// Extension trait providing the `debounce` wrapper for callables.
pub trait DebounceExt<T, R>: Sized {
    /// Debounces the callable by `wait`, scheduling deferred calls on `scheduler`.
    fn debounce_with_scheduler<S: Scheduler>(
        self,
        wait: Duration,
        options: DebounceOptions,
        scheduler: S,
    ) -> Debounced<T, R, S>;
}

impl<F, T, R> DebounceExt<T, R> for F
where
    F: FnMut(T) -> R + Send + 'static,
    T: Send + 'static,
    R: Clone + Send + 'static,
{
    fn debounce_with_scheduler<S: Scheduler>(
        self,
        wait: Duration,
        options: DebounceOptions,
        scheduler: S,
    ) -> Debounced<T, R, S> {
        Debounced::new(self, wait, options, scheduler)
    }
}

// =============================================================================
// Convenience extension trait with default scheduler
// =============================================================================

/// A [`Debounced`] driven by the tokio runtime.
#[cfg(feature = "runtime-tokio")]
pub type TokioDebounced<T, R> = Debounced<T, R, pacer_runtime::impls::tokio::TokioScheduler>;

/// Extension trait for debouncing on the tokio runtime driving the current thread.
#[cfg(feature = "runtime-tokio")]
pub trait DebounceWithDefaultSchedulerExt<T, R>: Sized {
    /// Debounces the callable with a [`TokioScheduler`](pacer_runtime::impls::tokio::TokioScheduler)
    /// bound to the current runtime.
    ///
    /// # Errors
    /// Returns [`PacerError::RuntimeUnavailable`](pacer_core::PacerError::RuntimeUnavailable)
    /// when called outside a tokio runtime.
    fn debounce(
        self,
        wait: Duration,
        options: DebounceOptions,
    ) -> pacer_core::Result<TokioDebounced<T, R>>;
}

#[cfg(feature = "runtime-tokio")]
impl<F, T, R> DebounceWithDefaultSchedulerExt<T, R> for F
where
    F: FnMut(T) -> R + Send + 'static,
    T: Send + 'static,
    R: Clone + Send + 'static,
{
    fn debounce(
        self,
        wait: Duration,
        options: DebounceOptions,
    ) -> pacer_core::Result<TokioDebounced<T, R>> {
        let scheduler = pacer_runtime::impls::tokio::TokioScheduler::current()?;
        Ok(Debounced::new(self, wait, options, scheduler))
    }
}
