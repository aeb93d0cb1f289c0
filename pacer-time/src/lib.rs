// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Time-based wrappers for callables with a runtime-agnostic scheduler abstraction.
//!
//! This crate turns any `FnMut(T) -> R` into a callable whose invocations are
//! constrained in time. The wrapped callable keeps one input type `T` (a value, a
//! tuple, or an [`Invocation`](pacer_core::Invocation) carrying a receiver) which is
//! captured and replayed verbatim for deferred invocations.
//!
//! # Overview
//!
//! - **[`Debounced`]** - invoke once a quiet period has elapsed (or on the leading edge)
//! - **[`Throttled`]** - invoke at most once per window, with leading/trailing edges
//! - **`DebounceExt`** - `.debounce_with_scheduler(wait, options, scheduler)` on closures
//! - **`ThrottleExt`** - `.throttle_with(wait, options, scheduler, clock)` on closures
//!
//! Deferred calls go through a [`Scheduler`](pacer_runtime::Scheduler); the throttle
//! window is measured with a [`Clock`](pacer_runtime::Clock). Both are injected, so
//! tests drive the wrappers with a virtual-time
//! [`ManualScheduler`](pacer_runtime::impls::manual::ManualScheduler).
//!
//! # Runtime Support
//!
//! - `runtime-tokio` (default) - `TokioScheduler`/`TokioClock` and the convenience
//!   `.debounce(wait, options)` / `.throttle(wait, options)` methods
//! - `tracing` (default) - timer and window transitions are logged through `tracing`
//!
//! # Example
//!
//! ```rust
//! use pacer_runtime::impls::manual::ManualScheduler;
//! use pacer_time::prelude::*;
//! use std::time::Duration;
//!
//! let scheduler = ManualScheduler::new();
//! let mut total = 0;
//! let save = debounce(
//!     move |delta: i32| {
//!         total += delta;
//!         total
//!     },
//!     Duration::from_millis(100),
//!     DebounceOptions::trailing(),
//!     scheduler.clone(),
//! );
//!
//! assert_eq!(save.call(1), None);
//! assert_eq!(save.call(2), None);
//!
//! scheduler.advance(Duration::from_millis(100));
//! assert_eq!(save.last_result(), Some(2));
//! ```

#[macro_use]
mod logging;

mod callback;
pub mod debounce;
pub mod prelude;
pub mod throttle;
mod timer_slot;

pub use debounce::{debounce, DebounceExt, DebounceOptions, Debounced, WeakDebounced};
pub use throttle::{throttle, ThrottleExt, ThrottleOptions, Throttled, WeakThrottled};

#[cfg(feature = "runtime-tokio")]
pub use debounce::{DebounceWithDefaultSchedulerExt, TokioDebounced};
#[cfg(feature = "runtime-tokio")]
pub use throttle::{ThrottleWithDefaultSchedulerExt, TokioThrottled};
