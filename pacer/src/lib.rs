// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Pacer
//!
//! Function-rate-control primitives for arbitrary callables.
//!
//! ## Overview
//!
//! Pacer wraps any `FnMut(T) -> R` and constrains when it actually runs:
//!
//! - **Debounce** - collapse a burst of calls into one invocation, on the trailing
//!   edge after a quiet period or immediately on the leading edge
//! - **Throttle** - at most one invocation per window, with independently
//!   switchable leading and trailing edges
//! - **once / after / before** - invoke only on particular calls, memoizing results
//! - **wrap / compose / negate** - plain combinators
//!
//! Deferred invocations go through an injected [`Scheduler`] and throttle windows
//! are measured with an injected [`Clock`]. The tokio implementations are the
//! default; [`ManualScheduler`] drives the wrappers on virtual time for
//! deterministic tests.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pacer::prelude::*;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> pacer::Result<()> {
//!     let save = (|draft: String| println!("saving {draft}"))
//!         .debounce(Duration::from_millis(500), DebounceOptions::trailing())?;
//!
//!     save.call("h".to_string());
//!     save.call("hello".to_string());
//!
//!     // Only "hello" is saved, half a second after the last keystroke.
//!     tokio::time::sleep(Duration::from_secs(1)).await;
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `runtime-tokio` (default) - [`TokioScheduler`] and [`TokioClock`], plus the
//!   `.debounce(wait, options)` and `.throttle(wait, options)` conveniences
//! - `tracing` (default) - timer and window transitions are logged through `tracing`

// Re-export core types
pub use pacer_core::{Invocation, PacerError, Result};

// Re-export runtime abstractions
pub use pacer_runtime::clock::OverridableClock;
pub use pacer_runtime::impls::manual::{ManualScheduler, ManualTaskHandle, VirtualInstant};
pub use pacer_runtime::impls::system::SystemClock;
pub use pacer_runtime::{Clock, Scheduler, Task};

#[cfg(feature = "runtime-tokio")]
pub use pacer_runtime::impls::tokio::{TokioClock, TokioScheduler, TokioTaskHandle};

// Re-export the time-based wrappers
pub use pacer_time::{
    debounce, throttle, DebounceExt, DebounceOptions, Debounced, ThrottleExt, ThrottleOptions,
    Throttled, WeakDebounced, WeakThrottled,
};

#[cfg(feature = "runtime-tokio")]
pub use pacer_time::{
    DebounceWithDefaultSchedulerExt, ThrottleWithDefaultSchedulerExt, TokioDebounced,
    TokioThrottled,
};

// Re-export the counting wrappers and combinators
pub use pacer_func::{after, before, compose, negate, once, wrap};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{after, before, compose, negate, once, wrap};
    pub use crate::{debounce, throttle, DebounceExt, ThrottleExt};
    pub use crate::{DebounceOptions, Debounced, Invocation, ThrottleOptions, Throttled};

    #[cfg(feature = "runtime-tokio")]
    pub use crate::{DebounceWithDefaultSchedulerExt, ThrottleWithDefaultSchedulerExt};
}
