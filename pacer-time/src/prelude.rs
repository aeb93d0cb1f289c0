// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting all commonly used traits and types.
//!
//! ```ignore
//! use pacer_time::prelude::*;
//!
//! let save = save_document.debounce(Duration::from_millis(500), DebounceOptions::trailing())?;
//! let report = report_progress.throttle(Duration::from_millis(100), ThrottleOptions::default())?;
//! ```
//!
//! # Contents
//!
//! ## Extension Traits
//!
//! - [`DebounceExt`] - Collapse bursts of calls into one invocation
//! - [`ThrottleExt`] - At most one invocation per window
//!
//! ## Types
//!
//! - [`Debounced`], [`Throttled`] - The wrapped callables
//! - [`DebounceOptions`], [`ThrottleOptions`] - Edge configuration

pub use crate::debounce::{debounce, DebounceExt, DebounceOptions, Debounced};
pub use crate::throttle::{throttle, ThrottleExt, ThrottleOptions, Throttled};

#[cfg(feature = "runtime-tokio")]
pub use crate::debounce::DebounceWithDefaultSchedulerExt;
#[cfg(feature = "runtime-tokio")]
pub use crate::throttle::ThrottleWithDefaultSchedulerExt;
