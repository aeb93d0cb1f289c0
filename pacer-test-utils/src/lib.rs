// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the pacer workspace.
//!
//! Designed for development and testing only, not for production code.
//!
//! # Key Types
//!
//! - [`Counter`] - shared invocation counter with a ready-made incrementing callable
//! - [`Transcript`] - shared string that callables append to, to check call order
//! - [`CallLog`] - ordered record of the inputs a callable received
//! - [`Sequence`] - stack of follow-up inputs popped by re-entrant callables
//!
//! ## Driving virtual time
//!
//! ```rust
//! use pacer_runtime::impls::manual::ManualScheduler;
//! use pacer_test_utils::{helpers::call_at, Counter};
//!
//! let scheduler = ManualScheduler::new();
//! let counter = Counter::new();
//!
//! let seen = call_at(&scheduler, &[0, 10, 20], || counter.increment());
//! assert_eq!(seen, vec![1, 2, 3]);
//! ```

pub mod call_log;
pub mod counter;
pub mod helpers;
pub mod sequence;
pub mod transcript;

pub use call_log::CallLog;
pub use counter::Counter;
pub use sequence::Sequence;
pub use transcript::Transcript;
