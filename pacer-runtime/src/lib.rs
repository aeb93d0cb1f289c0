// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Clock and deferred-call scheduler seams.
//!
//! Every timing decision in pacer goes through two traits:
//!
//! - [`Clock`](clock::Clock) - reads the current instant
//! - [`Scheduler`](scheduler::Scheduler) - runs a task after a delay, cancelable
//!
//! Implementations live in [`impls`]: a tokio-backed scheduler and clock
//! (`runtime-tokio`, default), a wall clock, and a deterministic virtual-time
//! scheduler for tests.

pub mod clock;
pub mod impls;
pub mod scheduler;

pub use clock::{Clock, OverridableClock};
pub use scheduler::{Scheduler, Task};
