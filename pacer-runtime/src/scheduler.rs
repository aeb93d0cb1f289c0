// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::time::Duration;

/// A deferred call, run at most once by the scheduler.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Runs tasks after a delay.
///
/// Delays are relative to the scheduler's own notion of time, never to a
/// [`Clock`](crate::clock::Clock) reading, so a clock jumping around cannot delay
/// or hasten a scheduled task. A zero delay means "as soon as possible", never
/// synchronously inside `schedule`.
///
/// Tasks with equal deadlines run in scheduling order.
pub trait Scheduler: Clone + Send + Sync + Debug + 'static {
    /// Identifies one scheduled task.
    type Handle: Send + Sync + Debug + 'static;

    /// Schedules `task` to run once `delay` has elapsed.
    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle;

    /// Cancels a scheduled task.
    ///
    /// Idempotent: cancelling a task that already ran or was already cancelled
    /// is a no-op.
    fn cancel(&self, handle: &Self::Handle);
}
