// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deterministic virtual-time scheduler.
//!
//! [`ManualScheduler`] never runs anything on its own: time only moves when the
//! owner calls [`advance`](ManualScheduler::advance), which fires due tasks one by
//! one in deadline order. Tasks may schedule or cancel further tasks while they run;
//! those are honoured within the same `advance` if they fall due before its target.

use crate::clock::Clock;
use crate::scheduler::{Scheduler, Task};
use core::fmt;
use core::ops::{Add, Sub};
use core::time::Duration;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A point on the virtual timeline, measured from its epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VirtualInstant(Duration);

impl VirtualInstant {
    pub const EPOCH: Self = Self(Duration::ZERO);

    pub const fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    pub const fn since_epoch(self) -> Duration {
        self.0
    }
}

impl Add<Duration> for VirtualInstant {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        Self(self.0 + rhs)
    }
}

impl Sub<Duration> for VirtualInstant {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self {
        Self(self.0.saturating_sub(rhs))
    }
}

impl Sub<VirtualInstant> for VirtualInstant {
    type Output = Duration;

    /// Saturates at zero, like [`std::time::Instant`].
    fn sub(self, rhs: VirtualInstant) -> Duration {
        self.0.saturating_sub(rhs.0)
    }
}

/// Identifies a task queued on a [`ManualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ManualTaskHandle {
    deadline: VirtualInstant,
    id: u64,
}

impl ManualTaskHandle {
    pub fn deadline(&self) -> VirtualInstant {
        self.deadline
    }
}

#[derive(Default)]
struct TaskQueue {
    now: VirtualInstant,
    next_id: u64,
    tasks: BTreeMap<(VirtualInstant, u64), Task>,
}

/// Virtual-time [`Scheduler`] and [`Clock`] for deterministic tests.
///
/// Clones share the same timeline and queue.
///
/// # Example
///
/// ```
/// use pacer_runtime::impls::manual::ManualScheduler;
/// use pacer_runtime::scheduler::Scheduler;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// let fired = Arc::new(AtomicUsize::new(0));
/// let counter = fired.clone();
///
/// scheduler.schedule(
///     Duration::from_millis(32),
///     Box::new(move || {
///         counter.fetch_add(1, Ordering::SeqCst);
///     }),
/// );
///
/// scheduler.advance(Duration::from_millis(31));
/// assert_eq!(fired.load(Ordering::SeqCst), 0);
///
/// scheduler.advance(Duration::from_millis(1));
/// assert_eq!(fired.load(Ordering::SeqCst), 1);
/// ```
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Arc<Mutex<TaskQueue>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scheduler whose timeline starts at `instant` instead of the epoch.
    pub fn starting_at(instant: VirtualInstant) -> Self {
        let scheduler = Self::new();
        scheduler.queue.lock().now = instant;
        scheduler
    }

    pub fn now(&self) -> VirtualInstant {
        self.queue.lock().now
    }

    /// Number of tasks still queued.
    pub fn pending(&self) -> usize {
        self.queue.lock().tasks.len()
    }

    /// Moves time forward by `by`, firing every task that falls due on the way.
    ///
    /// Returns the number of tasks fired.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        self.advance_to(target)
    }

    /// Fires the tasks already due without moving time.
    pub fn run_due(&self) -> usize {
        self.advance(Duration::ZERO)
    }

    /// Moves time forward to `target`, firing due tasks in deadline order.
    ///
    /// The clock reads each task's deadline while that task runs. A target in the
    /// past leaves the clock where it is.
    pub fn advance_to(&self, target: VirtualInstant) -> usize {
        let mut fired = 0;

        loop {
            let task = {
                let mut queue = self.queue.lock();
                let due = queue
                    .tasks
                    .first_key_value()
                    .map(|(key, _)| *key)
                    .filter(|(deadline, _)| *deadline <= target);

                match due {
                    Some(key) => {
                        queue.now = queue.now.max(key.0);
                        queue.tasks.remove(&key)
                    }
                    None => {
                        queue.now = queue.now.max(target);
                        None
                    }
                }
            };

            // Run outside the lock: tasks routinely schedule follow-up tasks.
            match task {
                Some(task) => {
                    task();
                    fired += 1;
                }
                None => return fired,
            }
        }
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let queue = self.queue.lock();
        f.debug_struct("ManualScheduler")
            .field("now", &queue.now)
            .field("pending", &queue.tasks.len())
            .finish()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualTaskHandle;

    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle {
        let mut queue = self.queue.lock();
        let deadline = queue.now + delay;
        let id = queue.next_id;
        queue.next_id += 1;
        queue.tasks.insert((deadline, id), task);
        ManualTaskHandle { deadline, id }
    }

    fn cancel(&self, handle: &Self::Handle) {
        let removed = self.queue.lock().tasks.remove(&(handle.deadline, handle.id));
        // Dropped after the lock is released; the task may own a scheduler clone.
        drop(removed);
    }
}

impl Clock for ManualScheduler {
    type Instant = VirtualInstant;

    fn now(&self) -> Self::Instant {
        ManualScheduler::now(self)
    }
}
