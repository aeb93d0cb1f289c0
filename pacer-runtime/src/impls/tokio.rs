// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(feature = "runtime-tokio")]
use std::time::Duration;

#[cfg(feature = "runtime-tokio")]
use crate::{clock::Clock, scheduler::Scheduler, scheduler::Task};

#[cfg(feature = "runtime-tokio")]
use pacer_core::{PacerError, Result};

#[cfg(feature = "runtime-tokio")]
use tokio::{runtime::Handle, task::AbortHandle};

/// Clock reading [`tokio::time::Instant`], so paused and advanced test time is honoured.
#[cfg(feature = "runtime-tokio")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioClock;

#[cfg(feature = "runtime-tokio")]
impl Clock for TokioClock {
    type Instant = tokio::time::Instant;

    fn now(&self) -> Self::Instant {
        tokio::time::Instant::now()
    }
}

/// Scheduler spawning one sleeping task per deferred call on a tokio runtime.
///
/// The runtime handle is captured at construction, so wrappers built inside a
/// runtime can later be called from plain threads.
#[cfg(feature = "runtime-tokio")]
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    handle: Handle,
}

#[cfg(feature = "runtime-tokio")]
impl TokioScheduler {
    /// Binds to the runtime driving the current thread.
    ///
    /// # Errors
    /// Returns [`PacerError::RuntimeUnavailable`] when called outside a tokio runtime.
    pub fn current() -> Result<Self> {
        Handle::try_current()
            .map(Self::from_handle)
            .map_err(|err| PacerError::runtime_unavailable(err.to_string()))
    }

    pub fn from_handle(handle: Handle) -> Self {
        Self { handle }
    }
}

/// Abort handle of a task spawned by [`TokioScheduler`].
#[cfg(feature = "runtime-tokio")]
#[derive(Debug)]
pub struct TokioTaskHandle(AbortHandle);

#[cfg(feature = "runtime-tokio")]
impl TokioTaskHandle {
    pub fn is_finished(&self) -> bool {
        self.0.is_finished()
    }
}

#[cfg(feature = "runtime-tokio")]
impl Scheduler for TokioScheduler {
    type Handle = TokioTaskHandle;

    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle {
        let join = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
        TokioTaskHandle(join.abort_handle())
    }

    fn cancel(&self, handle: &Self::Handle) {
        handle.0.abort();
    }
}
