// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;
use pacer_runtime::Scheduler;

/// Holds at most one outstanding deferred call.
///
/// Every armed timer carries a generation. A fire whose generation is no longer
/// the armed one lost a race against `disarm`/`arm` and must be ignored.
pub(crate) struct TimerSlot<H> {
    armed: Option<(H, u64)>,
    generation: u64,
}

impl<H> TimerSlot<H> {
    pub(crate) const fn new() -> Self {
        Self {
            armed: None,
            generation: 0,
        }
    }

    pub(crate) fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Replaces any armed timer with a new one firing `fire(generation)` after `delay`.
    pub(crate) fn arm<S, F>(&mut self, scheduler: &S, delay: Duration, fire: F)
    where
        S: Scheduler<Handle = H>,
        F: FnOnce(u64) + Send + 'static,
    {
        self.disarm(scheduler);
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        let handle = scheduler.schedule(delay, Box::new(move || fire(generation)));
        self.armed = Some((handle, generation));
    }

    /// Cancels the armed timer. Returns whether one was armed.
    pub(crate) fn disarm<S>(&mut self, scheduler: &S) -> bool
    where
        S: Scheduler<Handle = H>,
    {
        match self.armed.take() {
            Some((handle, _)) => {
                scheduler.cancel(&handle);
                true
            }
            None => false,
        }
    }

    /// Claims the fire of `generation`, clearing the slot when it is current.
    pub(crate) fn claim(&mut self, generation: u64) -> bool {
        match self.armed {
            Some((_, armed)) if armed == generation => {
                self.armed = None;
                true
            }
            _ => false,
        }
    }
}
